use clap::Parser;

use clinic_registry::config::{DEFAULT_APPOINTMENT_PORT, ServiceConfig};
use clinic_registry::{AppointmentState, appointment_router, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::parse();
    telemetry::init_tracing(&config.log_level);

    let app_state = AppointmentState::seeded();
    let app = appointment_router(app_state);

    server::serve(
        app,
        config.socket_addr(DEFAULT_APPOINTMENT_PORT),
        AppointmentState::SERVICE_NAME,
    )
    .await
}
