use clap::Parser;

use clinic_registry::config::{DEFAULT_PATIENT_PORT, ServiceConfig};
use clinic_registry::{PatientState, patient_router, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::parse();
    telemetry::init_tracing(&config.log_level);

    let app_state = PatientState::seeded();
    let app = patient_router(app_state);

    server::serve(
        app,
        config.socket_addr(DEFAULT_PATIENT_PORT),
        PatientState::SERVICE_NAME,
    )
    .await
}
