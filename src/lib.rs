//! Clinic registry services
//!
//! This library provides the appointment and patient resource services. Each
//! one is an axum router over its own in-memory store and runs as a separate
//! process through the binaries in `src/bin`. The routers can also be mounted
//! directly for testing or embedding.

pub mod config;
pub mod error;
pub mod handlers;
pub mod infrastructure;
pub mod models;
pub mod routes;
pub mod server;
pub mod services;
pub mod state;
pub mod telemetry;

// Re-export commonly used types for convenience
pub use error::{ServiceError, ServiceResult};
pub use models::*;
pub use routes::{App, appointment_router, patient_router};
pub use state::{AppState, AppointmentState, PatientState};
