//! Router construction for each service
//!
//! Trailing slashes are trimmed before routing, so `/patients/` is served as
//! `/patients` and `/appointments/patient/` resolves as an appointment id.

use axum::{Router, routing::get};
use tower_http::{normalize_path::NormalizePath, trace::TraceLayer};

use crate::handlers::{self, appointments, patients};
use crate::models::{Appointment, Patient};
use crate::state::{AppointmentState, PatientState};

/// A service router wrapped in trailing-slash normalisation
pub type App = NormalizePath<Router>;

pub fn appointment_router(state: AppointmentState) -> App {
    let router = Router::new()
        .route("/health", get(handlers::health::<Appointment>))
        .route(
            "/appointments",
            get(appointments::list_appointments).post(appointments::create_appointment),
        )
        .route("/appointments/{id}", get(appointments::get_appointment))
        .route(
            "/appointments/patient/{patient_id}",
            get(appointments::appointments_for_patient),
        )
        .fallback(handlers::route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}

pub fn patient_router(state: PatientState) -> App {
    let router = Router::new()
        .route("/health", get(handlers::health::<Patient>))
        .route(
            "/patients",
            get(patients::list_patients).post(patients::create_patient),
        )
        .route("/patients/{id}", get(patients::get_patient))
        .fallback(handlers::route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}
