//! Application state management
//!
//! Each service process owns exactly one [`AppState`]. It is handed to every
//! handler through axum's `State` extractor, so no record collection lives in
//! a global.

use std::sync::Arc;

use serde_json::Number;

use crate::infrastructure::memory_store::{MemoryStore, Record};
use crate::models::{Appointment, Patient};

/// Per-service application state
///
/// Cheaply cloneable; clones share the same underlying store.
#[derive(Clone)]
pub struct AppState<R> {
    /// Name reported by the health endpoint
    pub service_name: &'static str,

    /// Records owned by this service
    pub store: Arc<MemoryStore<R>>,
}

impl<R: Record> AppState<R> {
    pub fn new(service_name: &'static str, records: Vec<R>) -> Self {
        Self {
            service_name,
            store: Arc::new(MemoryStore::with_records(records)),
        }
    }
}

pub type AppointmentState = AppState<Appointment>;
pub type PatientState = AppState<Patient>;

impl AppointmentState {
    pub const SERVICE_NAME: &'static str = "Appointment Service";

    /// State holding the startup appointments
    pub fn seeded() -> Self {
        Self::new(Self::SERVICE_NAME, seed_appointments())
    }

    #[cfg(test)]
    pub fn empty() -> Self {
        Self::new(Self::SERVICE_NAME, Vec::new())
    }
}

impl PatientState {
    pub const SERVICE_NAME: &'static str = "Patient Service";

    /// State holding the startup patients
    pub fn seeded() -> Self {
        Self::new(Self::SERVICE_NAME, seed_patients())
    }
}

fn seed_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "1".to_string(),
            patient_id: "1".to_string(),
            date: "2023-06-15".to_string(),
            time: "10:00".to_string(),
            doctor: "Dr. Smith".to_string(),
        },
        Appointment {
            id: "2".to_string(),
            patient_id: "2".to_string(),
            date: "2023-06-16".to_string(),
            time: "14:30".to_string(),
            doctor: "Dr. Johnson".to_string(),
        },
    ]
}

fn seed_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            age: Number::from(30u32),
            condition: "Healthy".to_string(),
        },
        Patient {
            id: "2".to_string(),
            name: "Jane Smith".to_string(),
            age: Number::from(45u32),
            condition: "Hypertension".to_string(),
        },
    ]
}
