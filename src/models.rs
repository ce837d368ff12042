//! Domain models and data structures
//!
//! This module contains the record types owned by each service, the request
//! bodies accepted on creation, and the JSON envelopes returned to clients.
//! These are "pure" data structures without business logic.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::infrastructure::memory_store::Record;

/// Condition stored when a patient is created without one
pub const DEFAULT_CONDITION: &str = "Not specified";

/// Scheduled appointment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    /// Plain copy of a patient id, never checked against the patient service
    #[serde(rename = "patientId")]
    pub patient_id: String,
    pub date: String,
    pub time: String,
    pub doctor: String,
}

impl Record for Appointment {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Registered patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    /// Any JSON number, echoed back exactly as received
    pub age: Number,
    pub condition: String,
}

impl Record for Patient {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Appointment creation request from clients
///
/// Every field is optional at the wire level so that presence can be checked
/// by the service before an [`Appointment`] is built.
#[derive(Debug, Default, Deserialize)]
pub struct CreateAppointment {
    #[serde(rename = "patientId")]
    pub patient_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub doctor: Option<String>,
}

/// Patient creation request from clients
#[derive(Debug, Default, Deserialize)]
pub struct CreatePatient {
    pub name: Option<String>,
    pub age: Option<Number>,
    pub condition: Option<String>,
}

/// Health check payload
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

/// Full appointment listing
#[derive(Debug, Serialize)]
pub struct AppointmentList {
    pub message: &'static str,
    pub count: usize,
    pub appointments: Vec<Appointment>,
}

/// Single appointment, returned on lookup and creation
#[derive(Debug, Serialize)]
pub struct AppointmentEnvelope {
    pub message: &'static str,
    pub appointment: Appointment,
}

/// Appointments matching a patient id
#[derive(Debug, Serialize)]
pub struct PatientAppointments {
    pub message: String,
    pub appointments: Vec<Appointment>,
}

/// Full patient listing
#[derive(Debug, Serialize)]
pub struct PatientList {
    pub message: &'static str,
    pub count: usize,
    pub patients: Vec<Patient>,
}

/// Single patient, returned on lookup and creation
#[derive(Debug, Serialize)]
pub struct PatientEnvelope {
    pub message: &'static str,
    pub patient: Patient,
}
