use tracing::info;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{Appointment, CreateAppointment};
use crate::state::AppointmentState;

use super::present;

pub const REQUIRED_FIELDS: &str = "Patient ID, date, time, and doctor are required";
pub const NOT_FOUND: &str = "Appointment not found";

pub async fn list_appointments(state: &AppointmentState) -> Vec<Appointment> {
    state.store.list().await
}

pub async fn get_appointment(state: &AppointmentState, id: &str) -> ServiceResult<Appointment> {
    state
        .store
        .get(id)
        .await
        .ok_or(ServiceError::NotFound(NOT_FOUND))
}

/// Validate the request and append a new appointment
///
/// Nothing is written unless all four fields are present and non-empty.
pub async fn create_appointment(
    state: &AppointmentState,
    payload: CreateAppointment,
) -> ServiceResult<Appointment> {
    let (Some(patient_id), Some(date), Some(time), Some(doctor)) = (
        present(payload.patient_id),
        present(payload.date),
        present(payload.time),
        present(payload.doctor),
    ) else {
        return Err(ServiceError::Validation(REQUIRED_FIELDS));
    };

    let appointment = state
        .store
        .insert_with(|id| Appointment {
            id,
            patient_id,
            date,
            time,
            doctor,
        })
        .await;

    info!(
        id = %appointment.id,
        patient_id = %appointment.patient_id,
        "appointment scheduled"
    );
    Ok(appointment)
}

/// Appointments referencing `patient_id`, in scheduling order
///
/// An empty result is reported as [`ServiceError::NoMatches`], never as an
/// empty success.
pub async fn appointments_for_patient(
    state: &AppointmentState,
    patient_id: &str,
) -> ServiceResult<Vec<Appointment>> {
    let appointments = state
        .store
        .filter(|appointment| appointment.patient_id == patient_id)
        .await;

    if appointments.is_empty() {
        return Err(ServiceError::NoMatches(format!(
            "No appointments found for patient {patient_id}"
        )));
    }
    Ok(appointments)
}
