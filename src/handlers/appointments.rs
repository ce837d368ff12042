use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::error::{ServiceError, ServiceResult};
use crate::models::*;
use crate::services::appointment_service;
use crate::state::AppointmentState;

pub async fn list_appointments(State(state): State<AppointmentState>) -> Json<AppointmentList> {
    let appointments = appointment_service::list_appointments(&state).await;
    Json(AppointmentList {
        message: "Appointments retrieved successfully",
        count: appointments.len(),
        appointments,
    })
}

pub async fn get_appointment(
    State(state): State<AppointmentState>,
    Path(id): Path<String>,
) -> ServiceResult<Json<AppointmentEnvelope>> {
    let appointment = appointment_service::get_appointment(&state, &id).await?;
    Ok(Json(AppointmentEnvelope {
        message: "Appointment found",
        appointment,
    }))
}

/// Schedule a new appointment
///
/// A body that cannot be read as a creation request is reported the same way
/// as one with missing fields.
pub async fn create_appointment(
    State(state): State<AppointmentState>,
    payload: Result<Json<CreateAppointment>, JsonRejection>,
) -> ServiceResult<(StatusCode, Json<AppointmentEnvelope>)> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "unreadable appointment body");
        ServiceError::Validation(appointment_service::REQUIRED_FIELDS)
    })?;

    let appointment = appointment_service::create_appointment(&state, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(AppointmentEnvelope {
            message: "Appointment scheduled successfully",
            appointment,
        }),
    ))
}

pub async fn appointments_for_patient(
    State(state): State<AppointmentState>,
    Path(patient_id): Path<String>,
) -> ServiceResult<Json<PatientAppointments>> {
    let appointments = appointment_service::appointments_for_patient(&state, &patient_id).await?;
    Ok(Json(PatientAppointments {
        message: format!("Found {} appointment(s)", appointments.len()),
        appointments,
    }))
}
