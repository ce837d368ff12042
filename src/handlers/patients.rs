use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::error::{ServiceError, ServiceResult};
use crate::models::*;
use crate::services::patient_service;
use crate::state::PatientState;

pub async fn list_patients(State(state): State<PatientState>) -> Json<PatientList> {
    let patients = patient_service::list_patients(&state).await;
    Json(PatientList {
        message: "Patients retrieved successfully",
        count: patients.len(),
        patients,
    })
}

pub async fn get_patient(
    State(state): State<PatientState>,
    Path(id): Path<String>,
) -> ServiceResult<Json<PatientEnvelope>> {
    let patient = patient_service::get_patient(&state, &id).await?;
    Ok(Json(PatientEnvelope {
        message: "Patient found",
        patient,
    }))
}

pub async fn create_patient(
    State(state): State<PatientState>,
    payload: Result<Json<CreatePatient>, JsonRejection>,
) -> ServiceResult<(StatusCode, Json<PatientEnvelope>)> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "unreadable patient body");
        ServiceError::Validation(patient_service::REQUIRED_FIELDS)
    })?;

    let patient = patient_service::create_patient(&state, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(PatientEnvelope {
            message: "Patient added successfully",
            patient,
        }),
    ))
}
