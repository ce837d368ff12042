use serde_json::Number;
use tracing::info;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{CreatePatient, DEFAULT_CONDITION, Patient};
use crate::state::PatientState;

use super::present;

pub const REQUIRED_FIELDS: &str = "Name and age are required";
pub const NOT_FOUND: &str = "Patient not found";

pub async fn list_patients(state: &PatientState) -> Vec<Patient> {
    state.store.list().await
}

pub async fn get_patient(state: &PatientState, id: &str) -> ServiceResult<Patient> {
    state
        .store
        .get(id)
        .await
        .ok_or(ServiceError::NotFound(NOT_FOUND))
}

/// Validate the request and register a new patient
///
/// Any non-zero number is an acceptable age; zero counts as missing. A
/// missing or empty condition falls back to [`DEFAULT_CONDITION`].
pub async fn create_patient(state: &PatientState, payload: CreatePatient) -> ServiceResult<Patient> {
    let (Some(name), Some(age)) = (present(payload.name), payload.age.filter(is_nonzero)) else {
        return Err(ServiceError::Validation(REQUIRED_FIELDS));
    };
    let condition = present(payload.condition).unwrap_or_else(|| DEFAULT_CONDITION.to_string());

    let patient = state
        .store
        .insert_with(|id| Patient {
            id,
            name,
            age,
            condition,
        })
        .await;

    info!(id = %patient.id, "patient added");
    Ok(patient)
}

fn is_nonzero(age: &Number) -> bool {
    age.as_f64().is_some_and(|value| value != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, age: Option<u32>, condition: Option<&str>) -> CreatePatient {
        CreatePatient {
            name: name.map(str::to_string),
            age: age.map(Number::from),
            condition: condition.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn create_defaults_condition() {
        let state = PatientState::seeded();

        let created = create_patient(&state, request(Some("Amy"), Some(29), None))
            .await
            .unwrap();
        assert_eq!(created.id, "3");
        assert_eq!(created.condition, DEFAULT_CONDITION);

        let created = create_patient(&state, request(Some("Bo"), Some(51), Some("")))
            .await
            .unwrap();
        assert_eq!(created.id, "4");
        assert_eq!(created.condition, DEFAULT_CONDITION);
    }

    #[tokio::test]
    async fn create_keeps_given_condition() {
        let state = PatientState::seeded();
        let created = create_patient(&state, request(Some("Amy"), Some(29), Some("Asthma")))
            .await
            .unwrap();
        assert_eq!(created.condition, "Asthma");
        assert_eq!(get_patient(&state, "3").await.unwrap(), created);
    }

    #[tokio::test]
    async fn create_rejects_missing_name_or_age() {
        let state = PatientState::seeded();

        for payload in [
            request(Some("Amy"), None, None),
            request(Some("Amy"), Some(0), None),
            request(None, Some(30), None),
            request(Some(""), Some(30), None),
        ] {
            let err = create_patient(&state, payload).await.unwrap_err();
            assert!(matches!(err, ServiceError::Validation(REQUIRED_FIELDS)));
        }
        assert_eq!(list_patients(&state).await.len(), 2);
    }

    #[tokio::test]
    async fn create_accepts_fractional_negative_and_large_ages() {
        let state = PatientState::seeded();

        let ages = [
            Number::from_f64(30.5).unwrap(),
            Number::from(-1i64),
            Number::from(5_000_000_000u64),
        ];
        for (age, expected_id) in ages.into_iter().zip(["3", "4", "5"]) {
            let payload = CreatePatient {
                name: Some("Amy".to_string()),
                age: Some(age.clone()),
                condition: None,
            };
            let created = create_patient(&state, payload).await.unwrap();
            assert_eq!(created.id, expected_id);
            assert_eq!(created.age, age);
        }
        assert_eq!(list_patients(&state).await.len(), 5);
    }

    #[tokio::test]
    async fn create_rejects_fractional_zero() {
        let state = PatientState::seeded();
        let payload = CreatePatient {
            name: Some("Amy".to_string()),
            age: Some(Number::from_f64(0.0).unwrap()),
            condition: None,
        };
        let err = create_patient(&state, payload).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(REQUIRED_FIELDS)));
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let state = PatientState::seeded();
        let err = get_patient(&state, "99").await.unwrap_err();
        assert_eq!(err.to_string(), NOT_FOUND);
    }
}
