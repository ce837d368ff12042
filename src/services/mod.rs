//! Business logic services
//!
//! This module contains the operations behind each HTTP route. Services
//! validate input, talk to the store and return domain values or a
//! [`ServiceError`](crate::error::ServiceError).

pub mod appointment_service;
pub mod health_service;
pub mod patient_service;

/// A string field counts as present only when it is non-empty
fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
