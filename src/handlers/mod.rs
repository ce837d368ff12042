//! HTTP request handlers
//!
//! This module contains all the HTTP endpoint handlers. Each handler is responsible
//! for extracting data from HTTP requests, calling the appropriate services, and
//! returning HTTP responses.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

use crate::infrastructure::memory_store::Record;
use crate::models::HealthStatus;
use crate::services::health_service;
use crate::state::AppState;

pub mod appointments;
pub mod patients;

/// Liveness probe shared by both services
pub async fn health<R: Record>(State(state): State<AppState<R>>) -> Json<HealthStatus> {
    Json(health_service::health_status(state.service_name))
}

/// JSON 404 for paths neither service routes
pub async fn route_not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Route not found" })))
}
