//! Request-level error types
//!
//! Both failure classes are terminal for the request that raised them. They
//! are never retried and always reach the caller as a JSON body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A required creation field is missing or falsy (400).
    #[error("{0}")]
    Validation(&'static str),

    /// No record carries the requested id (404).
    #[error("{0}")]
    NotFound(&'static str),

    /// A foreign-key lookup matched nothing (404, reported under `message`).
    #[error("{0}")]
    NoMatches(String),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) | Self::NoMatches(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Validation(msg) | Self::NotFound(msg) => json!({ "error": msg }),
            Self::NoMatches(msg) => json!({ "message": msg }),
        };

        tracing::debug!(status = status.as_u16(), error = %self, "request rejected");

        (status, Json(body)).into_response()
    }
}
