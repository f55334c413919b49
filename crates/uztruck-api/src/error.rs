//! # API Error Types
//!
//! Central error type implementing `axum::response::IntoResponse`. Domain
//! errors from the library crates convert into it, and every failure
//! leaves the service as the same JSON envelope:
//! `{ "error": { "code", "message", "details?" } }`. Internal messages
//! are logged and never shown to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// The error payload.
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g. `"not_found"`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional context, present only for client errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application-level error mapped onto the HTTP surface.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Domain validation failed (422).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Request body could not be parsed (422).
    ///
    /// Normalized with `Validation` to 422: the client sent well-formed
    /// HTTP carrying semantically invalid content. Only malformed HTTP
    /// framing is a 400, and axum rejects that before the handler runs.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Conflict with current resource state (409).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Internal error (500). Logged, never returned to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_failed"),
            Self::BadRequest(_) => (StatusCode::UNPROCESSABLE_ENTITY, "bad_request"),
            Self::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            Self::Internal(_) => "an internal error occurred".to_string(),
            other => other.to_string(),
        };

        if let Self::Internal(_) = &self {
            tracing::error!(error = %self, "internal server error");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<uztruck_core::ValidationError> for AppError {
    fn from(err: uztruck_core::ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<uztruck_fleet::FleetError> for AppError {
    fn from(err: uztruck_fleet::FleetError) -> Self {
        // Registration referencing a truck or type that does not exist is
        // a body-content problem, not a routing one.
        Self::Validation(err.to_string())
    }
}

impl From<uztruck_deficiency::DeficiencyError> for AppError {
    fn from(err: uztruck_deficiency::DeficiencyError) -> Self {
        match &err {
            uztruck_deficiency::DeficiencyError::TruckNotFound { .. } => {
                Self::NotFound(err.to_string())
            }
            uztruck_deficiency::DeficiencyError::TooManyCountries { .. } => {
                Self::Validation(err.to_string())
            }
        }
    }
}
