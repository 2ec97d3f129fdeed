//! Error types for the backend API surface

use crate::affect::AffectError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Missing or invalid credentials (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Affect engine failure; status depends on the kind
    #[error(transparent)]
    Affect(#[from] AffectError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error(transparent)]
    Other(#[from] anyhow::Error),

    /// vibetrackr-common error
    #[error("Common error: {0}")]
    Common(#[from] vibetrackr_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
            ApiError::Affect(ref err) => match err {
                AffectError::EmptyInput => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EMPTY_JOURNAL",
                    err.to_string(),
                ),
                AffectError::BackendUnavailable(_) => (
                    StatusCode::BAD_GATEWAY,
                    "VAD_BACKEND_UNAVAILABLE",
                    err.to_string(),
                ),
                AffectError::MalformedResponse(_) => (
                    StatusCode::BAD_GATEWAY,
                    "VAD_BACKEND_MALFORMED",
                    err.to_string(),
                ),
            },
            ApiError::Io(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "IO_ERROR",
                err.to_string(),
            ),
            ApiError::Other(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                err.to_string(),
            ),
            ApiError::Common(ref err) => match err {
                vibetrackr_common::Error::NotFound(msg) => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone())
                }
                vibetrackr_common::Error::InvalidInput(msg) => {
                    (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone())
                }
                other => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "COMMON_ERROR",
                    other.to_string(),
                ),
            },
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
