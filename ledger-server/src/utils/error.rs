//! Unified error handling
//!
//! [`AppError`] is the application-level error type every handler returns.
//! Its [`IntoResponse`] impl converts each failure into the wire contract
//! `{"error": "<message>"}` with the matching status code:
//!
//! | Variant | Status |
//! |---------|--------|
//! | `Validation` | 400 |
//! | `Conflict` | 400 |
//! | `NotFound` | 404 |
//! | `Unavailable` | 500 |
//! | `Internal` | 500 |
//!
//! 5xx messages stay generic; the underlying detail goes to the log only.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// Wire-level error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing required input (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No record for the given id (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Store-side uniqueness violation (400)
    #[error("Resource conflict: {0}")]
    Conflict(String),

    /// Storage unreachable or timed out (500)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Anything else (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unavailable(msg) => {
                error!(target: "storage", error = %msg, "Storage unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage unavailable".to_string(),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Unavailable(msg) => AppError::Unavailable(msg),
            RepoError::Database(msg) => AppError::Internal(msg),
        }
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type for handlers
pub type AppResult<T> = Result<T, AppError>;
