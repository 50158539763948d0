//! # API Errors
//!
//! Error types for the HTTP surface. Validation failures and duplicate
//! emails are normal 400 responses; anything unexpected becomes a generic
//! 500 with the detail logged server-side only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::observability::{Logger, Severity};
use crate::store::StoreError;
use crate::validator::FormErrors;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// One rejected field in a validation response
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// One or more fields failed validation; all failures are reported
    /// together, never just the first.
    #[error("Validation errors")]
    Validation(Vec<FieldError>),

    /// Email uniqueness violation (pre-check or constraint, same response)
    #[error("Email already exists")]
    DuplicateEmail,

    /// Lookup by id yielded nothing
    #[error("Student not found")]
    NotFound,

    /// Unexpected failure; the detail never reaches the caller
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::DuplicateEmail => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FormErrors> for ApiError {
    fn from(errors: FormErrors) -> Self {
        let fields = errors
            .issues()
            .into_iter()
            .map(|(field, issue)| FieldError {
                field,
                message: issue.message,
            })
            .collect();
        ApiError::Validation(fields)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => ApiError::DuplicateEmail,
            StoreError::Unavailable(source) => ApiError::Internal(source.to_string()),
            StoreError::Backend(source) => ApiError::Internal(source.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Validation(fields) => json!({
                "success": false,
                "message": "Validation errors",
                "errors": fields,
            }),
            ApiError::Internal(detail) => {
                Logger::log_stderr(
                    Severity::Error,
                    "internal_error",
                    &[("detail", detail.as_str())],
                );
                json!({
                    "success": false,
                    "message": "Internal server error",
                })
            }
            other => json!({
                "success": false,
                "message": other.to_string(),
            }),
        };
        (status, Json(body)).into_response()
    }
}
