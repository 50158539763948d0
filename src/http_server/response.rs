//! # Response Formatting
//!
//! Standard success envelopes for the student API.

use serde::Serialize;

/// Success envelope: `{success: true, message, data}`
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

/// Health check body
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK",
            message: "Server is running",
        }
    }
}
