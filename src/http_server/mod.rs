//! HTTP API for student registration.
//!
//! Axum router exposing the student endpoints and health check; the
//! routing layer owns no decisions beyond translating between HTTP and
//! the validator/store components.

mod config;
mod errors;
mod response;
mod server;
mod student_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, FieldError};
pub use response::{Envelope, HealthResponse};
pub use server::HttpServer;
pub use student_routes::{health_routes, student_routes, AppState};
