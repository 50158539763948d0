//! CLI-specific error types
//!
//! All CLI errors are fatal: the process prints them and exits non-zero.

use std::fmt;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// Storage backend could not be initialized
    StorageError,
    /// HTTP server failed
    ServerError,
    /// Async runtime failed to start
    RuntimeError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "CONFIG_ERROR",
            Self::StorageError => "STORAGE_ERROR",
            Self::ServerError => "SERVER_ERROR",
            Self::RuntimeError => "RUNTIME_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn storage_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::StorageError, msg)
    }

    pub fn server_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServerError, msg)
    }

    pub fn runtime_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::RuntimeError, msg)
    }

    pub fn code(&self) -> CliErrorCode {
        self.code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
