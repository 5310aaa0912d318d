//! Configuration errors.

use super::error_code::{self, ParityErrorCode};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Parity config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Parity config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Parity config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Invalid parity config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ParityErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
