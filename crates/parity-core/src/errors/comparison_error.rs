//! Top-level comparison error.

use super::{ConfigError, InputError, ParityErrorCode, VisualDiffError};

/// Errors that abort a comparison run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ComparisonError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Visual diff error: {0}")]
    Visual(#[from] VisualDiffError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ParityErrorCode for ComparisonError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Visual(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
