//! Reporter errors.

use super::error_code::{self, ParityErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Reporter {reporter} failed to serialize: {message}")]
    Serialization {
        reporter: &'static str,
        message: String,
    },

    #[error("Reporter {reporter} failed to format output: {message}")]
    Format {
        reporter: &'static str,
        message: String,
    },
}

impl ParityErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
