//! ParityErrorCode trait for structured error codes at the API boundary.

/// Every error enum implements this to expose a stable machine-readable code
/// next to its human-readable message.
pub trait ParityErrorCode {
    /// Returns the error code string (e.g., "MALFORMED_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MALFORMED_INPUT: &str = "MALFORMED_INPUT";
pub const VISUAL_DIFF_ERROR: &str = "VISUAL_DIFF_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
