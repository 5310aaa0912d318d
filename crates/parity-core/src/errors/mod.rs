//! Error handling for the parity engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod comparison_error;
pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod report_error;
pub mod visual_error;

pub use comparison_error::ComparisonError;
pub use config_error::ConfigError;
pub use error_code::ParityErrorCode;
pub use input_error::InputError;
pub use report_error::ReportError;
pub use visual_error::{ImageSide, VisualDiffError};
