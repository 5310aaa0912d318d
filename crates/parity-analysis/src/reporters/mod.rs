//! Reporters: output formats for comparison results.
//!
//! 2 reporter formats: JSON and console.

pub mod console;
pub mod json;

use parity_core::errors::ReportError;

use crate::engine::ComparisonResult;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, result: &ComparisonResult) -> Result<String, ReportError>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "json" => Some(Box::new(json::JsonReporter::default())),
        "console" => Some(Box::new(console::ConsoleReporter::default())),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["json", "console"]
}
