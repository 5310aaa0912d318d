//! Comparison engine: orchestrates validation, classification, token
//! summary, matching, deviation detection, scoring, and the optional
//! visual diff into one `ComparisonResult`.

pub mod comparison;
pub mod types;
pub mod validation;

pub use comparison::ComparisonEngine;
pub use types::{
    ComparisonInput, ComparisonResult, DeviationRecord, MatchedPair, ScreenshotPair,
    UnmatchedDesign, UnmatchedImplementation,
};
pub use validation::{validate_design, validate_implementation};
