//! Visual diff errors.

use std::fmt;

use super::error_code::{self, ParityErrorCode};

/// Which screenshot of the pair an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSide {
    Design,
    Implementation,
}

impl fmt::Display for ImageSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Design => f.write_str("design"),
            Self::Implementation => f.write_str("implementation"),
        }
    }
}

/// Errors that abort a pixel comparison. A degenerate or undecodable image
/// never yields a silent zero score.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VisualDiffError {
    #[error("{side} image decode failed: {reason}")]
    Decode { side: ImageSide, reason: String },

    #[error("{side} image has degenerate dimensions {width}x{height}")]
    DegenerateDimensions {
        side: ImageSide,
        width: u32,
        height: u32,
    },

    #[error("visual diff threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f64),

    #[error("diff image encode failed: {0}")]
    Encode(String),
}

impl ParityErrorCode for VisualDiffError {
    fn error_code(&self) -> &'static str {
        error_code::VISUAL_DIFF_ERROR
    }
}
