//! Visual diff result types.

use std::fmt;

use base64::Engine;
use serde::{Deserialize, Serialize};

/// Original sizes when one or both screenshots were padded onto a shared canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaddingInfo {
    pub design_width: u32,
    pub design_height: u32,
    pub implementation_width: u32,
    pub implementation_height: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

/// Encoded PNG of the annotated diff. The caller decides where it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffImage {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl DiffImage {
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.png)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualDiffResult {
    pub similarity_percent: f64,
    pub pixel_difference_percent: f64,
    pub differing_pixels: u64,
    pub total_pixels: u64,
    pub width: u32,
    pub height: u32,
    pub threshold_used: f64,
    /// Where the caller persisted the diff image, if it did.
    pub diff_image_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<PaddingInfo>,
    #[serde(skip)]
    pub diff_image: Option<DiffImage>,
}

impl VisualDiffResult {
    pub fn with_diff_image_ref(mut self, reference: impl Into<String>) -> Self {
        self.diff_image_ref = Some(reference.into());
        self
    }

    pub fn was_padded(&self) -> bool {
        self.padding.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualSkipReason {
    ScreenshotsNotProvided,
}

impl fmt::Display for VisualSkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScreenshotsNotProvided => f.write_str("screenshots not provided"),
        }
    }
}

/// Visual section of a comparison result. Never omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VisualSection {
    Evaluated(VisualDiffResult),
    Skipped { reason: VisualSkipReason },
}

impl VisualSection {
    pub fn result(&self) -> Option<&VisualDiffResult> {
        match self {
            Self::Evaluated(result) => Some(result),
            Self::Skipped { .. } => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}
