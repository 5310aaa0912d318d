//! Deviation tolerance configuration.

use serde::{Deserialize, Serialize};

/// Per-property tolerances and severity bands.
///
/// Color distances are percentages (0-100) of the maximum RGB distance;
/// every other distance is in CSS pixels.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DeviationConfig {
    /// Color distance at or below which no deviation is raised. Default: 10.0.
    pub color_tolerance: Option<f64>,
    /// Color distance above which a deviation is major. Default: 10.0.
    pub color_major: Option<f64>,
    /// Color distance above which a deviation is critical. Default: 30.0.
    pub color_critical: Option<f64>,
    /// Font size delta tolerated before a medium deviation. Default: 2.0.
    pub font_size_tolerance: Option<f64>,
    /// Font size delta above which the deviation is major. Default: 6.0.
    pub font_size_major: Option<f64>,
    /// Line height delta tolerated before a minor deviation. Default: 2.0.
    pub line_height_tolerance: Option<f64>,
    /// Spacing delta above which a minor deviation is raised. Default: 8.0.
    pub spacing_minor: Option<f64>,
    /// Spacing delta above which the deviation is major. Default: 16.0.
    pub spacing_major: Option<f64>,
    /// Corner radius delta tolerated before a minor deviation. Default: 2.0.
    pub radius_tolerance: Option<f64>,
}

impl DeviationConfig {
    pub fn effective_color_tolerance(&self) -> f64 {
        self.color_tolerance.unwrap_or(10.0)
    }

    pub fn effective_color_major(&self) -> f64 {
        self.color_major.unwrap_or(10.0)
    }

    pub fn effective_color_critical(&self) -> f64 {
        self.color_critical.unwrap_or(30.0)
    }

    pub fn effective_font_size_tolerance(&self) -> f64 {
        self.font_size_tolerance.unwrap_or(2.0)
    }

    pub fn effective_font_size_major(&self) -> f64 {
        self.font_size_major.unwrap_or(6.0)
    }

    pub fn effective_line_height_tolerance(&self) -> f64 {
        self.line_height_tolerance.unwrap_or(2.0)
    }

    pub fn effective_spacing_minor(&self) -> f64 {
        self.spacing_minor.unwrap_or(8.0)
    }

    pub fn effective_spacing_major(&self) -> f64 {
        self.spacing_major.unwrap_or(16.0)
    }

    pub fn effective_radius_tolerance(&self) -> f64 {
        self.radius_tolerance.unwrap_or(2.0)
    }
}
