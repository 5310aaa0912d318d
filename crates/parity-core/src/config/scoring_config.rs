//! Scoring weight configuration.

use serde::{Deserialize, Serialize};

/// Points deducted per deviation, by severity.
///
/// Changing these changes every historical score, so reports should record
/// the table they were produced with.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Default: 25.
    pub critical_weight: Option<f64>,
    /// Default: 15.
    pub major_weight: Option<f64>,
    /// Default: 8.
    pub medium_weight: Option<f64>,
    /// Default: 3.
    pub minor_weight: Option<f64>,
}

impl ScoringConfig {
    pub fn effective_critical_weight(&self) -> f64 {
        self.critical_weight.unwrap_or(25.0)
    }

    pub fn effective_major_weight(&self) -> f64 {
        self.major_weight.unwrap_or(15.0)
    }

    pub fn effective_medium_weight(&self) -> f64 {
        self.medium_weight.unwrap_or(8.0)
    }

    pub fn effective_minor_weight(&self) -> f64 {
        self.minor_weight.unwrap_or(3.0)
    }
}
