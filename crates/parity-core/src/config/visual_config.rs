//! Visual diff configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VisualConfig {
    /// Per-channel tolerance (0.0-1.0) for the pixel difference test. Default: 0.1.
    pub threshold: Option<f64>,
}

impl VisualConfig {
    pub fn effective_threshold(&self) -> f64 {
        self.threshold.unwrap_or(0.1)
    }
}
