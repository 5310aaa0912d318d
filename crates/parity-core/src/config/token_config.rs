//! Token pipeline configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TokenConfig {
    /// Tokens kept per category after ranking by usage. Default: 50.
    pub top_n: Option<usize>,
    /// Pixel size of `1rem` when parsing registry values. Default: 16.
    pub rem_base_px: Option<f64>,
}

impl TokenConfig {
    pub fn effective_top_n(&self) -> usize {
        self.top_n.unwrap_or(50)
    }

    pub fn effective_rem_base_px(&self) -> f64 {
        self.rem_base_px.unwrap_or(16.0)
    }
}
