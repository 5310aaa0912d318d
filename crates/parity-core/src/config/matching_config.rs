//! Node matching configuration.

use serde::{Deserialize, Serialize};

/// Attributes checked, in order, for a design key on implementation nodes.
pub const DEFAULT_DESIGN_KEY_ATTRIBUTES: &[&str] =
    &["data-design-id", "data-figma-id", "data-node-id"];

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatchingConfig {
    /// Implementation attributes that may carry a design node id or name.
    #[serde(default)]
    pub design_key_attributes: Vec<String>,
    /// Minimum bounding-box intersection-over-union for a geometric match. Default: 0.5.
    pub min_overlap: Option<f64>,
    /// Pair remaining nodes by document order inside a bucket when neither
    /// side carries geometry. Default: true.
    pub positional_fallback: Option<bool>,
}

impl MatchingConfig {
    pub fn effective_design_key_attributes(&self) -> Vec<String> {
        if self.design_key_attributes.is_empty() {
            DEFAULT_DESIGN_KEY_ATTRIBUTES
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.design_key_attributes.clone()
        }
    }

    pub fn effective_min_overlap(&self) -> f64 {
        self.min_overlap.unwrap_or(0.5)
    }

    pub fn effective_positional_fallback(&self) -> bool {
        self.positional_fallback.unwrap_or(true)
    }
}
