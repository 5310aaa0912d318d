//! Issue export configuration.

use serde::{Deserialize, Serialize};

/// Taxonomy buckets treated as interactive for priority escalation.
pub const DEFAULT_INTERACTIVE_CATEGORIES: &[&str] =
    &["atoms.buttons", "atoms.inputs", "atoms.links"];

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IssueConfig {
    /// Environment string copied onto every issue (e.g. "staging"). Default: "unspecified".
    pub environment: Option<String>,
    /// Prefix for generated issue ids. Default: "DPI".
    pub id_prefix: Option<String>,
    /// Escalate issues on interactive elements. Default: true.
    pub escalate_interactive: Option<bool>,
    /// Escalate color issues. Default: true.
    pub escalate_color: Option<bool>,
    /// Buckets counted as interactive.
    #[serde(default)]
    pub interactive_categories: Vec<String>,
}

impl IssueConfig {
    pub fn effective_environment(&self) -> String {
        self.environment
            .clone()
            .unwrap_or_else(|| "unspecified".to_string())
    }

    pub fn effective_id_prefix(&self) -> String {
        self.id_prefix.clone().unwrap_or_else(|| "DPI".to_string())
    }

    pub fn effective_escalate_interactive(&self) -> bool {
        self.escalate_interactive.unwrap_or(true)
    }

    pub fn effective_escalate_color(&self) -> bool {
        self.escalate_color.unwrap_or(true)
    }

    pub fn effective_interactive_categories(&self) -> Vec<String> {
        if self.interactive_categories.is_empty() {
            DEFAULT_INTERACTIVE_CATEGORIES
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.interactive_categories.clone()
        }
    }
}
