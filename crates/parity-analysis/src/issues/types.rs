//! Issue types: the flat, export-ready view of one deviation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::deviation::{DeviationCategory, Severity};

/// Triage priority, ordered low to urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Base priority from severity: critical→high, major→medium, else low.
    pub fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::Critical => Self::High,
            Severity::Major => Self::Medium,
            Severity::Medium | Severity::Minor => Self::Low,
        }
    }

    /// One level up, saturating at `Urgent`.
    pub fn escalate(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High | Self::Urgent => Self::Urgent,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One deviation, flattened for CSV/table export. Holds no references back
/// into the trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub priority: Priority,
    pub category: DeviationCategory,
    /// Taxonomy bucket of the owning design node.
    pub module: String,
    pub property: String,
    pub expected: String,
    pub actual: String,
    pub design_ref: String,
    pub implementation_ref: Option<String>,
    pub confidence: f64,
    pub environment: String,
    pub context: String,
}
