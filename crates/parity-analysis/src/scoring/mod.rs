//! Scoring: additive-penalty match score.
//!
//! Start at 100, deduct a fixed weight per deviation by severity, clamp at 0.
//! The weight table is policy: changing it changes every historical score.

use parity_core::config::ScoringConfig;
use serde::{Deserialize, Serialize};

use crate::deviation::{Deviation, Severity};

pub const MAX_SCORE: f64 = 100.0;

/// Points deducted per deviation. Total over `Severity`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityWeights {
    pub critical: f64,
    pub major: f64,
    pub medium: f64,
    pub minor: f64,
}

impl Default for SeverityWeights {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}

impl SeverityWeights {
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            critical: config.effective_critical_weight(),
            major: config.effective_major_weight(),
            medium: config.effective_medium_weight(),
            minor: config.effective_minor_weight(),
        }
    }

    pub fn weight(&self, severity: Severity) -> f64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::Major => self.major,
            Severity::Medium => self.medium,
            Severity::Minor => self.minor,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub major: usize,
    pub medium: usize,
    pub minor: usize,
}

impl SeverityCounts {
    pub fn from_severities(severities: impl IntoIterator<Item = Severity>) -> Self {
        let mut counts = Self::default();
        for severity in severities {
            counts.add(severity);
        }
        counts
    }

    pub fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::Major => self.major += 1,
            Severity::Medium => self.medium += 1,
            Severity::Minor => self.minor += 1,
        }
    }

    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::Major => self.major,
            Severity::Medium => self.medium,
            Severity::Minor => self.minor,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.major + self.medium + self.minor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    pub score: f64,
    pub severity_counts: SeverityCounts,
}

/// Stateless scorer over a weight table.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    weights: SeverityWeights,
}

impl ScoringEngine {
    pub fn new(weights: SeverityWeights) -> Self {
        Self { weights }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(SeverityWeights::from_config(config))
    }

    pub fn weights(&self) -> &SeverityWeights {
        &self.weights
    }

    pub fn score<'a>(&self, deviations: impl IntoIterator<Item = &'a Deviation>) -> ScoreSummary {
        self.score_counts(SeverityCounts::from_severities(
            deviations.into_iter().map(|d| d.severity),
        ))
    }

    /// Score from counts alone; deduction is order-independent.
    pub fn score_counts(&self, counts: SeverityCounts) -> ScoreSummary {
        let penalty: f64 = Severity::ALL
            .iter()
            .map(|s| self.weights.weight(*s) * counts.get(*s) as f64)
            .sum();
        ScoreSummary {
            score: (MAX_SCORE - penalty).clamp(0.0, MAX_SCORE),
            severity_counts: counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_perfect() {
        let engine = ScoringEngine::default();
        let summary = engine.score(std::iter::empty());
        assert_eq!(summary.score, 100.0);
        assert_eq!(summary.severity_counts.total(), 0);
    }

    #[test]
    fn test_clamps_at_zero() {
        let engine = ScoringEngine::default();
        let counts = SeverityCounts {
            critical: 5,
            ..SeverityCounts::default()
        };
        assert_eq!(engine.score_counts(counts).score, 0.0);
    }
}
