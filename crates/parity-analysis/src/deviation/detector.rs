//! DeviationDetector: per-pair property comparison plus existence checks.

use parity_core::config::DeviationConfig;
use parity_core::types::StyledNode;

use super::comparators::ComparatorRegistry;
use super::types::{Deviation, DeviationProperty, Severity};

/// Confidence of an existence deviation: absence is observed, not inferred.
const EXISTENCE_CONFIDENCE: f64 = 1.0;

pub struct DeviationDetector {
    comparators: ComparatorRegistry,
}

impl DeviationDetector {
    pub fn new(config: &DeviationConfig) -> Self {
        Self {
            comparators: ComparatorRegistry::with_defaults(config),
        }
    }

    pub fn with_comparators(comparators: ComparatorRegistry) -> Self {
        Self { comparators }
    }

    pub fn comparators(&self) -> &ComparatorRegistry {
        &self.comparators
    }

    /// Deviations between a matched pair, in comparator order.
    pub fn detect(
        &self,
        design: &dyn StyledNode,
        implementation: &dyn StyledNode,
    ) -> Vec<Deviation> {
        self.comparators.compare_all(design, implementation)
    }

    /// A design node with no implementation counterpart.
    ///
    /// Always critical, independent of configured tolerances.
    pub fn missing(&self, design: &dyn StyledNode) -> Deviation {
        missing_deviation(design)
    }
}

pub fn missing_deviation(design: &dyn StyledNode) -> Deviation {
    let label = if design.display_name().is_empty() {
        design.node_ref()
    } else {
        design.display_name()
    };
    Deviation::new(
        DeviationProperty::Existence,
        "present",
        "missing",
        Severity::Critical,
        1.0,
        EXISTENCE_CONFIDENCE,
    )
    .with_message(format!("`{label}` has no counterpart in the implementation"))
}
