//! NodeMatcher: runs the strategy chain over both trees.

use parity_core::config::MatchingConfig;
use parity_core::types::{DesignNode, ImplementationNode};

use super::strategies::{default_strategies, MatchStrategy};
use super::types::{MatchContext, MatchOutcome};
use crate::taxonomy::CategoryPath;

pub struct NodeMatcher {
    strategies: Vec<Box<dyn MatchStrategy>>,
}

impl NodeMatcher {
    pub fn new(config: &MatchingConfig) -> Self {
        Self {
            strategies: default_strategies(config),
        }
    }

    /// Replace the strategy chain.
    pub fn with_strategies(strategies: Vec<Box<dyn MatchStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    /// Pair nodes across the two trees.
    ///
    /// `*_categories[i]` is the taxonomy bucket of node `i`; both slices must
    /// be index-aligned with their node lists.
    pub fn match_nodes(
        &self,
        design: &[&DesignNode],
        implementation: &[&ImplementationNode],
        design_categories: &[CategoryPath],
        implementation_categories: &[CategoryPath],
    ) -> MatchOutcome {
        let mut ctx = MatchContext::new(
            design,
            implementation,
            design_categories,
            implementation_categories,
        );
        for strategy in &self.strategies {
            strategy.apply(&mut ctx);
        }
        let outcome = ctx.finish();
        tracing::debug!(
            pairs = outcome.pairs.len(),
            unmatched_design = outcome.unmatched_design.len(),
            unmatched_implementation = outcome.unmatched_implementation.len(),
            "matching complete"
        );
        outcome
    }
}
