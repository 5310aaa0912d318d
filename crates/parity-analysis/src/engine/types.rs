//! Engine input and result types.

use parity_core::types::{DesignTree, ImplementationTree};
use serde::{Deserialize, Serialize};

use crate::deviation::Deviation;
use crate::matching::MatchStrategyKind;
use crate::scoring::SeverityCounts;
use crate::taxonomy::{CategoryPath, Taxonomy};
use crate::tokens::{TokenRegistry, TokenSummary};
use crate::visual::VisualSection;

/// Encoded screenshot buffers (PNG or JPEG), one per side.
#[derive(Debug, Clone, Copy)]
pub struct ScreenshotPair<'a> {
    pub design: &'a [u8],
    pub implementation: &'a [u8],
}

/// Everything one comparison run reads. Borrowed, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonInput<'a> {
    pub design: &'a DesignTree,
    pub implementation: &'a ImplementationTree,
    pub registry: Option<&'a TokenRegistry>,
    pub screenshots: Option<ScreenshotPair<'a>>,
}

impl<'a> ComparisonInput<'a> {
    pub fn new(design: &'a DesignTree, implementation: &'a ImplementationTree) -> Self {
        Self {
            design,
            implementation,
            registry: None,
            screenshots: None,
        }
    }

    pub fn with_registry(mut self, registry: &'a TokenRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn with_screenshots(mut self, design: &'a [u8], implementation: &'a [u8]) -> Self {
        self.screenshots = Some(ScreenshotPair {
            design,
            implementation,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedPair {
    pub design_ref: String,
    pub design_name: String,
    pub implementation_ref: String,
    /// Bucket of the design node.
    pub category: CategoryPath,
    pub implementation_category: CategoryPath,
    pub strategy: MatchStrategyKind,
    pub deviations: Vec<Deviation>,
}

/// A design node with no counterpart, carrying its existence deviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmatchedDesign {
    pub design_ref: String,
    pub name: String,
    pub category: CategoryPath,
    pub deviation: Deviation,
}

/// Extra implementation markup. Recorded, not penalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmatchedImplementation {
    pub implementation_ref: String,
    pub label: String,
    pub category: CategoryPath,
}

/// A deviation with the node context it came from.
#[derive(Debug, Clone, Copy)]
pub struct DeviationRecord<'a> {
    pub deviation: &'a Deviation,
    pub design_ref: &'a str,
    pub design_name: &'a str,
    pub implementation_ref: Option<&'a str>,
    pub category: CategoryPath,
}

/// Outcome of one comparison run. Read-only downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub matched_pairs: Vec<MatchedPair>,
    pub unmatched_design: Vec<UnmatchedDesign>,
    pub unmatched_implementation: Vec<UnmatchedImplementation>,
    pub token_summary: TokenSummary,
    pub taxonomy: Taxonomy,
    pub score: f64,
    pub severity_counts: SeverityCounts,
    pub visual: VisualSection,
    pub design_node_count: usize,
    pub implementation_node_count: usize,
}

impl ComparisonResult {
    /// Every deviation in result order: matched pairs first, then existence
    /// deviations of unmatched design nodes.
    pub fn deviation_records(&self) -> Vec<DeviationRecord<'_>> {
        let paired = self.matched_pairs.iter().flat_map(|pair| {
            pair.deviations.iter().map(move |deviation| DeviationRecord {
                deviation,
                design_ref: &pair.design_ref,
                design_name: &pair.design_name,
                implementation_ref: Some(pair.implementation_ref.as_str()),
                category: pair.category,
            })
        });
        let missing = self.unmatched_design.iter().map(|node| DeviationRecord {
            deviation: &node.deviation,
            design_ref: &node.design_ref,
            design_name: &node.name,
            implementation_ref: None,
            category: node.category,
        });
        paired.chain(missing).collect()
    }

    pub fn deviations(&self) -> impl Iterator<Item = &Deviation> {
        self.matched_pairs
            .iter()
            .flat_map(|p| p.deviations.iter())
            .chain(self.unmatched_design.iter().map(|u| &u.deviation))
    }

    pub fn deviation_count(&self) -> usize {
        self.deviations().count()
    }
}
