//! Matching types.

use std::fmt;

use parity_core::types::{Bounds, DesignNode, ImplementationNode, StyledNode};
use serde::{Deserialize, Serialize};

use crate::taxonomy::CategoryPath;

/// Which strategy paired two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategyKind {
    SharedKey,
    Geometry,
    Label,
    Ordinal,
}

impl MatchStrategyKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SharedKey => "shared_key",
            Self::Geometry => "geometry",
            Self::Label => "label",
            Self::Ordinal => "ordinal",
        }
    }
}

impl fmt::Display for MatchStrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A design/implementation pair by index into the flattened node lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodePair {
    pub design: usize,
    pub implementation: usize,
    pub strategy: MatchStrategyKind,
}

/// Result of matching: pairs plus the leftovers on each side, in tree order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    pub pairs: Vec<NodePair>,
    pub unmatched_design: Vec<usize>,
    pub unmatched_implementation: Vec<usize>,
}

/// Top-left corner of the union of every box in a tree, `(0, 0)` when no
/// node carries bounds.
fn tree_origin<N: StyledNode>(nodes: &[&N]) -> (f64, f64) {
    nodes
        .iter()
        .filter_map(|n| n.bounds())
        .map(|b| (b.x, b.y))
        .reduce(|(ax, ay), (bx, by)| (ax.min(bx), ay.min(by)))
        .unwrap_or((0.0, 0.0))
}

fn relative(bounds: Bounds, (x, y): (f64, f64)) -> Bounds {
    Bounds {
        x: bounds.x - x,
        y: bounds.y - y,
        ..bounds
    }
}

/// Mutable pairing state shared by the strategies.
///
/// Each node is paired at most once; strategies only see nodes that earlier
/// strategies left open.
pub struct MatchContext<'a> {
    pub design: &'a [&'a DesignNode],
    pub implementation: &'a [&'a ImplementationNode],
    pub design_categories: &'a [CategoryPath],
    pub implementation_categories: &'a [CategoryPath],
    design_origin: (f64, f64),
    implementation_origin: (f64, f64),
    design_taken: Vec<bool>,
    implementation_taken: Vec<bool>,
    pairs: Vec<NodePair>,
}

impl<'a> MatchContext<'a> {
    pub fn new(
        design: &'a [&'a DesignNode],
        implementation: &'a [&'a ImplementationNode],
        design_categories: &'a [CategoryPath],
        implementation_categories: &'a [CategoryPath],
    ) -> Self {
        Self {
            design,
            implementation,
            design_categories,
            implementation_categories,
            design_origin: tree_origin(design),
            implementation_origin: tree_origin(implementation),
            design_taken: vec![false; design.len()],
            implementation_taken: vec![false; implementation.len()],
            pairs: Vec::new(),
        }
    }

    /// Design box relative to its tree's origin.
    ///
    /// Design canvases and rendered pages use different coordinate spaces;
    /// geometry is only comparable once both are anchored at the top-left of
    /// their own tree.
    pub fn design_bounds(&self, index: usize) -> Option<Bounds> {
        self.design[index]
            .bounds()
            .map(|b| relative(b, self.design_origin))
    }

    /// Implementation box relative to its tree's origin.
    pub fn implementation_bounds(&self, index: usize) -> Option<Bounds> {
        self.implementation[index]
            .bounds()
            .map(|b| relative(b, self.implementation_origin))
    }

    pub fn is_design_open(&self, index: usize) -> bool {
        !self.design_taken[index]
    }

    pub fn is_implementation_open(&self, index: usize) -> bool {
        !self.implementation_taken[index]
    }

    /// Open design indices, tree order.
    pub fn open_design(&self) -> Vec<usize> {
        (0..self.design.len())
            .filter(|i| !self.design_taken[*i])
            .collect()
    }

    /// Open implementation indices, document order.
    pub fn open_implementation(&self) -> Vec<usize> {
        (0..self.implementation.len())
            .filter(|i| !self.implementation_taken[*i])
            .collect()
    }

    pub fn same_bucket(&self, design: usize, implementation: usize) -> bool {
        self.design_categories[design] == self.implementation_categories[implementation]
    }

    /// Record a pair. Returns false if either side is already taken.
    pub fn link(
        &mut self,
        design: usize,
        implementation: usize,
        strategy: MatchStrategyKind,
    ) -> bool {
        if self.design_taken[design] || self.implementation_taken[implementation] {
            return false;
        }
        self.design_taken[design] = true;
        self.implementation_taken[implementation] = true;
        tracing::trace!(
            design = self.design[design].node_ref(),
            implementation = self.implementation[implementation].node_ref(),
            strategy = strategy.name(),
            "nodes paired"
        );
        self.pairs.push(NodePair {
            design,
            implementation,
            strategy,
        });
        true
    }

    pub fn finish(self) -> MatchOutcome {
        let unmatched_design = (0..self.design.len())
            .filter(|i| !self.design_taken[*i])
            .collect();
        let unmatched_implementation = (0..self.implementation.len())
            .filter(|i| !self.implementation_taken[*i])
            .collect();
        let mut pairs = self.pairs;
        pairs.sort_by_key(|p| p.design);
        MatchOutcome {
            pairs,
            unmatched_design,
            unmatched_implementation,
        }
    }
}
