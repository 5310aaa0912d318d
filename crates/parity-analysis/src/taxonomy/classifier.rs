//! TaxonomyClassifier: assigns every node of both trees to one bucket.

use parity_core::config::TaxonomyConfig;
use parity_core::types::{DesignTree, FxHashMap, ImplementationTree, StyledNode, TreeOrigin};

use super::rules::{
    default_design_rules, default_implementation_rules, ClassificationRule, NodeFacts, RuleSet,
};
use super::types::{CategoryPath, NodeShape, Taxonomy, TaxonomyEntry};

/// Node ref → assigned category, one map per tree.
#[derive(Debug, Clone, Default)]
pub struct Assignments {
    pub design: FxHashMap<String, CategoryPath>,
    pub implementation: FxHashMap<String, CategoryPath>,
}

impl Assignments {
    pub fn get(&self, origin: TreeOrigin, node_ref: &str) -> Option<CategoryPath> {
        match origin {
            TreeOrigin::Design => self.design.get(node_ref).copied(),
            TreeOrigin::Implementation => self.implementation.get(node_ref).copied(),
        }
    }
}

/// Classifies nodes with separate rule sets per tree origin.
///
/// Classification is total: when no rule fires, the node lands in the
/// `*.other` bucket for its structural shape.
pub struct TaxonomyClassifier {
    design_rules: RuleSet,
    implementation_rules: RuleSet,
    atom_max: usize,
    molecule_max: usize,
}

impl TaxonomyClassifier {
    pub fn new(config: &TaxonomyConfig) -> Self {
        Self::with_rules(config, default_design_rules(), default_implementation_rules())
    }

    /// Build a classifier from custom rule lists.
    pub fn with_rules(
        config: &TaxonomyConfig,
        design_rules: Vec<ClassificationRule>,
        implementation_rules: Vec<ClassificationRule>,
    ) -> Self {
        Self {
            design_rules: RuleSet::new(design_rules),
            implementation_rules: RuleSet::new(implementation_rules),
            atom_max: config.effective_atom_max_children(),
            molecule_max: config.effective_molecule_max_children(),
        }
    }

    pub fn shape_of<N: StyledNode + ?Sized>(&self, node: &N) -> NodeShape {
        NodeShape::from_child_count(node.child_count(), self.atom_max, self.molecule_max)
    }

    /// Assign `node` to exactly one category.
    pub fn classify<N: StyledNode + ?Sized>(&self, node: &N, origin: TreeOrigin) -> CategoryPath {
        let shape = self.shape_of(node);
        let facts = NodeFacts::from_node(node, shape);
        let rules = match origin {
            TreeOrigin::Design => &self.design_rules,
            TreeOrigin::Implementation => &self.implementation_rules,
        };
        rules
            .first_match(&facts)
            .map(|r| r.category)
            .unwrap_or_else(|| shape.default_category())
    }

    /// Classify both trees and populate every bucket.
    pub fn build_taxonomy(
        &self,
        design: &DesignTree,
        implementation: &ImplementationTree,
    ) -> (Taxonomy, Assignments) {
        let mut taxonomy = Taxonomy::new();
        let mut assignments = Assignments::default();

        for node in design.iter() {
            let path = self.classify(node, TreeOrigin::Design);
            taxonomy.insert(path, TreeOrigin::Design, entry_for(node));
            assignments.design.insert(node.node_ref().to_string(), path);
        }
        for node in implementation.iter() {
            let path = self.classify(node, TreeOrigin::Implementation);
            taxonomy.insert(path, TreeOrigin::Implementation, entry_for(node));
            assignments
                .implementation
                .insert(node.node_ref().to_string(), path);
        }

        tracing::debug!(
            design_nodes = assignments.design.len(),
            implementation_nodes = assignments.implementation.len(),
            empty_buckets = taxonomy.empty_buckets().len(),
            "taxonomy built"
        );
        (taxonomy, assignments)
    }
}

fn entry_for<N: StyledNode + ?Sized>(node: &N) -> TaxonomyEntry {
    TaxonomyEntry {
        node_ref: node.node_ref().to_string(),
        name: node.display_name().to_string(),
        kind: node.kind().to_string(),
        child_count: node.child_count(),
    }
}
