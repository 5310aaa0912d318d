//! Taxonomy: fixed atomic-design category tree and the rule-driven classifier.
//!
//! Both trees are classified into the same `CategoryPath` namespace so each
//! bucket holds a design column and an implementation column side by side.

pub mod classifier;
pub mod rules;
pub mod types;

pub use classifier::{Assignments, TaxonomyClassifier};
pub use rules::{default_design_rules, default_implementation_rules, ClassificationRule};
pub use types::{CategoryBucket, CategoryLevel, CategoryPath, NodeShape, Taxonomy, TaxonomyEntry};
