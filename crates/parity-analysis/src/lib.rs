//! Comparison engine: design tree vs. rendered implementation.
//!
//! Pipeline: taxonomy classification and token extraction run over both
//! trees, nodes are matched across trees, property deviations are detected
//! and scored, and an optional screenshot pair is pixel-diffed. The issue
//! formatter and reporters consume the finished `ComparisonResult`.
//!
//! Every stage is synchronous and side-effect free; configuration and token
//! registries are passed in explicitly.

pub mod deviation;
pub mod engine;
pub mod issues;
pub mod matching;
pub mod reporters;
pub mod scoring;
pub mod taxonomy;
pub mod tokens;
pub mod visual;

pub use deviation::{Deviation, DeviationCategory, DeviationDetector, Severity};
pub use engine::{ComparisonEngine, ComparisonInput, ComparisonResult, ScreenshotPair};
pub use issues::{Issue, IssueFormatter, Priority};
pub use matching::NodeMatcher;
pub use scoring::{ScoringEngine, SeverityCounts, SeverityWeights};
pub use taxonomy::{CategoryPath, Taxonomy, TaxonomyClassifier};
pub use tokens::{Token, TokenCategory, TokenMatch, TokenRegistry};
pub use visual::{VisualDiffEngine, VisualDiffResult};
