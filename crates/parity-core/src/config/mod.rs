//! Configuration system for the parity engine.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod deviation_config;
pub mod issue_config;
pub mod matching_config;
pub mod parity_config;
pub mod scoring_config;
pub mod taxonomy_config;
pub mod token_config;
pub mod visual_config;

pub use deviation_config::DeviationConfig;
pub use issue_config::IssueConfig;
pub use matching_config::MatchingConfig;
pub use parity_config::{ConfigOverrides, ParityConfig};
pub use scoring_config::ScoringConfig;
pub use taxonomy_config::TaxonomyConfig;
pub use token_config::TokenConfig;
pub use visual_config::VisualConfig;
