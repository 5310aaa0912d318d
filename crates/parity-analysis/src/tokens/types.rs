//! Token types: raw occurrences, aggregated tokens, registry matches.

use std::collections::BTreeMap;
use std::fmt;

use parity_core::types::TreeOrigin;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Color,
    Typography,
    Spacing,
    Shadow,
    Radius,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 5] = [
        Self::Color,
        Self::Typography,
        Self::Spacing,
        Self::Shadow,
        Self::Radius,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Typography => "typography",
            Self::Spacing => "spacing",
            Self::Shadow => "shadow",
            Self::Radius => "radius",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a token value was observed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSource {
    pub tree: TreeOrigin,
    pub node_ref: String,
    /// Property the value came from, e.g. `background-color`, `padding-top`.
    pub role: String,
}

/// One property occurrence on one node, before deduplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawToken {
    pub category: TokenCategory,
    /// Canonical value string: `#rrggbb`, `16px`, typography or shadow signature.
    pub value: String,
    pub source: TokenSource,
}

/// A deduplicated value with every place it was used.
///
/// `usage_count` always equals `sources.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub category: TokenCategory,
    pub value: String,
    pub usage_count: usize,
    pub sources: Vec<TokenSource>,
}

impl Token {
    pub fn used_by(&self, tree: TreeOrigin) -> bool {
        self.sources.iter().any(|s| s.tree == tree)
    }
}

/// Nearest registry token for a raw value. `distance == 0.0` is an exact hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMatch {
    pub token_name: String,
    pub token_value: String,
    pub distance: f64,
}

impl TokenMatch {
    pub fn is_exact(&self) -> bool {
        self.distance == 0.0
    }
}

/// Values used by only one of the two trees, per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDrift {
    pub design_only: Vec<String>,
    pub implementation_only: Vec<String>,
}

impl TokenDrift {
    pub fn is_empty(&self) -> bool {
        self.design_only.is_empty() && self.implementation_only.is_empty()
    }
}

/// One aggregated token mapped against the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMapping {
    pub category: TokenCategory,
    pub value: String,
    pub nearest: Option<TokenMatch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingSkipReason {
    NoRegistryConfigured,
}

impl fmt::Display for MappingSkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRegistryConfigured => f.write_str("no token registry configured"),
        }
    }
}

/// Registry mapping outcome. Never omitted from a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TokenMappingSection {
    Evaluated {
        registry: String,
        mappings: Vec<TokenMapping>,
    },
    Skipped {
        reason: MappingSkipReason,
    },
}

impl TokenMappingSection {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// Token section of a comparison result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSummary {
    /// Raw occurrences seen before aggregation, both trees.
    pub raw_token_count: usize,
    /// Ranked tokens per category, truncated to the configured top-N.
    pub tokens: BTreeMap<TokenCategory, Vec<Token>>,
    pub drift: BTreeMap<TokenCategory, TokenDrift>,
    pub mapping: TokenMappingSection,
}

impl TokenSummary {
    pub fn category(&self, category: TokenCategory) -> &[Token] {
        self.tokens.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }
}
