//! Design-system token registry: named values per category, in declaration order.

use std::collections::BTreeMap;

use parity_core::errors::InputError;
use serde::{Deserialize, Serialize};

use super::types::TokenCategory;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryToken {
    pub name: String,
    pub value: String,
}

/// An immutable token table supplied by the caller.
///
/// Order within a category is significant: it breaks distance ties.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TokenRegistry {
    pub name: String,
    tokens: BTreeMap<TokenCategory, Vec<RegistryToken>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Pair(String, String),
    Named { name: String, value: String },
}

#[derive(Deserialize)]
struct RawRegistry {
    #[serde(default)]
    name: String,
    tokens: BTreeMap<TokenCategory, Vec<RawEntry>>,
}

impl TokenRegistry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tokens: BTreeMap::new(),
        }
    }

    /// Append a token; later registrations lose ties to earlier ones.
    pub fn with_token(
        mut self,
        category: TokenCategory,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.tokens.entry(category).or_default().push(RegistryToken {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Decode `{"name": .., "tokens": {"spacing": [["spacing.4", "16px"], ..]}}`.
    /// Entries may also be `{"name": .., "value": ..}` objects.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        let raw: RawRegistry =
            serde_json::from_str(json).map_err(|e| InputError::InvalidJson {
                component: "token registry",
                message: e.to_string(),
            })?;
        let tokens = raw
            .tokens
            .into_iter()
            .map(|(category, entries)| {
                let entries = entries
                    .into_iter()
                    .map(|entry| match entry {
                        RawEntry::Pair(name, value) | RawEntry::Named { name, value } => {
                            RegistryToken { name, value }
                        }
                    })
                    .collect();
                (category, entries)
            })
            .collect();
        Ok(Self {
            name: raw.name,
            tokens,
        })
    }

    pub fn tokens(&self, category: TokenCategory) -> &[RegistryToken] {
        self.tokens.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.tokens.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
