//! Token aggregation: dedupe raw values, rank by usage, truncate.

use std::collections::BTreeMap;

use parity_core::types::{FxHashMap, TreeOrigin};

use super::types::{RawToken, Token, TokenCategory, TokenDrift};

/// Group raw tokens by exact value per category.
///
/// Each category is sorted by usage (descending), ties by value, then cut
/// to `top_n`. Truncation bounds report size only; drift is computed on the
/// full set by [`compute_drift`].
pub fn aggregate(raw: &[RawToken], top_n: usize) -> BTreeMap<TokenCategory, Vec<Token>> {
    let mut grouped: FxHashMap<(TokenCategory, &str), Token> = FxHashMap::default();
    for token in raw {
        grouped
            .entry((token.category, token.value.as_str()))
            .or_insert_with(|| Token {
                category: token.category,
                value: token.value.clone(),
                usage_count: 0,
                sources: Vec::new(),
            })
            .sources
            .push(token.source.clone());
    }

    let mut by_category: BTreeMap<TokenCategory, Vec<Token>> = BTreeMap::new();
    for (_, mut token) in grouped {
        token.usage_count = token.sources.len();
        by_category.entry(token.category).or_default().push(token);
    }
    for tokens in by_category.values_mut() {
        tokens.sort_by(|a, b| {
            b.usage_count
                .cmp(&a.usage_count)
                .then_with(|| a.value.cmp(&b.value))
        });
        tokens.truncate(top_n);
    }
    by_category
}

/// Values each tree uses that the other never does, per category.
pub fn compute_drift(raw: &[RawToken]) -> BTreeMap<TokenCategory, TokenDrift> {
    let mut seen: BTreeMap<(TokenCategory, &str), (bool, bool)> = BTreeMap::new();
    for token in raw {
        let flags = seen
            .entry((token.category, token.value.as_str()))
            .or_insert((false, false));
        match token.source.tree {
            TreeOrigin::Design => flags.0 = true,
            TreeOrigin::Implementation => flags.1 = true,
        }
    }

    let mut drift: BTreeMap<TokenCategory, TokenDrift> = BTreeMap::new();
    for ((category, value), (in_design, in_implementation)) in seen {
        match (in_design, in_implementation) {
            (true, false) => drift
                .entry(category)
                .or_default()
                .design_only
                .push(value.to_string()),
            (false, true) => drift
                .entry(category)
                .or_default()
                .implementation_only
                .push(value.to_string()),
            _ => {}
        }
    }
    drift
}
