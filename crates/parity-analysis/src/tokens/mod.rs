//! Token pipeline: extraction, aggregation, and registry mapping.
//!
//! Raw tokens are pulled from both trees with provenance, deduplicated into
//! usage-ranked lists, compared across trees for drift, and mapped to the
//! nearest design-system token when a registry is supplied.

pub mod aggregator;
pub mod extractor;
pub mod mapper;
pub mod registry;
pub mod types;

pub use aggregator::{aggregate, compute_drift};
pub use extractor::{extract_design_tokens, extract_implementation_tokens, extract_tokens};
pub use mapper::{map_to_nearest, map_to_nearest_with_rem};
pub use registry::{RegistryToken, TokenRegistry};
pub use types::{
    MappingSkipReason, RawToken, Token, TokenCategory, TokenDrift, TokenMapping,
    TokenMappingSection, TokenMatch, TokenSource, TokenSummary,
};

use parity_core::config::TokenConfig;
use parity_core::types::{DesignTree, ImplementationTree};

/// Run the whole token branch for one comparison.
pub fn summarize_tokens(
    design: &DesignTree,
    implementation: &ImplementationTree,
    registry: Option<&TokenRegistry>,
    config: &TokenConfig,
) -> TokenSummary {
    let mut raw = extract_design_tokens(design);
    raw.extend(extract_implementation_tokens(implementation));

    let tokens = aggregate(&raw, config.effective_top_n());
    let rem_base = config.effective_rem_base_px();
    let drift = compute_drift(&raw);

    let mapping = match registry {
        Some(registry) => {
            let mappings = tokens
                .values()
                .flatten()
                .map(|token| TokenMapping {
                    category: token.category,
                    value: token.value.clone(),
                    nearest: map_to_nearest_with_rem(
                        Some(registry),
                        token.category,
                        &token.value,
                        rem_base,
                    ),
                })
                .collect();
            TokenMappingSection::Evaluated {
                registry: registry.name.clone(),
                mappings,
            }
        }
        None => {
            tracing::debug!("token mapping skipped: no registry configured");
            TokenMappingSection::Skipped {
                reason: MappingSkipReason::NoRegistryConfigured,
            }
        }
    };

    tracing::debug!(
        raw_token_count = raw.len(),
        categories = tokens.len(),
        "tokens aggregated"
    );
    TokenSummary {
        raw_token_count: raw.len(),
        tokens,
        drift,
        mapping,
    }
}
