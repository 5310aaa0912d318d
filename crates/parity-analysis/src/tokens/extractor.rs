//! Token extraction: one raw token per present property occurrence.

use parity_core::types::properties::{format_px, shadow_list_signature};
use parity_core::types::{DesignTree, ImplementationTree, PropertyKind, StyledNode};

use super::types::{RawToken, TokenCategory, TokenSource};

/// Spacing properties that feed spacing tokens.
const SPACING_KINDS: [PropertyKind; 9] = [
    PropertyKind::PaddingTop,
    PropertyKind::PaddingRight,
    PropertyKind::PaddingBottom,
    PropertyKind::PaddingLeft,
    PropertyKind::MarginTop,
    PropertyKind::MarginRight,
    PropertyKind::MarginBottom,
    PropertyKind::MarginLeft,
    PropertyKind::Gap,
];

/// Pull raw tokens from a single node.
///
/// Zero spacing and zero radius are not design decisions and are skipped.
pub fn extract_node_tokens<N: StyledNode + ?Sized>(node: &N, out: &mut Vec<RawToken>) {
    let styles = node.styles();
    let origin = node.origin();
    let mut push = |category: TokenCategory, value: String, role: &str| {
        out.push(RawToken {
            category,
            value,
            source: TokenSource {
                tree: origin,
                node_ref: node.node_ref().to_string(),
                role: role.to_string(),
            },
        });
    };

    if let Some(fill) = styles.fill {
        push(TokenCategory::Color, fill.to_hex(), PropertyKind::Fill.css_name());
    }
    if let Some(background) = styles.background {
        push(
            TokenCategory::Color,
            background.to_hex(),
            PropertyKind::Background.css_name(),
        );
    }
    if let Some(signature) = styles.typography.as_ref().and_then(|t| t.signature()) {
        push(TokenCategory::Typography, signature, "font");
    }
    if let Some(spacing) = styles.spacing.as_ref() {
        let values = spacing
            .padding
            .values()
            .into_iter()
            .chain(spacing.margin.values())
            .chain(std::iter::once(spacing.gap));
        for (kind, value) in SPACING_KINDS.iter().zip(values) {
            if let Some(v) = value.filter(|v| *v > 0.0) {
                push(TokenCategory::Spacing, format_px(v), kind.css_name());
            }
        }
    }
    if let Some(radius) = styles.corner_radius.filter(|r| *r > 0.0) {
        push(
            TokenCategory::Radius,
            format_px(radius),
            PropertyKind::CornerRadius.css_name(),
        );
    }
    if !styles.shadows.is_empty() {
        push(
            TokenCategory::Shadow,
            shadow_list_signature(&styles.shadows),
            PropertyKind::Shadow.css_name(),
        );
    }
}

/// Walk every node of `nodes`, collecting raw tokens in traversal order.
pub fn extract_tokens<'a, N, I>(nodes: I) -> Vec<RawToken>
where
    N: StyledNode + 'a,
    I: IntoIterator<Item = &'a N>,
{
    let mut out = Vec::new();
    for node in nodes {
        extract_node_tokens(node, &mut out);
    }
    out
}

pub fn extract_design_tokens(tree: &DesignTree) -> Vec<RawToken> {
    extract_tokens(tree.iter())
}

pub fn extract_implementation_tokens(tree: &ImplementationTree) -> Vec<RawToken> {
    extract_tokens(tree.iter())
}
