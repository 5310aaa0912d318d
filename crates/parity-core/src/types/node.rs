//! `StyledNode`: the capability interface both node variants implement.

use super::origin::TreeOrigin;
use super::properties::{Bounds, PropertyKind, PropertyValue, StyleProperties};

/// Read-only view over a design or implementation node.
///
/// Everything downstream of input decoding (classification, token
/// extraction, matching, comparison) goes through this trait, so property
/// lookup is exhaustive over `PropertyKind` for both trees.
pub trait StyledNode {
    /// Tree this node belongs to.
    fn origin(&self) -> TreeOrigin;

    /// Stable reference: design node id or implementation selector.
    fn node_ref(&self) -> &str;

    /// Human-facing name: design layer name or implementation label.
    fn display_name(&self) -> &str;

    /// Declared kind (`FRAME`, `TEXT`) or HTML tag (`button`).
    fn kind(&self) -> &str;

    fn child_count(&self) -> usize;

    fn styles(&self) -> &StyleProperties;

    fn bounds(&self) -> Option<Bounds>;

    /// Free text searched by name-based heuristics, original casing kept.
    fn search_text(&self) -> String {
        self.display_name().to_string()
    }

    /// Value of one property, `None` when the node does not carry it.
    fn property_value(&self, kind: PropertyKind) -> Option<PropertyValue> {
        let styles = self.styles();
        let text = styles.typography.as_ref();
        let layout = styles.layout.as_ref();
        let spacing = styles.spacing.as_ref();
        match kind {
            PropertyKind::Fill => styles.fill.map(PropertyValue::Color),
            PropertyKind::Background => styles.background.map(PropertyValue::Color),
            PropertyKind::FontFamily => text
                .and_then(|t| t.primary_family())
                .map(PropertyValue::Keyword),
            PropertyKind::FontSize => text.and_then(|t| t.font_size).map(PropertyValue::Length),
            PropertyKind::FontWeight => text.and_then(|t| t.font_weight).map(PropertyValue::Weight),
            PropertyKind::LineHeight => {
                text.and_then(|t| t.line_height).map(PropertyValue::Length)
            }
            PropertyKind::PaddingTop => {
                spacing.and_then(|s| s.padding.top).map(PropertyValue::Length)
            }
            PropertyKind::PaddingRight => {
                spacing.and_then(|s| s.padding.right).map(PropertyValue::Length)
            }
            PropertyKind::PaddingBottom => {
                spacing.and_then(|s| s.padding.bottom).map(PropertyValue::Length)
            }
            PropertyKind::PaddingLeft => {
                spacing.and_then(|s| s.padding.left).map(PropertyValue::Length)
            }
            PropertyKind::MarginTop => {
                spacing.and_then(|s| s.margin.top).map(PropertyValue::Length)
            }
            PropertyKind::MarginRight => {
                spacing.and_then(|s| s.margin.right).map(PropertyValue::Length)
            }
            PropertyKind::MarginBottom => {
                spacing.and_then(|s| s.margin.bottom).map(PropertyValue::Length)
            }
            PropertyKind::MarginLeft => {
                spacing.and_then(|s| s.margin.left).map(PropertyValue::Length)
            }
            PropertyKind::Gap => spacing.and_then(|s| s.gap).map(PropertyValue::Length),
            PropertyKind::Display => layout
                .and_then(|l| l.normalized_display())
                .map(PropertyValue::Keyword),
            PropertyKind::FlexDirection => layout
                .and_then(|l| l.normalized_direction())
                .map(PropertyValue::Keyword),
            PropertyKind::Position => layout
                .and_then(|l| l.normalized_position())
                .map(PropertyValue::Keyword),
            PropertyKind::CornerRadius => styles.corner_radius.map(PropertyValue::Length),
            PropertyKind::Shadow => {
                if styles.shadows.is_empty() {
                    None
                } else {
                    Some(PropertyValue::Shadows(styles.shadows.clone()))
                }
            }
        }
    }

    /// Canonical string form of a property, if present.
    fn property_string(&self, kind: PropertyKind) -> Option<String> {
        self.property_value(kind).map(|v| v.to_string())
    }
}
