//! Implementation tree: flattened DOM nodes with computed styles.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::css::style_from_css;
use super::length::DEFAULT_REM_PX;
use super::node::StyledNode;
use super::origin::TreeOrigin;
use super::properties::{Bounds, StyleProperties};
use crate::errors::InputError;

/// One rendered element. Immutable once extracted.
///
/// Decoded from the DOM extractor's JSON, where `computedStyles` is the
/// browser's flat CSS declaration map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawImplementationNode", rename_all = "camelCase")]
pub struct ImplementationNode {
    pub selector: String,
    pub tag: String,
    pub child_count: usize,
    pub attributes: BTreeMap<String, String>,
    pub text: Option<String>,
    pub bounds: Option<Bounds>,
    pub computed_styles: StyleProperties,
    /// Precomputed display label: aria-label, design name hint, text, or tag.
    #[serde(skip)]
    label: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawImplementationNode {
    selector: String,
    #[serde(alias = "tagName")]
    tag: String,
    #[serde(default)]
    child_count: usize,
    #[serde(default)]
    attributes: BTreeMap<String, String>,
    #[serde(default, alias = "textContent")]
    text: Option<String>,
    #[serde(default, alias = "boundingBox", alias = "rect")]
    bounds: Option<Bounds>,
    #[serde(default, alias = "styles")]
    computed_styles: BTreeMap<String, serde_json::Value>,
}

impl TryFrom<RawImplementationNode> for ImplementationNode {
    type Error = String;

    fn try_from(raw: RawImplementationNode) -> Result<Self, Self::Error> {
        let declarations: BTreeMap<String, String> = raw
            .computed_styles
            .into_iter()
            .filter_map(|(k, v)| match v {
                serde_json::Value::String(s) => Some((k, s)),
                serde_json::Value::Number(n) => Some((k, n.to_string())),
                _ => None,
            })
            .collect();
        let computed_styles = style_from_css(&declarations, DEFAULT_REM_PX)
            .map_err(|e| format!("{}: {e}", raw.selector))?;

        let mut node = ImplementationNode::new(raw.selector, raw.tag)
            .with_child_count(raw.child_count)
            .with_styles(computed_styles);
        node.attributes = raw.attributes;
        node.text = raw.text.filter(|t| !t.trim().is_empty());
        node.bounds = raw.bounds;
        node.label = node.compute_label();
        Ok(node)
    }
}

impl ImplementationNode {
    pub fn new(selector: impl Into<String>, tag: impl Into<String>) -> Self {
        let mut node = Self {
            selector: selector.into(),
            tag: tag.into().to_ascii_lowercase(),
            child_count: 0,
            attributes: BTreeMap::new(),
            text: None,
            bounds: None,
            computed_styles: StyleProperties::default(),
            label: String::new(),
        };
        node.label = node.compute_label();
        node
    }

    pub fn with_child_count(mut self, child_count: usize) -> Self {
        self.child_count = child_count;
        self
    }

    pub fn with_styles(mut self, styles: StyleProperties) -> Self {
        self.computed_styles = styles;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self.label = self.compute_label();
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self.label = self.compute_label();
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Class names from the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attribute("class")
            .unwrap_or("")
            .split_whitespace()
    }

    fn compute_label(&self) -> String {
        ["aria-label", "data-design-name", "title", "id"]
            .iter()
            .find_map(|a| self.attribute(a).filter(|v| !v.trim().is_empty()))
            .or_else(|| self.text.as_deref().map(str::trim).filter(|t| !t.is_empty()))
            .unwrap_or(self.tag.as_str())
            .to_string()
    }
}

impl StyledNode for ImplementationNode {
    fn origin(&self) -> TreeOrigin {
        TreeOrigin::Implementation
    }

    fn node_ref(&self) -> &str {
        &self.selector
    }

    fn display_name(&self) -> &str {
        &self.label
    }

    fn kind(&self) -> &str {
        &self.tag
    }

    fn child_count(&self) -> usize {
        self.child_count
    }

    fn styles(&self) -> &StyleProperties {
        &self.computed_styles
    }

    fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Own selector segment, classes, role, and label.
    ///
    /// Only the last compound selector is used so ancestors (`header > nav > a`)
    /// do not leak into a descendant's classification.
    fn search_text(&self) -> String {
        let own_segment = self
            .selector
            .rsplit(|c: char| c == '>' || c.is_whitespace())
            .find(|s| !s.is_empty())
            .unwrap_or("");
        let mut parts: Vec<&str> = vec![own_segment, self.label.as_str()];
        parts.extend(self.classes());
        for attr in ["role", "id", "data-testid", "name", "type"] {
            if let Some(v) = self.attribute(attr) {
                parts.push(v);
            }
        }
        parts.join(" ")
    }
}

/// A rendered page, flattened in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImplementationTree {
    pub nodes: Vec<ImplementationNode>,
}

impl ImplementationTree {
    pub fn new(nodes: Vec<ImplementationNode>) -> Self {
        Self { nodes }
    }

    /// Decode from JSON: either `{"nodes": [...]}` or a bare array.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        let invalid = |e: serde_json::Error| InputError::InvalidJson {
            component: "implementation tree",
            message: e.to_string(),
        };

        let mut value: serde_json::Value = serde_json::from_str(json).map_err(invalid)?;
        let nodes_value = if value.is_array() {
            value
        } else {
            value
                .get_mut("nodes")
                .map(serde_json::Value::take)
                .unwrap_or(serde_json::Value::Null)
        };
        let nodes: Vec<ImplementationNode> =
            serde_json::from_value(nodes_value).map_err(invalid)?;
        Ok(Self { nodes })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImplementationNode> {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
