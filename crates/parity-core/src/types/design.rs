//! Design tree: nested nodes extracted from a design tool document.

use serde::{Deserialize, Serialize};

use super::node::StyledNode;
use super::origin::TreeOrigin;
use super::properties::{Bounds, StyleProperties};
use crate::errors::InputError;

/// One node of the design tree. Immutable once extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(alias = "type")]
    pub kind: String,
    /// Declared child count, used only when `children` was not extracted.
    #[serde(default)]
    pub child_count: Option<usize>,
    #[serde(default)]
    pub properties: StyleProperties,
    #[serde(default, alias = "absoluteBoundingBox")]
    pub bounds: Option<Bounds>,
    #[serde(default)]
    pub children: Vec<DesignNode>,
}

impl DesignNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            child_count: None,
            properties: StyleProperties::default(),
            bounds: None,
            children: Vec::new(),
        }
    }

    pub fn with_properties(mut self, properties: StyleProperties) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_child(mut self, child: DesignNode) -> Self {
        self.children.push(child);
        self
    }
}

impl StyledNode for DesignNode {
    fn origin(&self) -> TreeOrigin {
        TreeOrigin::Design
    }

    fn node_ref(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &str {
        &self.kind
    }

    fn child_count(&self) -> usize {
        if self.children.is_empty() {
            self.child_count.unwrap_or(0)
        } else {
            self.children.len()
        }
    }

    fn styles(&self) -> &StyleProperties {
        &self.properties
    }

    fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }
}

/// A design document subtree rooted at `root`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignTree {
    pub root: DesignNode,
}

impl DesignTree {
    pub fn new(root: DesignNode) -> Self {
        Self { root }
    }

    /// Decode a design tree from JSON: either `{"root": {...}}` or a bare node.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        let invalid = |e: serde_json::Error| InputError::InvalidJson {
            component: "design tree",
            message: e.to_string(),
        };

        let mut value: serde_json::Value = serde_json::from_str(json).map_err(invalid)?;
        let root_value = if value.get("root").is_some() {
            value["root"].take()
        } else {
            value
        };
        let root: DesignNode = serde_json::from_value(root_value).map_err(invalid)?;
        Ok(Self { root })
    }

    /// Pre-order traversal of every node, root first.
    pub fn iter(&self) -> DesignIter<'_> {
        DesignIter {
            stack: vec![&self.root],
        }
    }

    pub fn node_count(&self) -> usize {
        self.iter().count()
    }
}

/// Pre-order iterator over a design tree.
pub struct DesignIter<'a> {
    stack: Vec<&'a DesignNode>,
}

impl<'a> Iterator for DesignIter<'a> {
    type Item = &'a DesignNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
