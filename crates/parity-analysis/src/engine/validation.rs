//! Structural validation of input trees. Violations are fatal.

use parity_core::errors::InputError;
use parity_core::types::{
    Bounds, DesignTree, FxHashSet, ImplementationTree, PropertyKind, PropertyValue, StyledNode,
};

const DESIGN: &str = "design tree";
const IMPLEMENTATION: &str = "implementation tree";

/// Non-empty, unique ids and well-formed property values.
pub fn validate_design(tree: &DesignTree) -> Result<(), InputError> {
    let mut seen = FxHashSet::default();
    for node in tree.iter() {
        if node.id.trim().is_empty() {
            return Err(InputError::malformed(
                DESIGN,
                format!("node `{}` has an empty id", node.name),
            ));
        }
        if !seen.insert(node.id.as_str()) {
            return Err(InputError::malformed(
                DESIGN,
                format!("duplicate node id `{}`", node.id),
            ));
        }
        validate_node(node, DESIGN)?;
    }
    Ok(())
}

/// Non-empty, unique selectors and well-formed property values.
pub fn validate_implementation(tree: &ImplementationTree) -> Result<(), InputError> {
    let mut seen = FxHashSet::default();
    for node in tree.iter() {
        if node.selector.trim().is_empty() {
            return Err(InputError::malformed(
                IMPLEMENTATION,
                format!("`{}` node has an empty selector", node.tag),
            ));
        }
        if !seen.insert(node.selector.as_str()) {
            return Err(InputError::malformed(
                IMPLEMENTATION,
                format!("duplicate selector `{}`", node.selector),
            ));
        }
        validate_node(node, IMPLEMENTATION)?;
    }
    Ok(())
}

fn validate_node<N: StyledNode + ?Sized>(
    node: &N,
    component: &'static str,
) -> Result<(), InputError> {
    if let Some(bounds) = node.bounds() {
        validate_bounds(node.node_ref(), &bounds, component)?;
    }
    for kind in PropertyKind::ALL {
        let Some(PropertyValue::Length(value)) = node.property_value(kind) else {
            continue;
        };
        let invalid = !value.is_finite()
            || (kind == PropertyKind::FontSize && value <= 0.0)
            || (kind != PropertyKind::FontSize && !is_signed(kind) && value < 0.0);
        if invalid {
            return Err(InputError::malformed(
                component,
                format!("node `{}` has invalid {kind} `{value}`", node.node_ref()),
            ));
        }
    }
    Ok(())
}

/// Margins may legitimately be negative.
fn is_signed(kind: PropertyKind) -> bool {
    PropertyKind::MARGIN.contains(&kind)
}

fn validate_bounds(
    node_ref: &str,
    bounds: &Bounds,
    component: &'static str,
) -> Result<(), InputError> {
    let finite = [bounds.x, bounds.y, bounds.width, bounds.height]
        .iter()
        .all(|v| v.is_finite());
    if !finite || bounds.width < 0.0 || bounds.height < 0.0 {
        return Err(InputError::malformed(
            component,
            format!(
                "node `{node_ref}` has invalid bounds {}x{} at ({}, {})",
                bounds.width, bounds.height, bounds.x, bounds.y
            ),
        ));
    }
    Ok(())
}
