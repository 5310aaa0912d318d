//! Node model shared by design and implementation trees.
//! Typed style properties, CSS value parsing, and the `StyledNode` capability trait.

pub mod collections;
pub mod color;
pub mod css;
pub mod design;
pub mod implementation;
pub mod length;
pub mod node;
pub mod origin;
pub mod properties;

pub use collections::{FxHashMap, FxHashSet};
pub use color::Rgba;
pub use design::{DesignNode, DesignTree};
pub use implementation::{ImplementationNode, ImplementationTree};
pub use node::StyledNode;
pub use origin::TreeOrigin;
pub use properties::{
    Bounds, Edges, LayoutInfo, PropertyGroup, PropertyKind, PropertyValue, Shadow, Spacing,
    StyleProperties, TextStyle,
};
