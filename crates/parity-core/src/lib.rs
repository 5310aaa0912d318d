//! Core vocabulary for the design parity engine.
//!
//! Node model shared by both input trees, per-subsystem errors, the layered
//! TOML configuration, and tracing setup. Nothing here performs comparison;
//! that lives in `parity-analysis`.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::ParityConfig;
pub use errors::{ComparisonError, InputError, ParityErrorCode, VisualDiffError};
pub use types::{
    Bounds, DesignNode, DesignTree, ImplementationNode, ImplementationTree, PropertyKind,
    PropertyValue, Rgba, StyleProperties, StyledNode, TreeOrigin,
};
