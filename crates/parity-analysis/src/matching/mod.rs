//! Node matching: pairs design nodes with implementation nodes.
//!
//! An ordered strategy chain: shared key, geometry overlap, label equality,
//! then document order. Unpaired nodes are reported, never dropped.

pub mod matcher;
pub mod strategies;
pub mod types;

pub use matcher::NodeMatcher;
pub use strategies::{
    GeometryStrategy, LabelStrategy, MatchStrategy, OrdinalStrategy, SharedKeyStrategy,
};
pub use types::{MatchContext, MatchOutcome, MatchStrategyKind, NodePair};
