//! Issue formatting: flattens deviations into an export-ready issue list.
//!
//! Priority starts from severity and passes through an ordered list of
//! escalation policies, kept separate so each can be overridden.

pub mod escalation;
pub mod formatter;
pub mod types;

pub use escalation::{
    ColorImpactPolicy, EscalationContext, EscalationPolicy, InteractiveCategoryPolicy,
};
pub use formatter::{severity_counts, IssueFormatter};
pub use types::{Issue, Priority};
