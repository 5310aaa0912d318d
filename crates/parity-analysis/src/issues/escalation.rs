//! Priority escalation policies, applied after the base priority.

use crate::deviation::{Deviation, DeviationCategory};
use crate::taxonomy::CategoryPath;

/// What a policy may inspect about one deviation.
#[derive(Debug, Clone, Copy)]
pub struct EscalationContext<'a> {
    pub deviation: &'a Deviation,
    pub category: CategoryPath,
}

/// A business rule that bumps an issue's priority one level.
pub trait EscalationPolicy: Send + Sync {
    fn name(&self) -> &'static str;
    fn applies(&self, ctx: &EscalationContext<'_>) -> bool;
}

/// Deviations on interactive elements (buttons, inputs, links).
pub struct InteractiveCategoryPolicy {
    categories: Vec<CategoryPath>,
}

impl InteractiveCategoryPolicy {
    pub fn new(categories: Vec<CategoryPath>) -> Self {
        Self { categories }
    }

    /// Parse bucket names; unknown names are logged and ignored.
    pub fn from_names(names: &[String]) -> Self {
        let categories = names
            .iter()
            .filter_map(|name| match name.parse::<CategoryPath>() {
                Ok(path) => Some(path),
                Err(e) => {
                    tracing::warn!(%e, "ignoring interactive category");
                    None
                }
            })
            .collect();
        Self::new(categories)
    }
}

impl EscalationPolicy for InteractiveCategoryPolicy {
    fn name(&self) -> &'static str {
        "interactive-category"
    }

    fn applies(&self, ctx: &EscalationContext<'_>) -> bool {
        self.categories.contains(&ctx.category)
    }
}

/// Color deviations carry a visual-impact bias.
pub struct ColorImpactPolicy;

impl EscalationPolicy for ColorImpactPolicy {
    fn name(&self) -> &'static str {
        "color-impact"
    }

    fn applies(&self, ctx: &EscalationContext<'_>) -> bool {
        ctx.deviation.category == DeviationCategory::Color
    }
}
