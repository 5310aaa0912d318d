//! IssueFormatter: one issue per deviation, with escalated priority.

use parity_core::config::IssueConfig;
use xxhash_rust::xxh3::xxh3_64;

use super::escalation::{
    ColorImpactPolicy, EscalationContext, EscalationPolicy, InteractiveCategoryPolicy,
};
use super::types::{Issue, Priority};
use crate::deviation::DeviationProperty;
use crate::engine::{ComparisonResult, DeviationRecord};
use crate::scoring::SeverityCounts;

pub struct IssueFormatter {
    environment: String,
    id_prefix: String,
    policies: Vec<Box<dyn EscalationPolicy>>,
}

impl Default for IssueFormatter {
    fn default() -> Self {
        Self::new(&IssueConfig::default())
    }
}

impl IssueFormatter {
    pub fn new(config: &IssueConfig) -> Self {
        let mut policies: Vec<Box<dyn EscalationPolicy>> = Vec::new();
        if config.effective_escalate_interactive() {
            policies.push(Box::new(InteractiveCategoryPolicy::from_names(
                &config.effective_interactive_categories(),
            )));
        }
        if config.effective_escalate_color() {
            policies.push(Box::new(ColorImpactPolicy));
        }
        Self {
            environment: config.effective_environment(),
            id_prefix: config.effective_id_prefix(),
            policies,
        }
    }

    /// Replace the escalation policies, keeping environment and id prefix.
    pub fn with_policies(mut self, policies: Vec<Box<dyn EscalationPolicy>>) -> Self {
        self.policies = policies;
        self
    }

    pub fn policy_names(&self) -> Vec<&'static str> {
        self.policies.iter().map(|p| p.name()).collect()
    }

    /// Flatten every deviation of `result` into an issue, in result order.
    pub fn format(&self, result: &ComparisonResult) -> Vec<Issue> {
        result
            .deviation_records()
            .iter()
            .enumerate()
            .map(|(index, record)| self.issue(index + 1, record))
            .collect()
    }

    /// Base priority from severity, raised at most one level by the first
    /// policy that applies.
    pub fn priority(&self, ctx: &EscalationContext<'_>) -> Priority {
        let base = Priority::from_severity(ctx.deviation.severity);
        match self.policies.iter().find(|p| p.applies(ctx)) {
            Some(policy) => {
                tracing::trace!(policy = policy.name(), "priority escalated");
                base.escalate()
            }
            None => base,
        }
    }

    fn issue(&self, sequence: usize, record: &DeviationRecord<'_>) -> Issue {
        let deviation = record.deviation;
        let priority = self.priority(&EscalationContext {
            deviation,
            category: record.category,
        });
        let subject = if record.design_name.is_empty() {
            record.design_ref
        } else {
            record.design_name
        };

        let (title, description) = match deviation.property {
            DeviationProperty::Existence => (
                format!("Missing element: {subject}"),
                deviation.message.clone().unwrap_or_else(|| {
                    format!("`{subject}` is in the design but not in the implementation")
                }),
            ),
            DeviationProperty::Style(kind) => (
                format!("{kind} mismatch on {subject}"),
                deviation.message.clone().unwrap_or_else(|| {
                    format!(
                        "expected {kind} `{}`, found `{}`",
                        deviation.expected_value, deviation.actual_value
                    )
                }),
            ),
        };

        let context = match record.implementation_ref {
            Some(selector) => format!("design {} -> {selector}", record.design_ref),
            None => format!("design {} -> (none)", record.design_ref),
        };

        Issue {
            id: self.issue_id(sequence, record),
            title,
            description,
            severity: deviation.severity,
            priority,
            category: deviation.category,
            module: record.category.to_string(),
            property: deviation.property.to_string(),
            expected: deviation.expected_value.clone(),
            actual: deviation.actual_value.clone(),
            design_ref: record.design_ref.to_string(),
            implementation_ref: record.implementation_ref.map(str::to_string),
            confidence: deviation.confidence,
            environment: self.environment.clone(),
            context,
        }
    }

    /// `{prefix}-{seq:04}-{hash:08x}`; the hash is stable across runs for
    /// the same node pair and property.
    fn issue_id(&self, sequence: usize, record: &DeviationRecord<'_>) -> String {
        let key = format!(
            "{}|{}|{}",
            record.design_ref,
            record.implementation_ref.unwrap_or(""),
            record.deviation.property
        );
        let hash = xxh3_64(key.as_bytes()) & 0xffff_ffff;
        format!("{}-{sequence:04}-{hash:08x}", self.id_prefix)
    }
}

/// Count issues by severity.
pub fn severity_counts(issues: &[Issue]) -> SeverityCounts {
    SeverityCounts::from_severities(issues.iter().map(|i| i.severity))
}
