//! Issue formatter tests: flattening, priority escalation, stable ids.

use parity_analysis::deviation::{Deviation, DeviationProperty, Severity};
use parity_analysis::engine::{ComparisonEngine, ComparisonInput, ComparisonResult};
use parity_analysis::issues::*;
use parity_analysis::taxonomy::CategoryPath;
use parity_core::config::IssueConfig;
use parity_core::types::{
    DesignNode, DesignTree, Edges, ImplementationNode, ImplementationTree, PropertyKind, Rgba,
    Spacing, StyleProperties,
};
use proptest::prelude::*;

fn deviation(kind: PropertyKind, severity: Severity) -> Deviation {
    Deviation::new(DeviationProperty::Style(kind), "a", "b", severity, 1.0, 0.9)
}

fn styles(fill: Rgba, padding: f64) -> StyleProperties {
    StyleProperties {
        fill: Some(fill),
        spacing: Some(Spacing {
            padding: Edges {
                top: Some(padding),
                ..Default::default()
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// A page with one button whose color and padding drifted, plus a missing footer.
fn sample_result() -> ComparisonResult {
    let mut footer = DesignNode::new("1:3", "Footer", "FRAME");
    footer.child_count = Some(8);
    let design = DesignTree::new(
        DesignNode::new("1:1", "Page", "FRAME")
            .with_child(
                DesignNode::new("1:2", "Buy Button", "INSTANCE")
                    .with_properties(styles(Rgba::rgb(0, 0, 0), 8.0)),
            )
            .with_child(footer),
    );
    let implementation = ImplementationTree::new(vec![
        ImplementationNode::new("main", "main")
            .with_child_count(1)
            .with_attribute("data-design-id", "1:1"),
        ImplementationNode::new("main > button", "button")
            .with_attribute("data-design-id", "1:2")
            .with_styles(styles(Rgba::rgb(102, 102, 102), 30.0)),
    ]);
    ComparisonEngine::default()
        .compare(ComparisonInput::new(&design, &implementation))
        .unwrap()
}

#[test]
fn test_base_priority_from_severity() {
    assert_eq!(Priority::from_severity(Severity::Critical), Priority::High);
    assert_eq!(Priority::from_severity(Severity::Major), Priority::Medium);
    assert_eq!(Priority::from_severity(Severity::Medium), Priority::Low);
    assert_eq!(Priority::from_severity(Severity::Minor), Priority::Low);
    assert_eq!(Priority::Urgent.escalate(), Priority::Urgent);
}

#[test]
fn test_interactive_bucket_escalates() {
    let formatter = IssueFormatter::default();
    let spacing = deviation(PropertyKind::PaddingTop, Severity::Major);
    let on_button = EscalationContext {
        deviation: &spacing,
        category: CategoryPath::AtomsButtons,
    };
    let on_card = EscalationContext {
        deviation: &spacing,
        category: CategoryPath::MoleculesCards,
    };
    assert_eq!(formatter.priority(&on_button), Priority::High);
    assert_eq!(formatter.priority(&on_card), Priority::Medium);
}

#[test]
fn test_color_escalates_and_policies_do_not_stack() {
    let formatter = IssueFormatter::default();
    let color = deviation(PropertyKind::Fill, Severity::Minor);
    let on_card = EscalationContext {
        deviation: &color,
        category: CategoryPath::MoleculesCards,
    };
    let on_link = EscalationContext {
        deviation: &color,
        category: CategoryPath::AtomsLinks,
    };
    assert_eq!(formatter.priority(&on_card), Priority::Medium);
    // Both policies apply; priority still moves a single level.
    assert_eq!(formatter.priority(&on_link), Priority::Medium);
}

#[test]
fn test_escalation_can_be_disabled() {
    let config = IssueConfig {
        escalate_interactive: Some(false),
        escalate_color: Some(false),
        ..Default::default()
    };
    let formatter = IssueFormatter::new(&config);
    assert!(formatter.policy_names().is_empty());
    let color = deviation(PropertyKind::Fill, Severity::Critical);
    let ctx = EscalationContext {
        deviation: &color,
        category: CategoryPath::AtomsButtons,
    };
    assert_eq!(formatter.priority(&ctx), Priority::High);
}

#[test]
fn test_one_issue_per_deviation_in_result_order() {
    let result = sample_result();
    let issues = IssueFormatter::default().format(&result);

    assert_eq!(issues.len(), result.deviation_count());
    assert_eq!(issues.len(), 3);
    assert_eq!(issues[0].property, "color");
    assert_eq!(issues[1].property, "padding-top");
    assert_eq!(issues[2].property, "existence");
    assert_eq!(issues[2].title, "Missing element: Footer");
    assert_eq!(issues[2].implementation_ref, None);
}

#[test]
fn test_issue_fields_carry_context() {
    let result = sample_result();
    let config = IssueConfig {
        environment: Some("staging".to_string()),
        ..Default::default()
    };
    let issues = IssueFormatter::new(&config).format(&result);
    let color = &issues[0];

    assert_eq!(color.severity, Severity::Critical);
    assert_eq!(color.priority, Priority::Urgent);
    assert_eq!(color.module, "atoms.buttons");
    assert_eq!(color.expected, "#000000");
    assert_eq!(color.actual, "#666666");
    assert_eq!(color.design_ref, "1:2");
    assert_eq!(color.implementation_ref.as_deref(), Some("main > button"));
    assert_eq!(color.environment, "staging");
    assert!(issues.iter().all(|i| i.environment == "staging"));
}

#[test]
fn test_issue_ids_are_prefixed_and_stable() {
    let result = sample_result();
    let first = IssueFormatter::default().format(&result);
    let second = IssueFormatter::default().format(&sample_result());

    for (index, issue) in first.iter().enumerate() {
        let parts: Vec<&str> = issue.id.split('-').collect();
        assert_eq!(parts.len(), 3, "id `{}`", issue.id);
        assert_eq!(parts[0], "DPI");
        assert_eq!(parts[1], format!("{:04}", index + 1));
        assert_eq!(parts[2].len(), 8);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
    }
    let ids: Vec<&str> = first.iter().map(|i| i.id.as_str()).collect();
    let again: Vec<&str> = second.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, again);
}

#[test]
fn test_severity_counts_match_result() {
    let result = sample_result();
    let issues = IssueFormatter::default().format(&result);
    assert_eq!(severity_counts(&issues), result.severity_counts);
}

/// Buttons keyed 1:1 to the implementation, each with its own drift, plus
/// `missing` design nodes with no counterpart.
fn drifted_page(drift: &[(u8, f64)], missing: usize) -> (DesignTree, ImplementationTree) {
    let mut root = DesignNode::new("root", "Page", "FRAME");
    let mut nodes = Vec::new();
    for (i, (gray, padding)) in drift.iter().enumerate() {
        let id = format!("b{i}");
        root = root.with_child(
            DesignNode::new(id.clone(), format!("Button {i}"), "INSTANCE")
                .with_properties(styles(Rgba::rgb(0, 0, 0), 8.0)),
        );
        nodes.push(
            ImplementationNode::new(format!("#{id}"), "button")
                .with_attribute("data-design-id", id)
                .with_styles(styles(Rgba::rgb(*gray, *gray, *gray), *padding)),
        );
    }
    for i in 0..missing {
        root = root.with_child(DesignNode::new(format!("m{i}"), format!("Panel {i}"), "FRAME"));
    }
    (DesignTree::new(root), ImplementationTree::new(nodes))
}

proptest! {
    #[test]
    fn prop_issue_severity_counts_round_trip(
        drift in prop::collection::vec((any::<u8>(), 0.0f64..64.0), 0..8),
        missing in 0usize..4,
    ) {
        let (design, implementation) = drifted_page(&drift, missing);
        let result = ComparisonEngine::default()
            .compare(ComparisonInput::new(&design, &implementation))
            .unwrap();
        let issues = IssueFormatter::default().format(&result);

        prop_assert_eq!(issues.len(), result.deviation_count());
        prop_assert_eq!(severity_counts(&issues), result.severity_counts);
        prop_assert!(issues.iter().all(|i| i.priority >= Priority::from_severity(i.severity)));
    }
}
