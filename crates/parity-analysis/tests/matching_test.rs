//! Node matcher tests: strategy order, bucket constraints, leftovers.

use parity_analysis::matching::*;
use parity_analysis::taxonomy::CategoryPath;
use parity_core::config::MatchingConfig;
use parity_core::types::{Bounds, DesignNode, ImplementationNode};

fn bounds(x: f64, y: f64, width: f64, height: f64) -> Bounds {
    Bounds { x, y, width, height }
}

fn run(
    matcher: &NodeMatcher,
    design: &[DesignNode],
    implementation: &[ImplementationNode],
    design_categories: &[CategoryPath],
    implementation_categories: &[CategoryPath],
) -> MatchOutcome {
    let d: Vec<&DesignNode> = design.iter().collect();
    let i: Vec<&ImplementationNode> = implementation.iter().collect();
    matcher.match_nodes(&d, &i, design_categories, implementation_categories)
}

#[test]
fn test_shared_key_wins_over_position() {
    let matcher = NodeMatcher::new(&MatchingConfig::default());
    let design = vec![
        DesignNode::new("10:1", "Primary", "INSTANCE"),
        DesignNode::new("10:2", "Secondary", "INSTANCE"),
    ];
    let implementation = vec![
        ImplementationNode::new("#b", "button").with_attribute("data-design-id", "10:2"),
        ImplementationNode::new("#a", "button").with_attribute("data-design-id", "10:1"),
    ];
    let cats = [CategoryPath::AtomsButtons, CategoryPath::AtomsButtons];
    let outcome = run(&matcher, &design, &implementation, &cats, &cats);

    assert_eq!(outcome.pairs.len(), 2);
    assert_eq!((outcome.pairs[0].design, outcome.pairs[0].implementation), (0, 1));
    assert_eq!((outcome.pairs[1].design, outcome.pairs[1].implementation), (1, 0));
    assert!(outcome
        .pairs
        .iter()
        .all(|p| p.strategy == MatchStrategyKind::SharedKey));
}

#[test]
fn test_shared_key_matches_name_ignoring_case() {
    let matcher = NodeMatcher::new(&MatchingConfig::default());
    let design = vec![DesignNode::new("1:9", "Hero Banner", "FRAME")];
    let implementation = vec![
        ImplementationNode::new("section.hero", "section")
            .with_attribute("data-figma-id", "hero banner"),
    ];
    // Key matches bypass the bucket check.
    let outcome = run(
        &matcher,
        &design,
        &implementation,
        &[CategoryPath::OrganismsSections],
        &[CategoryPath::LayoutContainers],
    );
    assert_eq!(outcome.pairs.len(), 1);
    assert_eq!(outcome.pairs[0].strategy, MatchStrategyKind::SharedKey);
}

#[test]
fn test_geometry_picks_best_overlap_in_bucket() {
    let matcher = NodeMatcher::new(&MatchingConfig::default());
    let design =
        vec![DesignNode::new("1", "Card", "FRAME").with_bounds(bounds(0.0, 0.0, 100.0, 100.0))];
    let implementation = vec![
        ImplementationNode::new(".a", "div").with_bounds(bounds(40.0, 0.0, 100.0, 100.0)),
        ImplementationNode::new(".b", "div").with_bounds(bounds(5.0, 0.0, 100.0, 100.0)),
        ImplementationNode::new(".c", "div").with_bounds(bounds(0.0, 0.0, 100.0, 100.0)),
    ];
    let outcome = run(
        &matcher,
        &design,
        &implementation,
        &[CategoryPath::MoleculesCards],
        &[
            CategoryPath::MoleculesCards,
            CategoryPath::MoleculesCards,
            CategoryPath::AtomsOther,
        ],
    );
    assert_eq!(outcome.pairs.len(), 1);
    assert_eq!(outcome.pairs[0].implementation, 1, "exact box is in another bucket");
    assert_eq!(outcome.pairs[0].strategy, MatchStrategyKind::Geometry);
    assert_eq!(outcome.unmatched_implementation, vec![0, 2]);
}

#[test]
fn test_geometry_respects_min_overlap() {
    let config = MatchingConfig {
        min_overlap: Some(0.9),
        positional_fallback: Some(false),
        ..Default::default()
    };
    let matcher = NodeMatcher::new(&config);
    let design =
        vec![DesignNode::new("1", "Frame", "FRAME").with_bounds(bounds(0.0, 0.0, 10.0, 10.0))];
    let implementation =
        vec![ImplementationNode::new("div", "div").with_bounds(bounds(2.0, 0.0, 10.0, 10.0))];
    let cats = [CategoryPath::AtomsOther];
    let outcome = run(&matcher, &design, &implementation, &cats, &cats);
    assert!(outcome.pairs.is_empty());
    assert_eq!(outcome.unmatched_design, vec![0]);
}

#[test]
fn test_geometry_is_relative_to_each_tree() {
    let matcher = NodeMatcher::new(&MatchingConfig {
        positional_fallback: Some(false),
        ..Default::default()
    });
    // Same layout; the design frame sits at (1000, 500) on the canvas.
    let design = vec![
        DesignNode::new("1", "Page", "FRAME").with_bounds(bounds(1000.0, 500.0, 400.0, 300.0)),
        DesignNode::new("2", "Card", "FRAME").with_bounds(bounds(1020.0, 520.0, 200.0, 100.0)),
    ];
    let implementation = vec![
        ImplementationNode::new("main", "main").with_bounds(bounds(0.0, 0.0, 400.0, 300.0)),
        ImplementationNode::new("main > div", "div").with_bounds(bounds(20.0, 20.0, 200.0, 100.0)),
    ];
    let cats = [CategoryPath::OrganismsSections, CategoryPath::MoleculesCards];
    let outcome = run(&matcher, &design, &implementation, &cats, &cats);

    assert_eq!(outcome.pairs.len(), 2);
    assert!(outcome.pairs.iter().all(|p| p.strategy == MatchStrategyKind::Geometry));
    assert_eq!((outcome.pairs[1].design, outcome.pairs[1].implementation), (1, 1));
    assert!(outcome.unmatched_design.is_empty());
}

#[test]
fn test_ordinal_pairs_after_geometry_misses() {
    let matcher = NodeMatcher::new(&MatchingConfig::default());
    let design = vec![
        DesignNode::new("1", "Frame 1", "FRAME").with_bounds(bounds(0.0, 0.0, 10.0, 10.0)),
        DesignNode::new("2", "Frame 2", "FRAME").with_bounds(bounds(0.0, 400.0, 10.0, 10.0)),
    ];
    let implementation = vec![
        ImplementationNode::new("#a", "div").with_bounds(bounds(0.0, 0.0, 10.0, 10.0)),
        ImplementationNode::new("#b", "div").with_bounds(bounds(300.0, 0.0, 10.0, 10.0)),
    ];
    let cats = [CategoryPath::AtomsOther; 2];
    let outcome = run(&matcher, &design, &implementation, &cats, &cats);

    assert_eq!(outcome.pairs.len(), 2);
    assert_eq!(outcome.pairs[0].strategy, MatchStrategyKind::Geometry);
    assert_eq!(outcome.pairs[1].strategy, MatchStrategyKind::Ordinal);
    assert_eq!((outcome.pairs[1].design, outcome.pairs[1].implementation), (1, 1));
}

#[test]
fn test_label_strategy_uses_text_and_classes() {
    let matcher = NodeMatcher::new(&MatchingConfig::default());
    let design = vec![
        DesignNode::new("1", "Sign Up", "INSTANCE"),
        DesignNode::new("2", "LearnMore", "INSTANCE"),
    ];
    let implementation = vec![
        ImplementationNode::new("a.learn-more", "a").with_attribute("class", "learn-more"),
        ImplementationNode::new("button", "button").with_text("Sign up"),
    ];
    let cats = [CategoryPath::AtomsButtons, CategoryPath::AtomsButtons];
    let outcome = run(&matcher, &design, &implementation, &cats, &cats);

    assert_eq!(outcome.pairs.len(), 2);
    assert_eq!(outcome.pairs[0].implementation, 1);
    assert_eq!(outcome.pairs[1].implementation, 0);
    assert!(outcome.pairs.iter().all(|p| p.strategy == MatchStrategyKind::Label));
}

#[test]
fn test_ordinal_fallback_pairs_in_document_order() {
    let matcher = NodeMatcher::new(&MatchingConfig::default());
    let design = vec![
        DesignNode::new("1", "Frame 1", "FRAME"),
        DesignNode::new("2", "Frame 2", "FRAME"),
        DesignNode::new("3", "Frame 3", "FRAME"),
    ];
    let implementation = vec![
        ImplementationNode::new("div:nth-child(1)", "div"),
        ImplementationNode::new("div:nth-child(2)", "div"),
    ];
    let cats = [CategoryPath::AtomsOther; 3];
    let outcome = run(&matcher, &design, &implementation, &cats, &cats[..2]);

    assert_eq!(outcome.pairs.len(), 2);
    assert_eq!((outcome.pairs[0].design, outcome.pairs[0].implementation), (0, 0));
    assert_eq!((outcome.pairs[1].design, outcome.pairs[1].implementation), (1, 1));
    assert_eq!(outcome.unmatched_design, vec![2]);
    assert!(outcome.unmatched_implementation.is_empty());
}

#[test]
fn test_ordinal_can_be_disabled() {
    let config = MatchingConfig {
        positional_fallback: Some(false),
        ..Default::default()
    };
    let matcher = NodeMatcher::new(&config);
    assert_eq!(matcher.strategy_count(), 3);

    let design = vec![DesignNode::new("1", "Frame 1", "FRAME")];
    let implementation = vec![ImplementationNode::new("div", "div")];
    let cats = [CategoryPath::AtomsOther];
    let outcome = run(&matcher, &design, &implementation, &cats, &cats);
    assert!(outcome.pairs.is_empty());
    assert_eq!(outcome.unmatched_implementation, vec![0]);
}

#[test]
fn test_every_node_ends_in_exactly_one_place() {
    let matcher = NodeMatcher::new(&MatchingConfig::default());
    let design: Vec<DesignNode> = (0..5)
        .map(|n| DesignNode::new(n.to_string(), format!("Frame {n}"), "FRAME"))
        .collect();
    let implementation: Vec<ImplementationNode> = (0..3)
        .map(|n| ImplementationNode::new(format!("#n{n}"), "div"))
        .collect();
    let d_cats = [
        CategoryPath::AtomsOther,
        CategoryPath::MoleculesOther,
        CategoryPath::AtomsOther,
        CategoryPath::AtomsOther,
        CategoryPath::LayoutGrid,
    ];
    let i_cats = [CategoryPath::AtomsOther, CategoryPath::LayoutGrid, CategoryPath::AtomsOther];
    let outcome = run(&matcher, &design, &implementation, &d_cats, &i_cats);

    let mut seen_design: Vec<usize> = outcome.pairs.iter().map(|p| p.design).collect();
    seen_design.extend(&outcome.unmatched_design);
    seen_design.sort_unstable();
    assert_eq!(seen_design, vec![0, 1, 2, 3, 4]);

    let mut seen_impl: Vec<usize> = outcome.pairs.iter().map(|p| p.implementation).collect();
    seen_impl.extend(&outcome.unmatched_implementation);
    seen_impl.sort_unstable();
    assert_eq!(seen_impl, vec![0, 1, 2]);
}
