//! Taxonomy classifier tests: rule examples, totality, bucket population.

use std::collections::BTreeMap;

use parity_analysis::taxonomy::*;
use parity_core::config::TaxonomyConfig;
use parity_core::types::css::style_from_css;
use parity_core::types::{
    DesignNode, DesignTree, ImplementationNode, ImplementationTree, LayoutInfo, StyleProperties,
    TreeOrigin,
};
use proptest::prelude::*;

fn classifier() -> TaxonomyClassifier {
    TaxonomyClassifier::new(&TaxonomyConfig::default())
}

fn frame(id: &str, name: &str, children: usize) -> DesignNode {
    let mut node = DesignNode::new(id, name, "FRAME");
    node.child_count = Some(children);
    node
}

fn with_layout(mut node: DesignNode, mode: &str, direction: Option<&str>) -> DesignNode {
    node.properties = StyleProperties {
        layout: Some(LayoutInfo {
            mode: Some(mode.to_string()),
            direction: direction.map(str::to_string),
            ..Default::default()
        }),
        ..Default::default()
    };
    node
}

#[test]
fn test_design_rule_examples() {
    let c = classifier();
    let cases = [
        (DesignNode::new("1", "Label", "TEXT"), CategoryPath::AtomsTypography),
        (DesignNode::new("2", "Chevron", "VECTOR"), CategoryPath::AtomsIcons),
        (frame("3", "PrimaryButton", 1), CategoryPath::AtomsButtons),
        (frame("4", "Site Header", 6), CategoryPath::OrganismsHeaders),
        (frame("5", "Product Card", 4), CategoryPath::MoleculesCards),
        (frame("6", "Search", 3), CategoryPath::MoleculesSearch),
        (frame("7", "Avatar", 0), CategoryPath::AtomsImages),
        (frame("8", "Hero", 4), CategoryPath::OrganismsSections),
    ];
    for (node, expected) in cases {
        assert_eq!(
            c.classify(&node, TreeOrigin::Design),
            expected,
            "node `{}`",
            node.name
        );
    }
}

#[test]
fn test_form_keyword_needs_group_shape() {
    let c = classifier();
    assert_eq!(
        c.classify(&frame("1", "Login Form", 5), TreeOrigin::Design),
        CategoryPath::OrganismsForms
    );
    // A single-child "form" is not a form organism.
    assert_ne!(
        c.classify(&frame("2", "Form", 1), TreeOrigin::Design),
        CategoryPath::OrganismsForms
    );
}

#[test]
fn test_layout_rules_use_auto_layout() {
    let c = classifier();
    let row = with_layout(frame("1", "Frame 12", 3), "HORIZONTAL", None);
    let column = with_layout(frame("2", "Frame 13", 3), "VERTICAL", None);
    let grid = with_layout(frame("3", "Frame 14", 3), "grid", None);
    assert_eq!(c.classify(&row, TreeOrigin::Design), CategoryPath::LayoutFlexbox);
    assert_eq!(c.classify(&column, TreeOrigin::Design), CategoryPath::LayoutStack);
    assert_eq!(c.classify(&grid, TreeOrigin::Design), CategoryPath::LayoutGrid);
}

#[test]
fn test_small_layout_containers_land_in_layout_other() {
    let c = classifier();
    let design = with_layout(frame("1", "Frame 20", 1), "HORIZONTAL", None);
    assert_eq!(c.classify(&design, TreeOrigin::Design), CategoryPath::LayoutOther);

    let mut css = BTreeMap::new();
    css.insert("display".to_string(), "inline-grid".to_string());
    let implementation = ImplementationNode::new("div.g1", "div")
        .with_styles(style_from_css(&css, 16.0).unwrap());
    assert_eq!(
        c.classify(&implementation, TreeOrigin::Implementation),
        CategoryPath::LayoutOther
    );

    // Plain flow elements stay in their shape's fallback.
    css.insert("display".to_string(), "block".to_string());
    let block =
        ImplementationNode::new("div.g2", "div").with_styles(style_from_css(&css, 16.0).unwrap());
    assert_eq!(c.classify(&block, TreeOrigin::Implementation), CategoryPath::AtomsOther);
}

#[test]
fn test_unmatched_nodes_fall_back_by_shape() {
    let c = classifier();
    assert_eq!(
        c.classify(&frame("1", "Frame 1", 0), TreeOrigin::Design),
        CategoryPath::AtomsOther
    );
    assert_eq!(
        c.classify(&frame("2", "Frame 2", 5), TreeOrigin::Design),
        CategoryPath::MoleculesOther
    );
    assert_eq!(
        c.classify(&frame("3", "Frame 3", 40), TreeOrigin::Design),
        CategoryPath::OrganismsOther
    );
}

#[test]
fn test_implementation_rule_examples() {
    let c = classifier();
    let cases = [
        (ImplementationNode::new("header", "header"), CategoryPath::OrganismsHeaders),
        (ImplementationNode::new("#buy", "button"), CategoryPath::AtomsButtons),
        (ImplementationNode::new("a.more", "a"), CategoryPath::AtomsLinks),
        (ImplementationNode::new("h2.title", "h2"), CategoryPath::AtomsTypography),
        (
            ImplementationNode::new("div.cta-link", "div").with_attribute("class", "cta-link"),
            CategoryPath::AtomsButtons,
        ),
        (
            ImplementationNode::new("div.product-card", "div").with_child_count(4),
            CategoryPath::MoleculesCards,
        ),
        (
            ImplementationNode::new("ul.dropdown", "ul").with_child_count(5),
            CategoryPath::MoleculesMenus,
        ),
        (
            ImplementationNode::new("ul", "ul").with_child_count(5),
            CategoryPath::LayoutStack,
        ),
    ];
    for (node, expected) in cases {
        assert_eq!(
            c.classify(&node, TreeOrigin::Implementation),
            expected,
            "node `{}`",
            node.selector
        );
    }
}

#[test]
fn test_thresholds_are_configurable() {
    let config = TaxonomyConfig {
        atom_max_children: Some(3),
        molecule_max_children: Some(4),
    };
    let c = TaxonomyClassifier::new(&config);
    assert_eq!(c.shape_of(&frame("1", "x", 3)), NodeShape::Atom);
    assert_eq!(c.shape_of(&frame("2", "x", 5)), NodeShape::Organism);
}

#[test]
fn test_custom_rules_replace_defaults() {
    let rules = vec![ClassificationRule::new("everything", CategoryPath::LayoutSpacers)];
    let c = TaxonomyClassifier::with_rules(&TaxonomyConfig::default(), rules, Vec::new());
    assert_eq!(
        c.classify(&frame("1", "Header", 6), TreeOrigin::Design),
        CategoryPath::LayoutSpacers
    );
    assert_eq!(
        c.classify(&ImplementationNode::new("header", "header"), TreeOrigin::Implementation),
        CategoryPath::AtomsOther
    );
}

#[test]
fn test_build_taxonomy_keeps_every_bucket() {
    let design = DesignTree::new(
        frame("1", "Header", 0)
            .with_child(DesignNode::new("2", "Logo", "RECTANGLE"))
            .with_child(DesignNode::new("3", "Title", "TEXT")),
    );
    let implementation = ImplementationTree::new(vec![
        ImplementationNode::new("header", "header").with_child_count(2),
        ImplementationNode::new("header > h1", "h1"),
    ]);
    let (taxonomy, assignments) = classifier().build_taxonomy(&design, &implementation);

    assert_eq!(taxonomy.buckets.len(), CategoryPath::ALL.len());
    assert_eq!(taxonomy.node_count(TreeOrigin::Design), 3);
    assert_eq!(taxonomy.node_count(TreeOrigin::Implementation), 2);

    let headers = taxonomy.bucket(CategoryPath::OrganismsHeaders).unwrap();
    assert_eq!(headers.design_column.len(), 1);
    assert_eq!(headers.implementation_column.len(), 1);
    assert_eq!(
        assignments.get(TreeOrigin::Design, "2"),
        Some(CategoryPath::AtomsImages)
    );

    let empty = taxonomy.empty_buckets();
    assert!(empty.contains(&CategoryPath::OrganismsFooters));
    assert!(!empty.contains(&CategoryPath::AtomsTypography));
}

#[test]
fn test_category_path_string_round_trip() {
    for path in CategoryPath::ALL {
        assert_eq!(path.as_str().parse::<CategoryPath>().unwrap(), *path);
        assert!(path.as_str().starts_with(path.level().name()));
    }
    assert!("atoms.unknown".parse::<CategoryPath>().is_err());
}

fn arb_kind() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("FRAME".to_string()),
        Just("TEXT".to_string()),
        Just("VECTOR".to_string()),
        Just("INSTANCE".to_string()),
        Just("div".to_string()),
        Just("button".to_string()),
        "[a-z]{1,8}",
    ]
}

proptest! {
    #[test]
    fn prop_classification_is_total(
        kind in arb_kind(),
        name in "[A-Za-z /_-]{0,24}",
        children in 0usize..40,
    ) {
        let c = classifier();
        let mut design = DesignNode::new("n", name.clone(), kind.clone());
        design.child_count = Some(children);
        let implementation = ImplementationNode::new(format!("div.{name}"), kind)
            .with_child_count(children);

        let d = c.classify(&design, TreeOrigin::Design);
        let i = c.classify(&implementation, TreeOrigin::Implementation);
        prop_assert!(CategoryPath::ALL.contains(&d));
        prop_assert!(CategoryPath::ALL.contains(&i));
    }
}
