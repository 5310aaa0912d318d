//! Node model decoding and property lookup.

use parity_core::types::properties::{format_px, shadow_list_signature};
use parity_core::types::{
    Bounds, DesignTree, ImplementationTree, PropertyKind, PropertyValue, Rgba, StyledNode,
    TreeOrigin,
};

const DESIGN_JSON: &str = r##"{
  "root": {
    "id": "1:1",
    "name": "Header",
    "type": "FRAME",
    "properties": {
      "backgroundColor": {"r": 1.0, "g": 1.0, "b": 1.0},
      "layout": {"mode": "HORIZONTAL"},
      "spacing": {"padding": {"top": 16, "bottom": "16px"}, "itemSpacing": 8}
    },
    "absoluteBoundingBox": {"x": 0, "y": 0, "width": 1440, "height": 80},
    "children": [
      {
        "id": "1:2",
        "name": "Title",
        "type": "TEXT",
        "properties": {
          "fill": "#1a1a1a",
          "textStyle": {"fontFamily": "Inter, sans-serif", "fontSize": 24, "fontWeight": "bold"}
        }
      },
      {"id": "1:3", "name": "Nav", "type": "FRAME", "childCount": 4}
    ]
  }
}"##;

const IMPLEMENTATION_JSON: &str = r##"{
  "nodes": [
    {
      "selector": "header.site-header",
      "tagName": "HEADER",
      "childCount": 2,
      "boundingBox": {"x": 0, "y": 0, "width": 1440, "height": 82},
      "computedStyles": {
        "background-color": "rgb(255, 255, 255)",
        "display": "flex",
        "padding": "16px 24px",
        "box-shadow": "rgba(0, 0, 0, 0.1) 0px 2px 4px 0px"
      }
    },
    {
      "selector": "header.site-header > h1",
      "tagName": "h1",
      "textContent": "  Acme  ",
      "computedStyles": {
        "color": "#1a1a1a",
        "font-family": "\"Inter\", sans-serif",
        "font-size": "1.5rem",
        "font-weight": "700",
        "line-height": "normal"
      }
    }
  ]
}"##;

#[test]
fn test_design_tree_decodes_and_walks_preorder() {
    let tree = DesignTree::from_json(DESIGN_JSON).unwrap();
    let ids: Vec<&str> = tree.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["1:1", "1:2", "1:3"]);
    assert_eq!(tree.node_count(), 3);

    let root = &tree.root;
    assert_eq!(root.origin(), TreeOrigin::Design);
    assert_eq!(root.child_count(), 2);
    assert_eq!(
        root.property_value(PropertyKind::Display),
        Some(PropertyValue::Keyword("flex".to_string()))
    );
    assert_eq!(
        root.property_string(PropertyKind::FlexDirection).as_deref(),
        Some("row")
    );
    assert_eq!(root.property_string(PropertyKind::PaddingBottom).as_deref(), Some("16px"));
    assert_eq!(root.property_string(PropertyKind::Gap).as_deref(), Some("8px"));
    assert_eq!(root.property_value(PropertyKind::MarginTop), None);
}

#[test]
fn test_declared_child_count_used_without_children() {
    let tree = DesignTree::from_json(DESIGN_JSON).unwrap();
    let nav = tree.iter().find(|n| n.id == "1:3").unwrap();
    assert_eq!(nav.child_count(), 4);
}

#[test]
fn test_design_typography_normalized() {
    let tree = DesignTree::from_json(DESIGN_JSON).unwrap();
    let title = tree.iter().find(|n| n.id == "1:2").unwrap();
    assert_eq!(
        title.property_value(PropertyKind::FontFamily),
        Some(PropertyValue::Keyword("inter".to_string()))
    );
    assert_eq!(title.property_value(PropertyKind::FontWeight), Some(PropertyValue::Weight(700)));
    assert_eq!(title.property_string(PropertyKind::Fill).as_deref(), Some("#1a1a1a"));
}

#[test]
fn test_implementation_tree_decodes_computed_styles() {
    let tree = ImplementationTree::from_json(IMPLEMENTATION_JSON).unwrap();
    assert_eq!(tree.node_count(), 2);

    let header = &tree.nodes[0];
    assert_eq!(header.tag, "header");
    assert_eq!(header.property_string(PropertyKind::PaddingLeft).as_deref(), Some("24px"));
    assert_eq!(header.styles().shadows.len(), 1);

    let title = &tree.nodes[1];
    assert_eq!(title.display_name(), "Acme");
    assert_eq!(title.property_string(PropertyKind::FontSize).as_deref(), Some("24px"));
    assert_eq!(title.property_value(PropertyKind::LineHeight), None);
    assert_eq!(
        title.property_value(PropertyKind::FontFamily),
        Some(PropertyValue::Keyword("inter".to_string()))
    );
}

#[test]
fn test_bare_array_implementation_json() {
    let tree =
        ImplementationTree::from_json(r##"[{"selector": "#cta", "tag": "button"}]"##).unwrap();
    assert_eq!(tree.nodes[0].display_name(), "button");
    assert_eq!(tree.nodes[0].child_count(), 0);
}

#[test]
fn test_unparseable_style_value_is_input_error() {
    let err = ImplementationTree::from_json(
        r##"[{"selector": "#x", "tag": "div", "computedStyles": {"padding-top": "lots"}}]"##,
    )
    .unwrap_err();
    assert_eq!(err.component(), "implementation tree");
    assert!(err.to_string().contains("padding-top"));
}

#[test]
fn test_percentage_radius_does_not_reject_tree() {
    let tree = ImplementationTree::from_json(
        r##"[{"selector": "img.avatar", "tag": "img",
             "computedStyles": {"border-radius": "50%", "padding-top": "4px"}}]"##,
    )
    .unwrap();
    let avatar = &tree.nodes[0];
    assert_eq!(avatar.property_value(PropertyKind::CornerRadius), None);
    assert_eq!(
        avatar.property_value(PropertyKind::PaddingTop),
        Some(PropertyValue::Length(4.0))
    );
}

#[test]
fn test_design_effects_keep_only_shadows() {
    let tree = DesignTree::from_json(
        r##"{"id": "1", "name": "Card", "type": "FRAME", "properties": {"effects": [
            {"type": "LAYER_BLUR", "radius": 12, "visible": true},
            {"type": "DROP_SHADOW", "visible": true, "radius": 8, "spread": 0,
             "offset": {"x": 0, "y": 4},
             "color": {"r": 0.0, "g": 0.0, "b": 0.0, "a": 0.25}},
            {"type": "INNER_SHADOW", "visible": false, "radius": 2,
             "offset": {"x": 1, "y": 1}, "color": "#000000"}
        ]}}"##,
    )
    .unwrap();
    let shadows = &tree.root.properties.shadows;
    assert_eq!(shadows.len(), 1);
    assert_eq!(shadows[0].offset_x, 0.0);
    assert_eq!(shadows[0].offset_y, 4.0);
    assert_eq!(shadows[0].blur, 8.0);
    assert!(!shadows[0].inset);
    assert!(shadows[0].color.a > 0 && shadows[0].color.a < 255);
}

#[test]
fn test_normalized_shadow_shape_still_decodes() {
    let tree = DesignTree::from_json(
        r##"{"id": "1", "name": "Card", "type": "FRAME", "properties": {"shadows": [
            {"offsetX": 2, "offsetY": "6px", "blur": 10, "color": "#112233", "inset": true}
        ]}}"##,
    )
    .unwrap();
    let shadow = &tree.root.properties.shadows[0];
    assert_eq!((shadow.offset_x, shadow.offset_y, shadow.blur), (2.0, 6.0, 10.0));
    assert!(shadow.inset);
    assert_eq!(shadow.color, Rgba::rgb(0x11, 0x22, 0x33));
}

#[test]
fn test_css_display_none_is_not_block() {
    let tree = ImplementationTree::from_json(
        r##"[{"selector": "#menu", "tag": "div", "computedStyles": {"display": "none"}}]"##,
    )
    .unwrap();
    assert_eq!(
        tree.nodes[0].property_value(PropertyKind::Display),
        Some(PropertyValue::Keyword("none".to_string()))
    );
}

#[test]
fn test_invalid_json_is_input_error() {
    let err = DesignTree::from_json("{not json").unwrap_err();
    assert_eq!(err.component(), "design tree");
}

#[test]
fn test_implementation_search_text_uses_own_segment() {
    let tree = ImplementationTree::from_json(
        r##"[{"selector": "header > nav > a.cta", "tag": "a",
             "attributes": {"class": "cta primary", "role": "button"}}]"##,
    )
    .unwrap();
    let text = tree.nodes[0].search_text();
    assert!(text.contains("a.cta"));
    assert!(text.contains("primary"));
    assert!(!text.contains("header"));
}

#[test]
fn test_bounds_iou() {
    let a = Bounds { x: 0.0, y: 0.0, width: 10.0, height: 10.0 };
    let b = Bounds { x: 5.0, y: 0.0, width: 10.0, height: 10.0 };
    assert!((a.iou(&b) - 50.0 / 150.0).abs() < 1e-9);
    assert_eq!(a.iou(&Bounds { x: 20.0, y: 20.0, width: 1.0, height: 1.0 }), 0.0);
    assert_eq!(a.iou(&a), 1.0);
}

#[test]
fn test_value_formatting() {
    assert_eq!(format_px(16.0), "16px");
    assert_eq!(format_px(1.5), "1.5px");
    assert_eq!(shadow_list_signature(&[]), "none");
    assert_eq!(Rgba::rgb(255, 0, 0).to_string(), "#ff0000");
}
