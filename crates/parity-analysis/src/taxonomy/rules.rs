//! Data-driven classification rules, evaluated first-match-wins.
//!
//! A rule is a conjunction of optional conditions (kind/tag, name keywords,
//! structural shape, layout display/direction). Empty conditions always hold.
//! Design and implementation trees get separate rule lists that emit into
//! the same `CategoryPath` namespace.

use aho_corasick::AhoCorasick;
use parity_core::types::collections::SmallVec4;
use parity_core::types::{PropertyKind, PropertyValue, StyledNode};
use serde::{Deserialize, Serialize};

use super::types::{CategoryPath, NodeShape};

/// One classification rule as plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRule {
    pub id: String,
    pub category: CategoryPath,
    /// Node kind or tag must equal one of these (case-insensitive).
    #[serde(default)]
    pub kinds: Vec<String>,
    /// Some word of the node's name must start with one of these.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Node shape must be one of these.
    #[serde(default)]
    pub shapes: SmallVec4<NodeShape>,
    /// Normalized `display` must be one of these.
    #[serde(default)]
    pub displays: SmallVec4<String>,
    /// Normalized flow direction must be one of these.
    #[serde(default)]
    pub directions: SmallVec4<String>,
}

impl ClassificationRule {
    pub fn new(id: impl Into<String>, category: CategoryPath) -> Self {
        Self {
            id: id.into(),
            category,
            kinds: Vec::new(),
            keywords: Vec::new(),
            shapes: SmallVec4::new(),
            displays: SmallVec4::new(),
            directions: SmallVec4::new(),
        }
    }

    pub fn kinds(mut self, kinds: &[&str]) -> Self {
        self.kinds = kinds.iter().map(|k| k.to_ascii_lowercase()).collect();
        self
    }

    pub fn keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_lowercase()).collect();
        self
    }

    pub fn shapes(mut self, shapes: &[NodeShape]) -> Self {
        self.shapes = shapes.iter().copied().collect();
        self
    }

    pub fn displays(mut self, displays: &[&str]) -> Self {
        self.displays = displays.iter().map(|d| d.to_string()).collect();
        self
    }

    pub fn directions(mut self, directions: &[&str]) -> Self {
        self.directions = directions.iter().map(|d| d.to_string()).collect();
        self
    }
}

/// Facts about a node that rules test against, computed once per node.
#[derive(Debug, Clone)]
pub struct NodeFacts {
    pub kind: String,
    /// Name words, lowercased, joined by single spaces.
    pub words: String,
    pub shape: NodeShape,
    pub display: Option<String>,
    pub direction: Option<String>,
}

impl NodeFacts {
    pub fn from_node<N: StyledNode + ?Sized>(node: &N, shape: NodeShape) -> Self {
        let keyword = |kind| match node.property_value(kind) {
            Some(PropertyValue::Keyword(k)) => Some(k),
            _ => None,
        };
        Self {
            kind: node.kind().to_ascii_lowercase(),
            words: normalize_words(&node.search_text()),
            shape,
            display: keyword(PropertyKind::Display),
            direction: keyword(PropertyKind::FlexDirection),
        }
    }
}

/// Split free text into lowercase words on punctuation, whitespace, and
/// camelCase boundaries: `PrimaryButton/btn-lg` → `primary button btn lg`.
pub fn normalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if c.is_alphanumeric() {
            let camel_break = c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase());
            if camel_break && !out.ends_with(' ') && !out.is_empty() {
                out.push(' ');
            }
            out.extend(c.to_lowercase());
        } else if !out.is_empty() && !out.ends_with(' ') {
            out.push(' ');
        }
        prev = Some(c);
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

/// A rule with its keyword automaton built.
pub struct CompiledRule {
    rule: ClassificationRule,
    keywords: Option<AhoCorasick>,
}

impl CompiledRule {
    pub fn compile(rule: ClassificationRule) -> Self {
        let keywords = if rule.keywords.is_empty() {
            None
        } else {
            // Plain literal keywords never exceed automaton limits.
            AhoCorasick::new(&rule.keywords).ok()
        };
        Self { rule, keywords }
    }

    pub fn rule(&self) -> &ClassificationRule {
        &self.rule
    }

    /// True when every non-empty condition holds for `facts`.
    pub fn matches(&self, facts: &NodeFacts) -> bool {
        let rule = &self.rule;
        if !rule.kinds.is_empty() && !rule.kinds.iter().any(|k| *k == facts.kind) {
            return false;
        }
        if !rule.shapes.is_empty() && !rule.shapes.contains(&facts.shape) {
            return false;
        }
        if !rule.displays.is_empty()
            && !facts
                .display
                .as_ref()
                .is_some_and(|d| rule.displays.iter().any(|r| r == d))
        {
            return false;
        }
        if !rule.directions.is_empty()
            && !facts
                .direction
                .as_ref()
                .is_some_and(|d| rule.directions.iter().any(|r| r == d))
        {
            return false;
        }
        if !rule.keywords.is_empty() && !self.keyword_hit(&facts.words) {
            return false;
        }
        true
    }

    /// A keyword hits when it starts at a word boundary.
    fn keyword_hit(&self, words: &str) -> bool {
        let Some(automaton) = &self.keywords else {
            return false;
        };
        let bytes = words.as_bytes();
        automaton
            .find_overlapping_iter(words)
            .any(|m| m.start() == 0 || bytes[m.start() - 1] == b' ')
    }
}

/// An ordered, compiled rule list.
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<ClassificationRule>) -> Self {
        Self {
            rules: rules.into_iter().map(CompiledRule::compile).collect(),
        }
    }

    /// First rule whose conditions hold.
    pub fn first_match(&self, facts: &NodeFacts) -> Option<&ClassificationRule> {
        self.rules
            .iter()
            .find(|r| r.matches(facts))
            .map(CompiledRule::rule)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

const GROUPS: &[NodeShape] = &[NodeShape::Molecule, NodeShape::Organism];

/// Rules for design-tool nodes (kinds such as FRAME, TEXT, VECTOR).
pub fn default_design_rules() -> Vec<ClassificationRule> {
    use CategoryPath::*;
    vec![
        ClassificationRule::new("design-text", AtomsTypography).kinds(&["text"]),
        ClassificationRule::new("design-line", AtomsDividers).kinds(&["line"]),
        ClassificationRule::new("design-vector", AtomsIcons).kinds(&[
            "vector",
            "boolean_operation",
            "star",
            "ellipse",
            "polygon",
            "regular_polygon",
        ]),
        ClassificationRule::new("design-header", OrganismsHeaders)
            .keywords(&["header", "top bar", "topbar", "app bar", "appbar", "masthead"]),
        ClassificationRule::new("design-footer", OrganismsFooters).keywords(&["footer"]),
        ClassificationRule::new("design-navigation", OrganismsNavigation).keywords(&[
            "navigation",
            "navbar",
            "nav",
            "tab bar",
            "tabbar",
            "breadcrumb",
        ]),
        ClassificationRule::new("design-sidebar", OrganismsSidebars)
            .keywords(&["sidebar", "side bar", "drawer"]),
        ClassificationRule::new("design-modal", OrganismsModals)
            .keywords(&["modal", "dialog", "popup", "popover", "overlay", "sheet"]),
        ClassificationRule::new("design-table", OrganismsTables)
            .keywords(&["table", "data grid", "datagrid"]),
        ClassificationRule::new("design-form", OrganismsForms)
            .keywords(&["form", "signup", "sign up", "login", "log in", "checkout"])
            .shapes(GROUPS),
        ClassificationRule::new("design-section", OrganismsSections)
            .keywords(&["section", "hero", "banner", "page"]),
        ClassificationRule::new("design-button", AtomsButtons)
            .keywords(&["button", "btn", "cta"]),
        ClassificationRule::new("design-input", AtomsInputs).keywords(&[
            "input",
            "text field",
            "textfield",
            "textarea",
            "checkbox",
            "radio",
            "toggle",
            "switch",
            "select",
            "dropdown",
        ]),
        ClassificationRule::new("design-link", AtomsLinks).keywords(&["link", "anchor"]),
        ClassificationRule::new("design-icon", AtomsIcons).keywords(&["icon", "glyph"]),
        ClassificationRule::new("design-image", AtomsImages).keywords(&[
            "image",
            "img",
            "photo",
            "picture",
            "avatar",
            "logo",
            "thumbnail",
            "illustration",
        ]),
        ClassificationRule::new("design-badge", AtomsBadges)
            .keywords(&["badge", "chip", "tag", "pill"]),
        ClassificationRule::new("design-divider", AtomsDividers)
            .keywords(&["divider", "separator", "rule"]),
        ClassificationRule::new("design-card", MoleculesCards).keywords(&["card", "tile"]),
        ClassificationRule::new("design-list-item", MoleculesListItems)
            .keywords(&["list item", "listitem", "row", "item"]),
        ClassificationRule::new("design-menu", MoleculesMenus).keywords(&["menu", "list"]),
        ClassificationRule::new("design-search", MoleculesSearch).keywords(&["search"]),
        ClassificationRule::new("design-form-field", MoleculesFormFields)
            .keywords(&["field", "form group", "formgroup"]),
        ClassificationRule::new("design-media", MoleculesMedia)
            .keywords(&["media", "figure", "gallery", "carousel"]),
        ClassificationRule::new("design-tabs", MoleculesTabs).keywords(&["tabs", "tab"]),
        ClassificationRule::new("design-container", LayoutContainers)
            .keywords(&["container", "wrapper", "content"]),
        ClassificationRule::new("design-spacer", LayoutSpacers).keywords(&["spacer", "gutter"]),
        ClassificationRule::new("design-grid", LayoutGrid)
            .displays(&["grid"])
            .shapes(GROUPS),
        ClassificationRule::new("design-grid-name", LayoutGrid)
            .keywords(&["grid", "columns"])
            .shapes(GROUPS),
        ClassificationRule::new("design-stack", LayoutStack)
            .displays(&["flex"])
            .directions(&["column"])
            .shapes(GROUPS),
        ClassificationRule::new("design-flex", LayoutFlexbox)
            .displays(&["flex"])
            .shapes(GROUPS),
        // Layout containers too small to count as a group.
        ClassificationRule::new("design-layout-other", LayoutOther).displays(&["flex", "grid"]),
    ]
}

/// Rules for rendered DOM elements (tags, classes, roles).
pub fn default_implementation_rules() -> Vec<ClassificationRule> {
    use CategoryPath::*;
    vec![
        ClassificationRule::new("impl-header-tag", OrganismsHeaders).kinds(&["header"]),
        ClassificationRule::new("impl-footer-tag", OrganismsFooters).kinds(&["footer"]),
        ClassificationRule::new("impl-nav-tag", OrganismsNavigation).kinds(&["nav"]),
        ClassificationRule::new("impl-table-tag", OrganismsTables).kinds(&["table"]),
        ClassificationRule::new("impl-form-tag", OrganismsForms).kinds(&["form"]),
        ClassificationRule::new("impl-aside-tag", OrganismsSidebars).kinds(&["aside"]),
        ClassificationRule::new("impl-dialog-tag", OrganismsModals).kinds(&["dialog"]),
        ClassificationRule::new("impl-button-tag", AtomsButtons).kinds(&["button"]),
        ClassificationRule::new("impl-input-tag", AtomsInputs)
            .kinds(&["input", "select", "textarea"]),
        ClassificationRule::new("impl-link-tag", AtomsLinks).kinds(&["a"]),
        ClassificationRule::new("impl-icon-tag", AtomsIcons).kinds(&["svg", "i"]),
        ClassificationRule::new("impl-image-tag", AtomsImages)
            .kinds(&["img", "picture", "video", "canvas"]),
        ClassificationRule::new("impl-divider-tag", AtomsDividers).kinds(&["hr"]),
        ClassificationRule::new("impl-text-tag", AtomsTypography).kinds(&[
            "h1", "h2", "h3", "h4", "h5", "h6", "p", "span", "label", "strong", "em", "small",
            "blockquote",
        ]),
        ClassificationRule::new("impl-header-name", OrganismsHeaders)
            .keywords(&["header", "banner", "topbar", "top bar", "app bar", "masthead"]),
        ClassificationRule::new("impl-footer-name", OrganismsFooters)
            .keywords(&["footer", "contentinfo"]),
        ClassificationRule::new("impl-nav-name", OrganismsNavigation)
            .keywords(&["navigation", "navbar", "nav", "breadcrumb"]),
        ClassificationRule::new("impl-sidebar-name", OrganismsSidebars)
            .keywords(&["sidebar", "drawer", "complementary"]),
        ClassificationRule::new("impl-modal-name", OrganismsModals)
            .keywords(&["modal", "dialog", "popup", "popover", "overlay"]),
        ClassificationRule::new("impl-table-name", OrganismsTables)
            .keywords(&["table", "datagrid", "data grid"]),
        ClassificationRule::new("impl-section-tag", OrganismsSections)
            .kinds(&["section", "main", "article"]),
        ClassificationRule::new("impl-button-name", AtomsButtons)
            .keywords(&["btn", "button", "cta"]),
        ClassificationRule::new("impl-badge-name", AtomsBadges)
            .keywords(&["badge", "chip", "tag", "pill"]),
        ClassificationRule::new("impl-icon-name", AtomsIcons).keywords(&["icon", "glyph"]),
        ClassificationRule::new("impl-image-name", AtomsImages)
            .keywords(&["avatar", "logo", "thumbnail", "image", "img"]),
        ClassificationRule::new("impl-card-name", MoleculesCards).keywords(&["card", "tile"]),
        ClassificationRule::new("impl-list-item", MoleculesListItems).kinds(&["li"]),
        ClassificationRule::new("impl-list-item-name", MoleculesListItems)
            .keywords(&["list item", "listitem", "item", "row"]),
        ClassificationRule::new("impl-menu", MoleculesMenus)
            .keywords(&["menu", "dropdown", "menubar"]),
        ClassificationRule::new("impl-search", MoleculesSearch).keywords(&["search"]),
        ClassificationRule::new("impl-form-field", MoleculesFormFields)
            .keywords(&["field", "form group", "formgroup", "form control"]),
        ClassificationRule::new("impl-media", MoleculesMedia)
            .keywords(&["media", "figure", "gallery", "carousel"])
            .shapes(GROUPS),
        ClassificationRule::new("impl-figure-tag", MoleculesMedia).kinds(&["figure"]),
        ClassificationRule::new("impl-tabs", MoleculesTabs).keywords(&["tabs", "tablist", "tab"]),
        ClassificationRule::new("impl-container", LayoutContainers)
            .keywords(&["container", "wrapper", "content"]),
        ClassificationRule::new("impl-spacer", LayoutSpacers).keywords(&["spacer", "gutter"]),
        ClassificationRule::new("impl-list-tag", LayoutStack)
            .kinds(&["ul", "ol"])
            .shapes(GROUPS),
        ClassificationRule::new("impl-grid", LayoutGrid)
            .displays(&["grid"])
            .shapes(GROUPS),
        ClassificationRule::new("impl-stack", LayoutStack)
            .displays(&["flex"])
            .directions(&["column", "column-reverse"])
            .shapes(GROUPS),
        ClassificationRule::new("impl-flex", LayoutFlexbox)
            .displays(&["flex"])
            .shapes(GROUPS),
        ClassificationRule::new("impl-layout-other", LayoutOther).displays(&["flex", "grid"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_words_splits_camel_and_punctuation() {
        assert_eq!(normalize_words("PrimaryButton/btn-lg"), "primary button btn lg");
        assert_eq!(normalize_words("  Nav__Item  "), "nav item");
        assert_eq!(normalize_words(""), "");
    }

    #[test]
    fn test_keyword_requires_word_start() {
        let rule = CompiledRule::compile(
            ClassificationRule::new("t", CategoryPath::OrganismsForms).keywords(&["form"]),
        );
        let facts = |words: &str| NodeFacts {
            kind: "frame".into(),
            words: words.into(),
            shape: NodeShape::Molecule,
            display: None,
            direction: None,
        };
        assert!(rule.matches(&facts("signup form")));
        assert!(!rule.matches(&facts("platform information")));
    }
}
