//! Typed style properties shared by both trees.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::color::Rgba;
use super::length::{
    deserialize_opt_px, deserialize_opt_radius, deserialize_opt_weight, deserialize_px,
};

/// Style properties of one node, normalized to CSS pixels and sRGB.
///
/// `fill` is the content color (text color, icon fill); `background` is the
/// surface color behind the content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleProperties {
    #[serde(alias = "color")]
    pub fill: Option<Rgba>,
    #[serde(alias = "backgroundColor")]
    pub background: Option<Rgba>,
    #[serde(alias = "textStyle", alias = "style")]
    pub typography: Option<TextStyle>,
    pub layout: Option<LayoutInfo>,
    pub spacing: Option<Spacing>,
    #[serde(alias = "borderRadius", deserialize_with = "deserialize_opt_radius")]
    pub corner_radius: Option<f64>,
    /// Shadows only; other design-tool effects (blurs) are dropped on decode.
    #[serde(alias = "effects", deserialize_with = "deserialize_shadow_list")]
    pub shadows: Vec<Shadow>,
}

impl StyleProperties {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: Option<String>,
    #[serde(deserialize_with = "deserialize_opt_px")]
    pub font_size: Option<f64>,
    #[serde(deserialize_with = "deserialize_opt_weight")]
    pub font_weight: Option<u16>,
    #[serde(alias = "lineHeightPx", deserialize_with = "deserialize_opt_px")]
    pub line_height: Option<f64>,
}

impl TextStyle {
    /// Primary family from a CSS font stack, unquoted and lowercased.
    pub fn primary_family(&self) -> Option<String> {
        self.font_family.as_deref().and_then(primary_family)
    }

    /// `family/size/weight/line-height` signature used as a typography token value.
    pub fn signature(&self) -> Option<String> {
        let family = self.primary_family()?;
        let fmt_num = |v: Option<f64>| v.map(format_px).unwrap_or_else(|| "-".to_string());
        let weight = self
            .font_weight
            .map(|w| w.to_string())
            .unwrap_or_else(|| "-".to_string());
        Some(format!(
            "{family}/{}/{weight}/{}",
            fmt_num(self.font_size),
            fmt_num(self.line_height)
        ))
    }
}

/// First family of a CSS font stack, unquoted and lowercased.
pub fn primary_family(stack: &str) -> Option<String> {
    stack
        .split(',')
        .next()
        .map(|f| f.trim().trim_matches(|c| c == '"' || c == '\'').trim().to_lowercase())
        .filter(|f| !f.is_empty())
}

/// Layout flow of a node.
///
/// Holds both vocabularies: CSS (`display: flex`, `flex-direction: row`)
/// and design-tool auto-layout (`mode: HORIZONTAL`). The `normalized_*`
/// accessors map both onto CSS keywords. An explicit CSS value wins over
/// the auto-layout mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutInfo {
    /// CSS `display`, kept verbatim (`none` stays `none`).
    pub display: Option<String>,
    /// Design-tool auto-layout mode: `NONE`, `HORIZONTAL`, `VERTICAL`, `GRID`.
    #[serde(alias = "layoutMode")]
    pub mode: Option<String>,
    #[serde(alias = "flexDirection")]
    pub direction: Option<String>,
    #[serde(alias = "layoutPositioning")]
    pub position: Option<String>,
}

impl LayoutInfo {
    pub fn normalized_display(&self) -> Option<String> {
        if let Some(display) = self.display.as_deref() {
            let raw = display.trim().to_ascii_lowercase();
            return Some(match raw.as_str() {
                "inline-flex" => "flex".to_string(),
                "inline-grid" => "grid".to_string(),
                _ => raw,
            });
        }
        let mapped = match self.mode.as_deref()?.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "vertical" => "flex",
            "grid" => "grid",
            // Auto-layout off: children are placed freely, as in normal flow.
            "none" => "block",
            other => return Some(other.to_string()),
        };
        Some(mapped.to_string())
    }

    pub fn normalized_direction(&self) -> Option<String> {
        if let Some(dir) = self.direction.as_deref() {
            return Some(match dir.trim().to_ascii_lowercase().as_str() {
                "horizontal" => "row".to_string(),
                "vertical" => "column".to_string(),
                other => other.to_string(),
            });
        }
        match self.mode.as_deref()?.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Some("row".to_string()),
            "vertical" => Some("column".to_string()),
            _ => None,
        }
    }

    pub fn normalized_position(&self) -> Option<String> {
        let raw = self.position.as_deref()?.trim().to_ascii_lowercase();
        Some(match raw.as_str() {
            "auto" => "static".to_string(),
            other => other.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Edges {
    #[serde(deserialize_with = "deserialize_opt_px")]
    pub top: Option<f64>,
    #[serde(deserialize_with = "deserialize_opt_px")]
    pub right: Option<f64>,
    #[serde(deserialize_with = "deserialize_opt_px")]
    pub bottom: Option<f64>,
    #[serde(deserialize_with = "deserialize_opt_px")]
    pub left: Option<f64>,
}

impl Edges {
    pub fn values(&self) -> [Option<f64>; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Spacing {
    pub padding: Edges,
    pub margin: Edges,
    #[serde(alias = "itemSpacing", deserialize_with = "deserialize_opt_px")]
    pub gap: Option<f64>,
}

/// One shadow layer.
///
/// Decodes from the normalized shape (`offsetX`, `blur`, ...) and from a
/// design-tool effect (`type`, nested `offset: {x, y}`, `radius`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawEffect")]
pub struct Shadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: Rgba,
    pub inset: bool,
}

#[derive(Deserialize)]
struct RawOffset {
    #[serde(default, deserialize_with = "deserialize_px")]
    x: f64,
    #[serde(default, deserialize_with = "deserialize_px")]
    y: f64,
}

/// Any entry of a shadow or effect list, before filtering.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEffect {
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    visible: Option<bool>,
    #[serde(default)]
    offset: Option<RawOffset>,
    #[serde(default, alias = "x", deserialize_with = "deserialize_opt_px")]
    offset_x: Option<f64>,
    #[serde(default, alias = "y", deserialize_with = "deserialize_opt_px")]
    offset_y: Option<f64>,
    #[serde(default, alias = "radius", deserialize_with = "deserialize_opt_px")]
    blur: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_px")]
    spread: Option<f64>,
    #[serde(default)]
    color: Option<Rgba>,
    #[serde(default)]
    inset: bool,
}

impl RawEffect {
    /// `None` for hidden effects and effects that are not shadows.
    fn into_shadow(self) -> Option<Shadow> {
        let inset = match self.kind.as_deref().map(str::to_ascii_uppercase).as_deref() {
            None | Some("DROP_SHADOW") => self.inset,
            Some("INNER_SHADOW") => true,
            Some(_) => return None,
        };
        if self.visible == Some(false) {
            return None;
        }
        let (offset_x, offset_y) = match self.offset {
            Some(offset) => (offset.x, offset.y),
            None => (self.offset_x.unwrap_or(0.0), self.offset_y.unwrap_or(0.0)),
        };
        Some(Shadow {
            offset_x,
            offset_y,
            blur: self.blur.unwrap_or(0.0),
            spread: self.spread.unwrap_or(0.0),
            color: self.color.unwrap_or(Rgba::new(0, 0, 0, 255)),
            inset,
        })
    }
}

impl TryFrom<RawEffect> for Shadow {
    type Error = String;

    fn try_from(raw: RawEffect) -> Result<Self, Self::Error> {
        let kind = raw.kind.clone().unwrap_or_default();
        raw.into_shadow()
            .ok_or_else(|| format!("effect `{kind}` is not a visible shadow"))
    }
}

fn deserialize_shadow_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Shadow>, D::Error> {
    let effects = Option::<Vec<RawEffect>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(effects.into_iter().filter_map(RawEffect::into_shadow).collect())
}

impl Shadow {
    /// Canonical `[inset ]x y blur spread color` signature.
    pub fn signature(&self) -> String {
        format!(
            "{}{} {} {} {} {}",
            if self.inset { "inset " } else { "" },
            format_px(self.offset_x),
            format_px(self.offset_y),
            format_px(self.blur),
            format_px(self.spread),
            self.color.to_hex()
        )
    }
}

/// Signature of a whole shadow list, `none` when empty.
pub fn shadow_list_signature(shadows: &[Shadow]) -> String {
    if shadows.is_empty() {
        "none".to_string()
    } else {
        shadows
            .iter()
            .map(Shadow::signature)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Format a pixel value without trailing zeros: `16px`, `1.5px`.
pub fn format_px(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}px", rounded as i64)
    } else {
        format!("{rounded}px")
    }
}

/// Axis-aligned bounding box in page/canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Intersection-over-union with `other`, 0.0 when either box is empty.
    pub fn iou(&self, other: &Bounds) -> f64 {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x + self.width).min(other.x + other.width);
        let y2 = (self.y + self.height).min(other.y + other.height);
        let intersection = (x2 - x1).max(0.0) * (y2 - y1).max(0.0);
        let union = self.area() + other.area() - intersection;
        if union <= 0.0 {
            0.0
        } else {
            intersection / union
        }
    }
}

/// Coarse property family, used to group deviations and tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyGroup {
    Color,
    Typography,
    Spacing,
    Layout,
    Radius,
    Shadow,
}

impl PropertyGroup {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Typography => "typography",
            Self::Spacing => "spacing",
            Self::Layout => "layout",
            Self::Radius => "radius",
            Self::Shadow => "shadow",
        }
    }
}

/// Every property the engine can read from a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyKind {
    Fill,
    Background,
    FontFamily,
    FontSize,
    FontWeight,
    LineHeight,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    Gap,
    Display,
    FlexDirection,
    Position,
    CornerRadius,
    Shadow,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 20] = [
        Self::Fill,
        Self::Background,
        Self::FontFamily,
        Self::FontSize,
        Self::FontWeight,
        Self::LineHeight,
        Self::PaddingTop,
        Self::PaddingRight,
        Self::PaddingBottom,
        Self::PaddingLeft,
        Self::MarginTop,
        Self::MarginRight,
        Self::MarginBottom,
        Self::MarginLeft,
        Self::Gap,
        Self::Display,
        Self::FlexDirection,
        Self::Position,
        Self::CornerRadius,
        Self::Shadow,
    ];

    pub const PADDING: [PropertyKind; 4] = [
        Self::PaddingTop,
        Self::PaddingRight,
        Self::PaddingBottom,
        Self::PaddingLeft,
    ];

    pub const MARGIN: [PropertyKind; 4] = [
        Self::MarginTop,
        Self::MarginRight,
        Self::MarginBottom,
        Self::MarginLeft,
    ];

    /// CSS-style property name.
    pub fn css_name(&self) -> &'static str {
        match self {
            Self::Fill => "color",
            Self::Background => "background-color",
            Self::FontFamily => "font-family",
            Self::FontSize => "font-size",
            Self::FontWeight => "font-weight",
            Self::LineHeight => "line-height",
            Self::PaddingTop => "padding-top",
            Self::PaddingRight => "padding-right",
            Self::PaddingBottom => "padding-bottom",
            Self::PaddingLeft => "padding-left",
            Self::MarginTop => "margin-top",
            Self::MarginRight => "margin-right",
            Self::MarginBottom => "margin-bottom",
            Self::MarginLeft => "margin-left",
            Self::Gap => "gap",
            Self::Display => "display",
            Self::FlexDirection => "flex-direction",
            Self::Position => "position",
            Self::CornerRadius => "border-radius",
            Self::Shadow => "box-shadow",
        }
    }

    pub fn group(&self) -> PropertyGroup {
        match self {
            Self::Fill | Self::Background => PropertyGroup::Color,
            Self::FontFamily | Self::FontSize | Self::FontWeight | Self::LineHeight => {
                PropertyGroup::Typography
            }
            Self::PaddingTop
            | Self::PaddingRight
            | Self::PaddingBottom
            | Self::PaddingLeft
            | Self::MarginTop
            | Self::MarginRight
            | Self::MarginBottom
            | Self::MarginLeft
            | Self::Gap => PropertyGroup::Spacing,
            Self::Display | Self::FlexDirection | Self::Position => PropertyGroup::Layout,
            Self::CornerRadius => PropertyGroup::Radius,
            Self::Shadow => PropertyGroup::Shadow,
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// A single property value read from a node.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Color(Rgba),
    Length(f64),
    Weight(u16),
    Keyword(String),
    Shadows(Vec<Shadow>),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(c) => write!(f, "{c}"),
            Self::Length(v) => f.write_str(&format_px(*v)),
            Self::Weight(w) => write!(f, "{w}"),
            Self::Keyword(k) => f.write_str(k),
            Self::Shadows(s) => f.write_str(&shadow_list_signature(s)),
        }
    }
}
