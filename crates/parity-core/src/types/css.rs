//! Computed-style decoding: flat CSS declarations into `StyleProperties`.
//!
//! Implementation trees arrive with the browser's computed style map
//! (`{"background-color": "rgb(0, 0, 0)", "padding-top": "8px", ...}`).
//! Unknown properties are ignored; recognized properties with unparseable
//! values are errors.

use std::collections::BTreeMap;

use super::color::Rgba;
use super::length::{parse_font_weight, parse_px, parse_radius_px, DEFAULT_REM_PX};
use super::properties::{Edges, LayoutInfo, Shadow, Spacing, StyleProperties, TextStyle};

/// Decode a computed style map. `rem_base` is the pixel size of `1rem`.
pub fn style_from_css(
    declarations: &BTreeMap<String, String>,
    rem_base: f64,
) -> Result<StyleProperties, String> {
    let mut style = StyleProperties::default();
    let mut text = TextStyle::default();
    let mut layout = LayoutInfo::default();
    let mut spacing = Spacing::default();

    for (name, value) in declarations {
        let value = value.trim();
        let px = |v: &str| parse_px(v, rem_base).map_err(|e| format!("{name}: {e}"));
        match name.trim().to_ascii_lowercase().as_str() {
            "color" => style.fill = visible_color(value).map_err(|e| format!("{name}: {e}"))?,
            "background-color" => {
                style.background = visible_color(value).map_err(|e| format!("{name}: {e}"))?
            }
            "font-family" => {
                if !value.is_empty() {
                    text.font_family = Some(value.to_string());
                }
            }
            "font-size" => text.font_size = px(value)?,
            "font-weight" => {
                text.font_weight =
                    Some(parse_font_weight(value).map_err(|e| format!("{name}: {e}"))?)
            }
            "line-height" => text.line_height = px(value)?,
            "display" => layout.display = Some(value.to_string()),
            "flex-direction" => layout.direction = Some(value.to_string()),
            "position" => layout.position = Some(value.to_string()),
            "padding" => {
                spacing.padding = expand_box(value, rem_base).map_err(|e| format!("{name}: {e}"))?
            }
            "padding-top" => spacing.padding.top = px(value)?,
            "padding-right" => spacing.padding.right = px(value)?,
            "padding-bottom" => spacing.padding.bottom = px(value)?,
            "padding-left" => spacing.padding.left = px(value)?,
            "margin" => {
                spacing.margin = expand_box(value, rem_base).map_err(|e| format!("{name}: {e}"))?
            }
            "margin-top" => spacing.margin.top = px(value)?,
            "margin-right" => spacing.margin.right = px(value)?,
            "margin-bottom" => spacing.margin.bottom = px(value)?,
            "margin-left" => spacing.margin.left = px(value)?,
            "gap" | "row-gap" | "column-gap" => {
                if spacing.gap.is_none() {
                    spacing.gap = px(first_component(value))?;
                }
            }
            "border-radius" => {
                style.corner_radius = parse_radius_px(first_component(value), rem_base)
                    .map_err(|e| format!("{name}: {e}"))?
            }
            "box-shadow" => {
                style.shadows = parse_box_shadow(value).map_err(|e| format!("{name}: {e}"))?
            }
            _ => {}
        }
    }

    if text != TextStyle::default() {
        style.typography = Some(text);
    }
    if layout != LayoutInfo::default() {
        style.layout = Some(layout);
    }
    if spacing != Spacing::default() {
        style.spacing = Some(spacing);
    }
    Ok(style)
}

/// Parse a color, treating fully transparent values as absent.
fn visible_color(value: &str) -> Result<Option<Rgba>, String> {
    let color: Rgba = value.parse()?;
    Ok((color.a > 0).then_some(color))
}

fn first_component(value: &str) -> &str {
    value.split_whitespace().next().unwrap_or("")
}

/// Expand a 1-4 value box shorthand (`8px 16px`) into edges.
fn expand_box(value: &str, rem_base: f64) -> Result<Edges, String> {
    let parts = value
        .split_whitespace()
        .map(|p| parse_px(p, rem_base))
        .collect::<Result<Vec<_>, _>>()?;
    let (top, right, bottom, left) = match parts.as_slice() {
        [a] => (*a, *a, *a, *a),
        [a, b] => (*a, *b, *a, *b),
        [a, b, c] => (*a, *b, *c, *b),
        [a, b, c, d] => (*a, *b, *c, *d),
        _ => return Err(format!("expected 1-4 lengths, got `{value}`")),
    };
    Ok(Edges {
        top,
        right,
        bottom,
        left,
    })
}

/// Split on `sep` outside of parentheses.
fn split_top_level(value: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in value.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c == sep && depth == 0 => {
                parts.push(&value[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&value[start..]);
    parts
}

/// Parse a computed `box-shadow` list.
pub fn parse_box_shadow(value: &str) -> Result<Vec<Shadow>, String> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        return Ok(Vec::new());
    }

    let mut shadows = Vec::new();
    for layer in split_top_level(value, ',') {
        let mut lengths = Vec::with_capacity(4);
        let mut color = None;
        let mut inset = false;
        for part in split_top_level(layer.trim(), ' ') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if part.eq_ignore_ascii_case("inset") {
                inset = true;
            } else if let Ok(Some(len)) = parse_px(part, DEFAULT_REM_PX) {
                lengths.push(len);
            } else if let Some(c) = Rgba::parse_css(part) {
                color = Some(c);
            } else {
                return Err(format!("unrecognized shadow component `{part}`"));
            }
        }
        if lengths.len() < 2 {
            return Err(format!("shadow `{}` needs at least two offsets", layer.trim()));
        }
        shadows.push(Shadow {
            offset_x: lengths[0],
            offset_y: lengths[1],
            blur: lengths.get(2).copied().unwrap_or(0.0),
            spread: lengths.get(3).copied().unwrap_or(0.0),
            color: color.unwrap_or(Rgba::new(0, 0, 0, 255)),
            inset,
        });
    }
    Ok(shadows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_shadow_with_functional_color() {
        let shadows = parse_box_shadow("rgba(0, 0, 0, 0.25) 0px 4px 8px 0px").unwrap();
        assert_eq!(shadows.len(), 1);
        assert_eq!(shadows[0].offset_y, 4.0);
        assert_eq!(shadows[0].blur, 8.0);
        assert!(shadows[0].color.a > 0 && shadows[0].color.a < 255);
    }

    #[test]
    fn test_padding_shorthand() {
        let edges = expand_box("8px 16px", 16.0).unwrap();
        assert_eq!(edges.top, Some(8.0));
        assert_eq!(edges.left, Some(16.0));
    }

    #[test]
    fn test_percentage_radius_is_skipped() {
        let mut decls = BTreeMap::new();
        decls.insert("border-radius".to_string(), "50%".to_string());
        decls.insert("padding-top".to_string(), "4px".to_string());
        let style = style_from_css(&decls, 16.0).unwrap();
        assert!(style.corner_radius.is_none());
        assert!(style.spacing.is_some());
    }

    #[test]
    fn test_transparent_background_is_absent() {
        let mut decls = BTreeMap::new();
        decls.insert("background-color".to_string(), "rgba(0, 0, 0, 0)".to_string());
        let style = style_from_css(&decls, 16.0).unwrap();
        assert!(style.background.is_none());
    }
}
