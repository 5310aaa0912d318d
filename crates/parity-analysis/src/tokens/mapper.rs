//! Nearest-token lookup against a design-system registry.

use parity_core::types::css::parse_box_shadow;
use parity_core::types::length::{parse_font_weight, parse_px, DEFAULT_REM_PX};
use parity_core::types::properties::primary_family;
use parity_core::types::Rgba;

use super::registry::TokenRegistry;
use super::types::{TokenCategory, TokenMatch};

/// Distance added when typography families differ.
const FAMILY_MISMATCH_DISTANCE: f64 = 100.0;
/// Distance added per shadow layer present on only one side.
const SHADOW_LAYER_DISTANCE: f64 = 100.0;

/// Find the registry token nearest to `raw_value`.
///
/// Returns `None` when no registry is configured, the category is empty, or
/// no registry value is comparable with `raw_value`. Ties go to the token
/// registered first.
pub fn map_to_nearest(
    registry: Option<&TokenRegistry>,
    category: TokenCategory,
    raw_value: &str,
) -> Option<TokenMatch> {
    map_to_nearest_with_rem(registry, category, raw_value, DEFAULT_REM_PX)
}

/// [`map_to_nearest`] with an explicit `rem`/`em` base for registry lengths.
pub fn map_to_nearest_with_rem(
    registry: Option<&TokenRegistry>,
    category: TokenCategory,
    raw_value: &str,
    rem_base: f64,
) -> Option<TokenMatch> {
    let registry = registry?;
    let mut best: Option<TokenMatch> = None;
    for token in registry.tokens(category) {
        let Some(distance) = distance(category, raw_value, &token.value, rem_base) else {
            continue;
        };
        // Strict `<` keeps the earliest registration on ties.
        if best.as_ref().map_or(true, |b| distance < b.distance) {
            best = Some(TokenMatch {
                token_name: token.name.clone(),
                token_value: token.value.clone(),
                distance,
            });
        }
        if distance == 0.0 {
            break;
        }
    }
    best
}

/// Category-specific distance, `None` when the values are not comparable.
pub fn distance(category: TokenCategory, a: &str, b: &str, rem_base: f64) -> Option<f64> {
    if a.trim().eq_ignore_ascii_case(b.trim()) {
        return Some(0.0);
    }
    match category {
        TokenCategory::Spacing | TokenCategory::Radius => {
            Some((length(a, rem_base)? - length(b, rem_base)?).abs())
        }
        TokenCategory::Color => {
            let (a, b) = (Rgba::parse_css(a)?, Rgba::parse_css(b)?);
            Some(a.distance_percent(&b))
        }
        TokenCategory::Typography => typography_distance(a, b, rem_base),
        TokenCategory::Shadow => shadow_distance(a, b),
    }
}

fn length(value: &str, rem_base: f64) -> Option<f64> {
    parse_px(value, rem_base).ok().flatten()
}

/// Facets of a typography value: either a `family/size/weight/lh`
/// signature or a bare font size.
#[derive(Debug, Default)]
struct TypeFacets {
    family: Option<String>,
    size: Option<f64>,
    weight: Option<u16>,
}

fn type_facets(value: &str, rem_base: f64) -> Option<TypeFacets> {
    let parts: Vec<&str> = value.split('/').collect();
    if parts.len() == 4 {
        return Some(TypeFacets {
            family: primary_family(parts[0]),
            size: length(parts[1], rem_base),
            weight: parse_font_weight(parts[2]).ok(),
        });
    }
    length(value, rem_base).map(|size| TypeFacets {
        size: Some(size),
        ..TypeFacets::default()
    })
}

fn typography_distance(a: &str, b: &str, rem_base: f64) -> Option<f64> {
    let (a, b) = (type_facets(a, rem_base)?, type_facets(b, rem_base)?);
    let mut compared = false;
    let mut total = 0.0;
    if let (Some(x), Some(y)) = (a.size, b.size) {
        total += (x - y).abs();
        compared = true;
    }
    if let (Some(x), Some(y)) = (a.weight, b.weight) {
        total += (f64::from(x) - f64::from(y)).abs() / 100.0;
        compared = true;
    }
    if let (Some(x), Some(y)) = (&a.family, &b.family) {
        if x != y {
            total += FAMILY_MISMATCH_DISTANCE;
        }
        compared = true;
    }
    compared.then_some(total)
}

fn shadow_distance(a: &str, b: &str) -> Option<f64> {
    let a = parse_box_shadow(a).ok()?;
    let b = parse_box_shadow(b).ok()?;
    let mut total = a.len().abs_diff(b.len()) as f64 * SHADOW_LAYER_DISTANCE;
    for (x, y) in a.iter().zip(&b) {
        total += (x.offset_x - y.offset_x).abs()
            + (x.offset_y - y.offset_y).abs()
            + (x.blur - y.blur).abs()
            + (x.spread - y.spread).abs();
        if x.color != y.color || x.inset != y.inset {
            total += 1.0;
        }
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typography_signature_vs_bare_size() {
        let d = distance(TokenCategory::Typography, "inter/16px/400/24px", "18px", 16.0);
        assert_eq!(d, Some(2.0));
    }

    #[test]
    fn test_incomparable_values() {
        assert_eq!(distance(TokenCategory::Spacing, "16px", "large", 16.0), None);
        assert_eq!(distance(TokenCategory::Color, "#fff", "not-a-color", 16.0), None);
    }
}
