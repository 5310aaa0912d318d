//! CSS length and font-weight parsing.
//!
//! Lengths are normalized to CSS pixels. Keywords that carry no fixed
//! length (`auto`, `normal`, `none`) parse to `None`.

use serde::{Deserialize, Deserializer};

/// Pixel size of `1rem`/`1em` when no other base is known.
pub const DEFAULT_REM_PX: f64 = 16.0;

/// Parse a CSS length into pixels.
///
/// `Ok(None)` for keywords without a fixed length; `Err` for anything
/// unrecognized.
pub fn parse_px(input: &str, rem_base: f64) -> Result<Option<f64>, String> {
    let s = input.trim().to_ascii_lowercase();
    if s.is_empty() || matches!(s.as_str(), "auto" | "normal" | "none" | "initial" | "inherit") {
        return Ok(None);
    }

    let (number, scale) = if let Some(n) = s.strip_suffix("px") {
        (n, 1.0)
    } else if let Some(n) = s.strip_suffix("rem") {
        (n, rem_base)
    } else if let Some(n) = s.strip_suffix("em") {
        (n, rem_base)
    } else if let Some(n) = s.strip_suffix("pt") {
        (n, 4.0 / 3.0)
    } else {
        (s.as_str(), 1.0)
    };

    number
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| Some(v * scale))
        .ok_or_else(|| format!("unrecognized length `{input}`"))
}

/// Parse a corner radius into pixels.
///
/// Percentages resolve against the element box, which is not known here, so
/// they parse to `None` like keywords do.
pub fn parse_radius_px(input: &str, rem_base: f64) -> Result<Option<f64>, String> {
    if input.trim().ends_with('%') {
        return Ok(None);
    }
    parse_px(input, rem_base)
}

/// Parse a CSS font weight (`400`, `bold`, `normal`, ...).
pub fn parse_font_weight(input: &str) -> Result<u16, String> {
    let s = input.trim().to_ascii_lowercase();
    match s.as_str() {
        "normal" | "regular" => Ok(400),
        "bold" => Ok(700),
        "thin" => Ok(100),
        "light" => Ok(300),
        "medium" => Ok(500),
        "semibold" | "semi-bold" => Ok(600),
        "extrabold" | "extra-bold" => Ok(800),
        "black" | "heavy" => Ok(900),
        other => other
            .parse::<f64>()
            .ok()
            .filter(|v| (1.0..=1000.0).contains(v))
            .map(|v| v.round() as u16)
            .ok_or_else(|| format!("unrecognized font weight `{input}`")),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Serde helper: an optional length given as a number or a CSS string.
pub fn deserialize_opt_px<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(v)) => Ok(Some(v)),
        Some(NumberOrText::Text(s)) => {
            parse_px(&s, DEFAULT_REM_PX).map_err(serde::de::Error::custom)
        }
    }
}

/// Serde helper: an optional corner radius; percentages decode to `None`.
pub fn deserialize_opt_radius<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(v)) => Ok(Some(v)),
        Some(NumberOrText::Text(s)) => {
            parse_radius_px(&s, DEFAULT_REM_PX).map_err(serde::de::Error::custom)
        }
    }
}

/// Serde helper: a required length given as a number or a CSS string.
pub fn deserialize_px<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(v) => Ok(v),
        NumberOrText::Text(s) => parse_px(&s, DEFAULT_REM_PX)
            .map_err(serde::de::Error::custom)
            .map(|v| v.unwrap_or(0.0)),
    }
}

/// Serde helper: an optional font weight given as a number or keyword.
pub fn deserialize_opt_weight<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u16>, D::Error> {
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(v)) => parse_font_weight(&v.to_string())
            .map(Some)
            .map_err(serde::de::Error::custom),
        Some(NumberOrText::Text(s)) => parse_font_weight(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
