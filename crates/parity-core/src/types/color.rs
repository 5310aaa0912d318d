//! 8-bit RGBA color with CSS and design-tool decoding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An sRGB color with 8-bit channels.
///
/// Deserializes from any CSS `<color>` string (hex, `rgb()`, `hsl()`, named)
/// or from a `{r, g, b, a}` object with channels in `0.0..=1.0`, the shape
/// design tools export. Serializes as canonical lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a CSS color string.
    pub fn parse_css(input: &str) -> Option<Self> {
        let parsed: csscolorparser::Color = input.trim().parse().ok()?;
        let [r, g, b, a] = parsed.to_rgba8();
        Some(Self { r, g, b, a })
    }

    /// Build from unit-range float channels, clamping out-of-range input.
    pub fn from_unit(r: f64, g: f64, b: f64, a: f64) -> Self {
        fn channel(v: f64) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
            a: channel(a),
        }
    }

    /// Canonical hex form: `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Channel distance to `other` as a percentage (0-100).
    ///
    /// Euclidean distance in normalized RGB, scaled so black vs. white is
    /// 100. An alpha difference counts on its own: the result is the larger
    /// of the RGB distance and the alpha delta.
    pub fn distance_percent(&self, other: &Rgba) -> f64 {
        let d = |a: u8, b: u8| (f64::from(a) - f64::from(b)) / 255.0;
        let dr = d(self.r, other.r);
        let dg = d(self.g, other.g);
        let db = d(self.b, other.b);
        let rgb = ((dr * dr + dg * dg + db * db) / 3.0).sqrt() * 100.0;
        let alpha = d(self.a, other.a).abs() * 100.0;
        rgb.max(alpha)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_css(s).ok_or_else(|| format!("unrecognized color value `{s}`"))
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RgbaRepr {
    Css(String),
    Channels {
        r: f64,
        g: f64,
        b: f64,
        #[serde(default = "opaque")]
        a: f64,
    },
}

fn opaque() -> f64 {
    1.0
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RgbaRepr::deserialize(deserializer)? {
            RgbaRepr::Css(s) => s.parse().map_err(serde::de::Error::custom),
            RgbaRepr::Channels { r, g, b, a } => Ok(Rgba::from_unit(r, g, b, a)),
        }
    }
}
