//! Deviation types.

use std::fmt;
use std::str::FromStr;

use parity_core::types::{PropertyGroup, PropertyKind};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Deviation severity. Every level has a scoring weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    #[serde(alias = "high")]
    Major,
    Medium,
    #[serde(alias = "low")]
    Minor,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Self::Critical, Self::Major, Self::Medium, Self::Minor];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Major => "major",
            Self::Medium => "medium",
            Self::Minor => "minor",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "major" | "high" => Ok(Self::Major),
            "medium" => Ok(Self::Medium),
            "minor" | "low" => Ok(Self::Minor),
            other => Err(format!("unknown severity `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviationCategory {
    Existence,
    Color,
    Typography,
    Spacing,
    Layout,
    Radius,
    Shadow,
}

impl DeviationCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Existence => "existence",
            Self::Color => "color",
            Self::Typography => "typography",
            Self::Spacing => "spacing",
            Self::Layout => "layout",
            Self::Radius => "radius",
            Self::Shadow => "shadow",
        }
    }
}

impl From<PropertyGroup> for DeviationCategory {
    fn from(group: PropertyGroup) -> Self {
        match group {
            PropertyGroup::Color => Self::Color,
            PropertyGroup::Typography => Self::Typography,
            PropertyGroup::Spacing => Self::Spacing,
            PropertyGroup::Layout => Self::Layout,
            PropertyGroup::Radius => Self::Radius,
            PropertyGroup::Shadow => Self::Shadow,
        }
    }
}

impl fmt::Display for DeviationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a deviation is about: a whole node, or one style property.
///
/// Serialized as a plain string: `existence` or the CSS property name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviationProperty {
    Existence,
    Style(PropertyKind),
}

impl DeviationProperty {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Existence => "existence",
            Self::Style(kind) => kind.css_name(),
        }
    }

    pub fn category(&self) -> DeviationCategory {
        match self {
            Self::Existence => DeviationCategory::Existence,
            Self::Style(kind) => kind.group().into(),
        }
    }
}

impl fmt::Display for DeviationProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeviationProperty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "existence" {
            return Ok(Self::Existence);
        }
        PropertyKind::ALL
            .iter()
            .find(|k| k.css_name() == s)
            .map(|k| Self::Style(*k))
            .ok_or_else(|| format!("unknown deviation property `{s}`"))
    }
}

impl Serialize for DeviationProperty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for DeviationProperty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One property-level mismatch between a design node and its counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deviation {
    pub property: DeviationProperty,
    pub category: DeviationCategory,
    pub expected_value: String,
    pub actual_value: String,
    pub severity: Severity,
    /// Property-specific units: px, color percent, weight steps.
    pub distance: f64,
    /// How directly the two values were comparable, 0..=1.
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Deviation {
    pub fn new(
        property: DeviationProperty,
        expected_value: impl Into<String>,
        actual_value: impl Into<String>,
        severity: Severity,
        distance: f64,
        confidence: f64,
    ) -> Self {
        Self {
            property,
            category: property.category(),
            expected_value: expected_value.into(),
            actual_value: actual_value.into(),
            severity,
            distance,
            confidence: confidence.clamp(0.0, 1.0),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
