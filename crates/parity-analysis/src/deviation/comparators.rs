//! Property comparators, one per deviation category.
//!
//! A comparator only looks at properties present on both nodes; absence on
//! either side is not a deviation.

use parity_core::config::DeviationConfig;
use parity_core::types::length::DEFAULT_REM_PX;
use parity_core::types::{PropertyKind, PropertyValue, StyledNode};

use super::types::{Deviation, DeviationCategory, DeviationProperty, Severity};
use crate::tokens::mapper;
use crate::tokens::TokenCategory;

const NUMERIC_CONFIDENCE: f64 = 0.95;
const COLOR_CONFIDENCE: f64 = 0.9;
const FAMILY_CONFIDENCE: f64 = 0.85;
const LAYOUT_CONFIDENCE: f64 = 0.8;
const SHADOW_CONFIDENCE: f64 = 0.75;

/// Compares one family of properties on a matched pair.
pub trait PropertyComparator: Send + Sync {
    fn category(&self) -> DeviationCategory;

    /// Properties this comparator reads.
    fn properties(&self) -> &'static [PropertyKind];

    fn compare(
        &self,
        design: &dyn StyledNode,
        implementation: &dyn StyledNode,
        out: &mut Vec<Deviation>,
    );
}

fn both(
    design: &dyn StyledNode,
    implementation: &dyn StyledNode,
    kind: PropertyKind,
) -> Option<(PropertyValue, PropertyValue)> {
    Some((design.property_value(kind)?, implementation.property_value(kind)?))
}

fn both_lengths(
    design: &dyn StyledNode,
    implementation: &dyn StyledNode,
    kind: PropertyKind,
) -> Option<(f64, f64)> {
    match both(design, implementation, kind)? {
        (PropertyValue::Length(a), PropertyValue::Length(b)) => Some((a, b)),
        _ => None,
    }
}

fn style_deviation(
    kind: PropertyKind,
    expected: &PropertyValue,
    actual: &PropertyValue,
    severity: Severity,
    distance: f64,
    confidence: f64,
) -> Deviation {
    Deviation::new(
        DeviationProperty::Style(kind),
        expected.to_string(),
        actual.to_string(),
        severity,
        distance,
        confidence,
    )
}

/// Fill and background colors by channel distance percent.
pub struct ColorComparator {
    tolerance: f64,
    major: f64,
    critical: f64,
}

impl ColorComparator {
    pub fn new(config: &DeviationConfig) -> Self {
        Self {
            tolerance: config.effective_color_tolerance(),
            major: config.effective_color_major(),
            critical: config.effective_color_critical(),
        }
    }

    /// ≤ major band is minor, up to critical band is major, beyond is critical.
    fn severity(&self, distance: f64) -> Severity {
        if distance > self.critical {
            Severity::Critical
        } else if distance > self.major {
            Severity::Major
        } else {
            Severity::Minor
        }
    }
}

impl PropertyComparator for ColorComparator {
    fn category(&self) -> DeviationCategory {
        DeviationCategory::Color
    }

    fn properties(&self) -> &'static [PropertyKind] {
        &[PropertyKind::Fill, PropertyKind::Background]
    }

    fn compare(
        &self,
        design: &dyn StyledNode,
        implementation: &dyn StyledNode,
        out: &mut Vec<Deviation>,
    ) {
        for &kind in self.properties() {
            let Some((expected, actual)) = both(design, implementation, kind) else {
                continue;
            };
            let (PropertyValue::Color(a), PropertyValue::Color(b)) = (&expected, &actual) else {
                continue;
            };
            let distance = a.distance_percent(b);
            if distance > self.tolerance {
                out.push(
                    style_deviation(
                        kind,
                        &expected,
                        &actual,
                        self.severity(distance),
                        distance,
                        COLOR_CONFIDENCE,
                    )
                    .with_message(format!("{kind} differs by {distance:.1}%")),
                );
            }
        }
    }
}

/// Font family, size, weight, and line height.
pub struct TypographyComparator {
    size_tolerance: f64,
    size_major: f64,
    line_height_tolerance: f64,
}

impl TypographyComparator {
    pub fn new(config: &DeviationConfig) -> Self {
        Self {
            size_tolerance: config.effective_font_size_tolerance(),
            size_major: config.effective_font_size_major(),
            line_height_tolerance: config.effective_line_height_tolerance(),
        }
    }
}

impl PropertyComparator for TypographyComparator {
    fn category(&self) -> DeviationCategory {
        DeviationCategory::Typography
    }

    fn properties(&self) -> &'static [PropertyKind] {
        &[
            PropertyKind::FontFamily,
            PropertyKind::FontSize,
            PropertyKind::FontWeight,
            PropertyKind::LineHeight,
        ]
    }

    fn compare(
        &self,
        design: &dyn StyledNode,
        implementation: &dyn StyledNode,
        out: &mut Vec<Deviation>,
    ) {
        if let Some((expected, actual)) = both(design, implementation, PropertyKind::FontFamily) {
            if expected != actual {
                out.push(
                    style_deviation(
                        PropertyKind::FontFamily,
                        &expected,
                        &actual,
                        Severity::Major,
                        1.0,
                        FAMILY_CONFIDENCE,
                    )
                    .with_message(format!("font family `{actual}` instead of `{expected}`")),
                );
            }
        }

        if let Some((a, b)) = both_lengths(design, implementation, PropertyKind::FontSize) {
            let delta = (a - b).abs();
            if delta > self.size_tolerance {
                let severity = if delta > self.size_major {
                    Severity::Major
                } else {
                    Severity::Medium
                };
                out.push(
                    style_deviation(
                        PropertyKind::FontSize,
                        &PropertyValue::Length(a),
                        &PropertyValue::Length(b),
                        severity,
                        delta,
                        NUMERIC_CONFIDENCE,
                    )
                    .with_message(format!("font size off by {delta:.1}px")),
                );
            }
        }

        if let Some((expected, actual)) = both(design, implementation, PropertyKind::FontWeight) {
            if let (PropertyValue::Weight(a), PropertyValue::Weight(b)) = (&expected, &actual) {
                if a != b {
                    let delta = f64::from(a.abs_diff(*b));
                    out.push(style_deviation(
                        PropertyKind::FontWeight,
                        &expected,
                        &actual,
                        Severity::Major,
                        delta,
                        NUMERIC_CONFIDENCE,
                    ));
                }
            }
        }

        if let Some((a, b)) = both_lengths(design, implementation, PropertyKind::LineHeight) {
            let delta = (a - b).abs();
            if delta > self.line_height_tolerance {
                out.push(style_deviation(
                    PropertyKind::LineHeight,
                    &PropertyValue::Length(a),
                    &PropertyValue::Length(b),
                    Severity::Minor,
                    delta,
                    NUMERIC_CONFIDENCE,
                ));
            }
        }
    }
}

/// Padding, margin, and gap. Sub-threshold deltas are rendering noise.
pub struct SpacingComparator {
    minor: f64,
    major: f64,
}

impl SpacingComparator {
    pub fn new(config: &DeviationConfig) -> Self {
        Self {
            minor: config.effective_spacing_minor(),
            major: config.effective_spacing_major(),
        }
    }
}

impl PropertyComparator for SpacingComparator {
    fn category(&self) -> DeviationCategory {
        DeviationCategory::Spacing
    }

    fn properties(&self) -> &'static [PropertyKind] {
        &[
            PropertyKind::PaddingTop,
            PropertyKind::PaddingRight,
            PropertyKind::PaddingBottom,
            PropertyKind::PaddingLeft,
            PropertyKind::MarginTop,
            PropertyKind::MarginRight,
            PropertyKind::MarginBottom,
            PropertyKind::MarginLeft,
            PropertyKind::Gap,
        ]
    }

    fn compare(
        &self,
        design: &dyn StyledNode,
        implementation: &dyn StyledNode,
        out: &mut Vec<Deviation>,
    ) {
        for &kind in self.properties() {
            let Some((a, b)) = both_lengths(design, implementation, kind) else {
                continue;
            };
            let delta = (a - b).abs();
            let severity = if delta > self.major {
                Severity::Major
            } else if delta > self.minor {
                Severity::Minor
            } else {
                continue;
            };
            out.push(style_deviation(
                kind,
                &PropertyValue::Length(a),
                &PropertyValue::Length(b),
                severity,
                delta,
                NUMERIC_CONFIDENCE,
            ));
        }
    }
}

/// Display, flow direction, and positioning mode. Any mismatch is structural.
pub struct LayoutComparator;

impl PropertyComparator for LayoutComparator {
    fn category(&self) -> DeviationCategory {
        DeviationCategory::Layout
    }

    fn properties(&self) -> &'static [PropertyKind] {
        &[
            PropertyKind::Display,
            PropertyKind::FlexDirection,
            PropertyKind::Position,
        ]
    }

    fn compare(
        &self,
        design: &dyn StyledNode,
        implementation: &dyn StyledNode,
        out: &mut Vec<Deviation>,
    ) {
        for &kind in self.properties() {
            let Some((expected, actual)) = both(design, implementation, kind) else {
                continue;
            };
            if expected != actual {
                out.push(
                    style_deviation(
                        kind,
                        &expected,
                        &actual,
                        Severity::Major,
                        1.0,
                        LAYOUT_CONFIDENCE,
                    )
                    .with_message(format!("{kind} is `{actual}`, expected `{expected}`")),
                );
            }
        }
    }
}

pub struct RadiusComparator {
    tolerance: f64,
}

impl RadiusComparator {
    pub fn new(config: &DeviationConfig) -> Self {
        Self {
            tolerance: config.effective_radius_tolerance(),
        }
    }
}

impl PropertyComparator for RadiusComparator {
    fn category(&self) -> DeviationCategory {
        DeviationCategory::Radius
    }

    fn properties(&self) -> &'static [PropertyKind] {
        &[PropertyKind::CornerRadius]
    }

    fn compare(
        &self,
        design: &dyn StyledNode,
        implementation: &dyn StyledNode,
        out: &mut Vec<Deviation>,
    ) {
        let Some((a, b)) = both_lengths(design, implementation, PropertyKind::CornerRadius) else {
            return;
        };
        let delta = (a - b).abs();
        if delta > self.tolerance {
            out.push(style_deviation(
                PropertyKind::CornerRadius,
                &PropertyValue::Length(a),
                &PropertyValue::Length(b),
                Severity::Minor,
                delta,
                NUMERIC_CONFIDENCE,
            ));
        }
    }
}

/// Shadow lists by signature; layer count mismatches are called out.
pub struct ShadowComparator;

impl PropertyComparator for ShadowComparator {
    fn category(&self) -> DeviationCategory {
        DeviationCategory::Shadow
    }

    fn properties(&self) -> &'static [PropertyKind] {
        &[PropertyKind::Shadow]
    }

    fn compare(
        &self,
        design: &dyn StyledNode,
        implementation: &dyn StyledNode,
        out: &mut Vec<Deviation>,
    ) {
        let Some((expected, actual)) = both(design, implementation, PropertyKind::Shadow) else {
            return;
        };
        let (PropertyValue::Shadows(a), PropertyValue::Shadows(b)) = (&expected, &actual) else {
            return;
        };
        let (expected_sig, actual_sig) = (expected.to_string(), actual.to_string());
        if expected_sig == actual_sig {
            return;
        }
        let distance =
            mapper::distance(TokenCategory::Shadow, &expected_sig, &actual_sig, DEFAULT_REM_PX)
                .unwrap_or(1.0);
        let message = if a.len() != b.len() {
            format!("{} shadow layer(s), expected {}", b.len(), a.len())
        } else {
            "shadow differs".to_string()
        };
        out.push(
            Deviation::new(
                DeviationProperty::Style(PropertyKind::Shadow),
                expected_sig,
                actual_sig,
                Severity::Minor,
                distance,
                SHADOW_CONFIDENCE,
            )
            .with_message(message),
        );
    }
}

/// Ordered set of comparators run on every matched pair.
pub struct ComparatorRegistry {
    comparators: Vec<Box<dyn PropertyComparator>>,
}

impl ComparatorRegistry {
    pub fn new() -> Self {
        Self {
            comparators: Vec::new(),
        }
    }

    /// All built-in comparators with thresholds from `config`.
    pub fn with_defaults(config: &DeviationConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ColorComparator::new(config)));
        registry.register(Box::new(TypographyComparator::new(config)));
        registry.register(Box::new(SpacingComparator::new(config)));
        registry.register(Box::new(LayoutComparator));
        registry.register(Box::new(RadiusComparator::new(config)));
        registry.register(Box::new(ShadowComparator));
        registry
    }

    pub fn register(&mut self, comparator: Box<dyn PropertyComparator>) {
        self.comparators.push(comparator);
    }

    pub fn len(&self) -> usize {
        self.comparators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparators.is_empty()
    }

    pub fn categories(&self) -> Vec<DeviationCategory> {
        self.comparators.iter().map(|c| c.category()).collect()
    }

    pub fn compare_all(
        &self,
        design: &dyn StyledNode,
        implementation: &dyn StyledNode,
    ) -> Vec<Deviation> {
        let mut out = Vec::new();
        for comparator in &self.comparators {
            comparator.compare(design, implementation, &mut out);
        }
        out
    }
}

impl Default for ComparatorRegistry {
    fn default() -> Self {
        Self::with_defaults(&DeviationConfig::default())
    }
}
