//! Deviation detection: compares matched pairs property by property.
//!
//! Comparators are registered per deviation category and run in order on
//! every matched pair. Missing design nodes become critical existence
//! deviations; extra implementation nodes are not penalized.

pub mod comparators;
pub mod detector;
pub mod types;

pub use comparators::{
    ColorComparator, ComparatorRegistry, LayoutComparator, PropertyComparator, RadiusComparator,
    ShadowComparator, SpacingComparator, TypographyComparator,
};
pub use detector::{missing_deviation, DeviationDetector};
pub use types::{Deviation, DeviationCategory, DeviationProperty, Severity};
