//! Visual diff: pixel comparison of a design render and an implementation screenshot.
//!
//! The one CPU-heavy stage; rows are compared in parallel on the rayon pool.

pub mod diff;
pub mod types;

pub use diff::{compare_images, VisualDiffEngine};
pub use types::{DiffImage, PaddingInfo, VisualDiffResult, VisualSection, VisualSkipReason};
