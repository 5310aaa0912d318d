//! Structured span field names used across comparison stages.
//!
//! Keeping them in one place lets log queries filter on the same keys
//! regardless of which stage emitted the event.

/// Taxonomy: nodes classified per tree.
pub const NODES_CLASSIFIED: &str = "nodes_classified";

/// Tokens: raw token occurrences extracted before aggregation.
pub const RAW_TOKEN_COUNT: &str = "raw_token_count";

/// Matching: design/implementation pairs produced.
pub const MATCHED_PAIRS: &str = "matched_pairs";

/// Matching: design nodes with no implementation counterpart.
pub const UNMATCHED_DESIGN: &str = "unmatched_design";

/// Matching: implementation nodes with no design counterpart.
pub const UNMATCHED_IMPLEMENTATION: &str = "unmatched_implementation";

/// Deviations: total deviations across pairs and missing nodes.
pub const DEVIATION_COUNT: &str = "deviation_count";

/// Scoring: final 0-100 match score.
pub const MATCH_SCORE: &str = "match_score";

/// Visual: pixel comparison time in milliseconds.
pub const VISUAL_DIFF_TIME: &str = "visual_diff_time";

/// Whole comparison run time in milliseconds.
pub const COMPARISON_TIME: &str = "comparison_time";
