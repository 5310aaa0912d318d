//! Tracing setup tests.

use std::sync::Mutex;

use parity_core::tracing::setup::{init_tracing, DEFAULT_FILTER};

/// Serializes tests that touch `PARITY_LOG`.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_per_stage_filter_is_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(
        "PARITY_LOG",
        "parity_analysis::matching=debug,parity_analysis::visual=warn",
    );
    init_tracing();
    std::env::remove_var("PARITY_LOG");
}

#[test]
fn test_init_tracing_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    tracing::info!(score = 100.0, "emitted after repeated init");
}

#[test]
fn test_invalid_filter_falls_back_to_default() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("PARITY_LOG", "[[not a filter");
    init_tracing();
    std::env::remove_var("PARITY_LOG");
    assert_eq!(DEFAULT_FILTER, "parity=info");
}
