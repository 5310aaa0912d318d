//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Default filter when `PARITY_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "parity=info";

/// Initialize the parity tracing/logging system.
///
/// Reads the `PARITY_LOG` environment variable for per-stage log levels.
/// Format: `PARITY_LOG=parity_analysis::matching=debug,parity_analysis::visual=warn`
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("PARITY_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
