//! Observability for the parity engine.
//! `tracing` crate with `EnvFilter`, per-stage log levels.

pub mod metrics;
pub mod setup;

pub use setup::init_tracing;
