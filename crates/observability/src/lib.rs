//! Tracing/logging setup shared by stockledger binaries.
//!
//! Library crates only emit events through `tracing` macros; installing a
//! subscriber is left to whoever owns the process.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::LogFormat;

/// Initialize process-wide tracing, picking the format from the environment.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    crate::tracing::init_from_env();
}
