//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset: quiet overall, but keep the
/// analytics crates at debug so their pipeline summaries (batches scored,
/// reports generated) are visible out of the box.
const DEFAULT_DIRECTIVES: &str = "info,stockpulse_orders=debug,stockpulse_inventory=debug";

/// Initialize tracing/logging for the process.
///
/// JSON output with timestamps and targets (the target identifies which
/// analytics crate emitted the line). Filter configurable via `RUST_LOG`.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_current_span(false)
        .try_init();
}
