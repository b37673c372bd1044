//! Tracing setup for the embedding process.

use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber with env-filter support.
///
/// Falls back to `dicehouse=info` when `RUST_LOG` is unset. Safe to call
/// more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "dicehouse=info".into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
