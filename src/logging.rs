//! Log output for the harness binary
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary. `RUST_LOG` overrides the default filter.

use tracing_subscriber::EnvFilter;

/// Installs a formatted stderr subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
