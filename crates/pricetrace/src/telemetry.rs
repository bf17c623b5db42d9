// File: crates/pricetrace/src/telemetry.rs
// Summary: Logging setup: compact fmt subscriber on stderr, `RUST_LOG` override, `info` default.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Returns `false` when one was already set.
pub fn init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .is_ok()
}
