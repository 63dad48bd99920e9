//! Process-wide tracing setup
//!
//! Every service calls [`init_tracing`] once, before any other code runs.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info,tower_http=debug";

/// Build the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global `tracing` subscriber
pub fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .try_init()
        .map_err(|e| anyhow::anyhow!("setting default subscriber failed: {e}"))
}
