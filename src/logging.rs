//! Logging bootstrap
//!
//! Logs go to stderr; stdout carries the MCP protocol.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Install the global `tracing` subscriber
///
/// Honors `RUST_LOG`; falls back to [`DEFAULT_LOG_LEVEL`]. Fails if a global
/// subscriber is already installed.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
