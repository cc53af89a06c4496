//! # Logging
//!
//! Tracing subscriber setup.

use crate::config::{AdapterConfig, LogFormat};
use crate::constants::DEFAULT_LOG_FILTER;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise the configured log level is applied to
/// this crate. Fails if a global subscriber is already installed.
pub fn init_tracing(config: &AdapterConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&config.log_level)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    }
    .map_err(|e| anyhow::anyhow!(e))
    .context("Failed to initialize tracing subscriber")
}

/// Filter directive for a configured log level
fn default_filter(log_level: &str) -> String {
    match log_level.to_ascii_lowercase().as_str() {
        level @ ("error" | "warn" | "info" | "debug" | "trace") => {
            format!("dbcluster_controller={level}")
        }
        _ => DEFAULT_LOG_FILTER.to_string(),
    }
}
