//! # Adapter Configuration
//!
//! Adapter-level settings loaded from environment variables.

use crate::constants::{DEFAULT_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text lines
    Text,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Adapter-level configuration
///
/// All settings have sensible defaults and can be overridden via environment variables.
/// Environment variables are populated from a ConfigMap using `envFrom` in the deployment.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    /// Length of generated master passwords
    /// Never below `MIN_PASSWORD_LENGTH`
    pub password_length: usize,
    /// Global log level (ERROR, WARN, INFO, DEBUG, TRACE)
    /// Used when `RUST_LOG` is not set
    pub log_level: String,
    /// Log format (json, text)
    pub log_format: LogFormat,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            password_length: DEFAULT_PASSWORD_LENGTH,
            log_level: "INFO".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl AdapterConfig {
    /// Load configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let password_length =
            parse_or_default(lookup("PASSWORD_LENGTH"), DEFAULT_PASSWORD_LENGTH)
                .max(MIN_PASSWORD_LENGTH);
        Self {
            password_length,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "INFO".to_string()),
            log_format: lookup("LOG_FORMAT")
                .map_or(LogFormat::Text, |v| LogFormat::parse(&v)),
        }
    }
}

/// Parse an optional value or return default
fn parse_or_default<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}
