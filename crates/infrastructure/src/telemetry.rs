//! Logging setup
//!
//! Installs a `tracing` subscriber writing to stderr, as plain text or JSON
//! lines. Stdout stays reserved for command output.

use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to parse the filter directive
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter {
        /// Offending directive
        filter: String,
        /// Parser message
        reason: String,
    },

    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Pick the effective filter directive
///
/// `RUST_LOG` wins, then `-v` flags (`-v` = debug, `-vv` = trace), then the
/// configured filter.
#[must_use]
pub fn filter_directive(rust_log: Option<&str>, config: &LogConfig, verbosity: u8) -> String {
    if let Some(directive) = rust_log.filter(|d| !d.trim().is_empty()) {
        return directive.to_string();
    }

    match verbosity {
        0 => config.filter.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Initialize the global tracing subscriber
///
/// # Errors
///
/// Fails on an unparsable filter or when a global subscriber is already set.
pub fn init_tracing(config: &LogConfig, verbosity: u8) -> Result<(), TelemetryError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(rust_log.as_deref(), config, verbosity);
    let env_filter =
        EnvFilter::try_new(&directive).map_err(|e| TelemetryError::InvalidFilter {
            filter: directive.clone(),
            reason: e.to_string(),
        })?;

    let json_layer = config.json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!config.json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    debug!(filter = %directive, json = config.json, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_wins() {
        let config = LogConfig::default();
        assert_eq!(
            filter_directive(Some("integration_mail=trace"), &config, 2),
            "integration_mail=trace"
        );
    }

    #[test]
    fn test_blank_rust_log_ignored() {
        let config = LogConfig::default();
        assert_eq!(filter_directive(Some("  "), &config, 0), "info");
    }

    #[test]
    fn test_verbosity_levels() {
        let config = LogConfig {
            filter: "warn".to_string(),
            json: false,
        };
        assert_eq!(filter_directive(None, &config, 0), "warn");
        assert_eq!(filter_directive(None, &config, 1), "debug");
        assert_eq!(filter_directive(None, &config, 5), "trace");
    }

    #[test]
    fn test_error_display() {
        let err = TelemetryError::InvalidFilter {
            filter: "[[".to_string(),
            reason: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid log filter '[[': bad");
    }
}
