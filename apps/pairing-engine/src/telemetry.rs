//! Tracing Setup
//!
//! Installs the global `tracing` subscriber from [`LoggingConfig`].
//!
//! `RUST_LOG` takes precedence over the configured level when set.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pairing_engine::{config::LoggingConfig, telemetry::init_tracing};
//!
//! init_tracing(&LoggingConfig::default())?;
//! ```

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Tracing initialization errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured level is not a valid filter directive.
    #[error("Invalid log level '{level}': {message}")]
    InvalidLevel {
        /// Configured level.
        level: String,
        /// Parser message.
        message: String,
    },

    /// A global subscriber was already installed.
    #[error("Tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Build the filter for `config`, letting `RUST_LOG` win when present.
///
/// # Errors
///
/// Returns `TelemetryError::InvalidLevel` if the configured level does not parse.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level).map_err(|e| TelemetryError::InvalidLevel {
        level: config.level.clone(),
        message: e.to_string(),
    })
}

/// Initialize the global tracing subscriber.
///
/// # Errors
///
/// Returns a `TelemetryError` if the level is invalid or a subscriber is
/// already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.include_targets);

    let result = if config.is_pretty() {
        builder.pretty().try_init()
    } else {
        builder.json().try_init()
    };
    result.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;

    tracing::debug!(level = %config.level, format = %config.format, "Tracing initialized");
    Ok(())
}
