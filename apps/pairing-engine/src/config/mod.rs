//! Configuration module for the pairing engine.
//!
//! Loads YAML configuration with environment variable interpolation and
//! validates it before use.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pairing_engine::config::load_config;
//!
//! let config = load_config(Some("pairing.yaml"))?;
//! println!("shape: {}", config.scenario.shape);
//! ```

mod observability;
mod scenario;
mod verification;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use observability::{LoggingConfig, ObservabilityConfig};
pub use scenario::ScenarioConfig;
pub use verification::VerificationConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Round trip scenario configuration.
    #[serde(default)]
    pub scenario: ScenarioConfig,
    /// Position verification configuration.
    #[serde(default)]
    pub verification: VerificationConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "pairing.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("pairing.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string.
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax. Unset or empty
/// variables without a default become the empty string.
#[allow(clippy::expect_used)] // Regex is a compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.scenario.base_quantity == 0 {
        return Err(ConfigError::ValidationError(
            "scenario.base_quantity must be positive".to_string(),
        ));
    }

    if config.scenario.quantity_multiplier == 0 {
        return Err(ConfigError::ValidationError(
            "scenario.quantity_multiplier must be positive".to_string(),
        ));
    }

    if !config.scenario.chain_filter.is_well_formed() {
        return Err(ConfigError::ValidationError(
            "scenario.chain_filter minimums must not exceed maximums".to_string(),
        ));
    }

    if config.verification.accounting_model.as_str().trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "verification.accounting_model must not be empty".to_string(),
        ));
    }

    let formats = LoggingConfig::FORMATS;
    if !formats.contains(&config.observability.logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {formats:?}"
        )));
    }

    Ok(())
}
