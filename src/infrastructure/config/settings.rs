//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all desk settings.
//! Configuration is loaded from a TOML file; secrets (`GEMINI_API_KEY`,
//! `SUPABASE_URL`, `SUPABASE_KEY`) only ever come from the environment.
//!
//! # Example
//!
//! ```no_run
//! use envios::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::access::{AccessConfig, HandoffConfig};
use super::logging::{LoggingConfig, LOG_FORMATS};
use super::quote::QuoteConfig;
use super::store::StoreConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Quote provider settings.
    #[serde(default)]
    pub quote: QuoteConfig,

    /// Remote and local settings storage.
    #[serde(default)]
    pub store: StoreConfig,

    /// Client access codes.
    #[serde(default)]
    pub access: AccessConfig,

    /// Handoff channel.
    #[serde(default)]
    pub handoff: HandoffConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path`, or the defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] for a file that exists.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns the first rule that fails.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("must be one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }
        if self.quote.model.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "quote.model",
            }
            .into());
        }
        if self.quote.refresh_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "quote.refresh_interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.quote.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "quote.timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.store.table.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "store.table",
            }
            .into());
        }
        if self.store.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "store.timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.access.codes.iter().all(|code| code.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "access.codes",
                reason: "at least one access code is required".to_string(),
            }
            .into());
        }
        let phone = &self.handoff.phone_number;
        if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidValue {
                field: "handoff.phone_number",
                reason: "must be digits only, international format without '+'".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
