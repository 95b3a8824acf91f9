//! Configuration inspection port.
//!
//! Lets inbound adapters validate and describe the configuration file
//! without depending on the infrastructure layer that owns it.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;

/// Effective configuration with defaults applied, as shown to an operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSummary {
    pub path: PathBuf,
    /// False when no file exists and the defaults are in effect.
    pub file_exists: bool,
    pub log_level: String,
    pub log_format: String,
    pub quote_model: String,
    pub refresh_interval_secs: u64,
    pub thinking_budget: u32,
    pub quote_timeout_secs: u64,
    pub store_table: String,
    pub store_row_id: i64,
    pub local_path: PathBuf,
    pub access_codes: usize,
    pub phone_number: String,
    /// Whether a quote API key is present in the environment.
    pub quote_key_set: bool,
    /// Whether both remote-store variables are present in the environment.
    pub remote_store_set: bool,
}

/// Configuration operations available to inbound adapters.
pub trait ConfigurationOperator: Send + Sync {
    /// Documented configuration template.
    fn template(&self) -> &'static str;

    /// Load and validate the file at `path`, or the defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns the read, parse or validation error of an existing file.
    fn inspect(&self, path: &Path) -> Result<ConfigSummary>;
}
