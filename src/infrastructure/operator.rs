//! Configuration operator backing the CLI `config` commands.

use std::path::Path;

use crate::adapter::outbound::gemini::client::API_KEY_VARS;
use crate::adapter::outbound::supabase::client::{KEY_VAR, URL_VAR};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::config::{ConfigSummary, ConfigurationOperator};

/// Documented configuration template.
pub const CONFIG_TEMPLATE: &str = include_str!("../../config.toml.example");

/// [`ConfigurationOperator`] over [`Config`] and the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigOperator;

fn env_set(name: &str) -> bool {
    std::env::var(name).is_ok_and(|v| !v.trim().is_empty())
}

impl ConfigurationOperator for ConfigOperator {
    fn template(&self) -> &'static str {
        CONFIG_TEMPLATE
    }

    fn inspect(&self, path: &Path) -> Result<ConfigSummary> {
        let config = Config::load_or_default(path)?;
        Ok(ConfigSummary {
            path: path.to_path_buf(),
            file_exists: path.exists(),
            log_level: config.logging.level.clone(),
            log_format: config.logging.format.clone(),
            quote_model: config.quote.model.clone(),
            refresh_interval_secs: config.quote.refresh_interval_secs,
            thinking_budget: config.quote.thinking_budget,
            quote_timeout_secs: config.quote.timeout_secs,
            store_table: config.store.table.clone(),
            store_row_id: config.store.row_id,
            local_path: config.store.local_path(),
            access_codes: config.access.codes.len(),
            phone_number: config.handoff.phone_number.clone(),
            quote_key_set: API_KEY_VARS.iter().any(|var| env_set(var)),
            remote_store_set: env_set(URL_VAR) && env_set(KEY_VAR),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn template_parses_and_matches_defaults() {
        let config = Config::parse_toml(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn inspect_missing_file_reports_defaults() {
        let dir = TempDir::new().unwrap();
        let summary = ConfigOperator
            .inspect(&dir.path().join("config.toml"))
            .unwrap();

        assert!(!summary.file_exists);
        assert_eq!(summary.refresh_interval_secs, 300);
        assert_eq!(summary.access_codes, 4);
    }

    #[test]
    fn inspect_reports_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[quote]\ntimeout_secs = 0\n").unwrap();

        assert!(ConfigOperator.inspect(&path).is_err());
    }
}
