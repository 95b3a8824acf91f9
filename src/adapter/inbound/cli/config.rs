//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::{operator, output};
use crate::error::{ConfigError, Result};
use crate::port::inbound::config::ConfigSummary;

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, operator::operator()?.template())?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note("2. Set GEMINI_API_KEY for live quotes");
    output::note("3. Optionally set SUPABASE_URL and SUPABASE_KEY to share settings");
    output::note(&format!("4. Run: envios config validate -c {}", path.display()));
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn print_summary(config: &ConfigSummary) {
    output::field("Path", config.path.display());
    if !config.file_exists {
        output::note("(file not found; showing defaults)");
    }

    output::section("Logging");
    output::field("Level", &config.log_level);
    output::field("Format", &config.log_format);

    output::section("Quotes");
    output::field("Model", &config.quote_model);
    output::field("Refresh", format!("{}s", config.refresh_interval_secs));
    output::field("Timeout", format!("{}s", config.quote_timeout_secs));
    output::field("Thinking", config.thinking_budget);
    if config.quote_key_set {
        output::success("API key loaded from environment");
    } else {
        output::warning("API key not set; quotes will fail until GEMINI_API_KEY is set");
    }

    output::section("Settings store");
    output::field("Table", &config.store_table);
    output::field("Row", config.store_row_id);
    output::field("Local copy", config.local_path.display());
    output::field("Remote", yes_no(config.remote_store_set));

    output::section("Access");
    output::field("Codes", config.access_codes);
    output::field("Operator", format!("+{}", config.phone_number));
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = operator::operator()?.inspect(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "config": config,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    print_summary(&config);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config = operator::operator()?.inspect(path)?;

    if config.file_exists {
        output::success("Config file is valid");
    } else {
        output::warning("Config file not found; defaults will be used");
    }
    if !config.quote_key_set {
        output::warning("GEMINI_API_KEY is not set");
    }

    output::field("Next", format!("envios config show -c {}", path.display()));
    Ok(())
}
