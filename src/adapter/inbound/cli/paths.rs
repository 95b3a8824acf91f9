//! Path utilities for envios.
//!
//! All data lives under `~/.envios/`:
//! - `~/.envios/config.toml` - main configuration
//! - `~/.envios/brl_ves_settings.json` - local settings slot

use std::path::PathBuf;

/// Returns the envios home directory (`~/.envios/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".envios")
}

/// Returns the default config file path (`~/.envios/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
