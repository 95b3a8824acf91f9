//! Settings storage configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::adapter::outbound::local::file::FileSlot;
use crate::adapter::outbound::supabase::client::{DEFAULT_ROW_ID, DEFAULT_TABLE};

/// Where settings are kept.
///
/// The remote copy is enabled only when `SUPABASE_URL` and `SUPABASE_KEY`
/// are both set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// PostgREST table holding the settings row.
    pub table: String,
    /// `id` of the settings row.
    pub row_id: i64,
    /// Local slot file. Defaults to `~/.envios/brl_ves_settings.json`.
    pub local_path: Option<PathBuf>,
    /// Timeout for remote calls.
    pub timeout_secs: u64,
}

impl StoreConfig {
    #[must_use]
    pub fn local_path(&self) -> PathBuf {
        self.local_path.clone().unwrap_or_else(FileSlot::default_path)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            table: DEFAULT_TABLE.to_string(),
            row_id: DEFAULT_ROW_ID,
            local_path: None,
            timeout_secs: 10,
        }
    }
}
