//! JSON file settings slot.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::settings::AppSettings;
use crate::error::Result;
use crate::port::outbound::settings::LocalSettings;

/// File name of the local settings slot.
pub const SLOT_FILE: &str = "brl_ves_settings.json";

/// One JSON file holding the last saved [`AppSettings`].
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.envios/brl_ves_settings.json`, or a relative path when no home
    /// directory is known.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|home| home.join(".envios"))
            .unwrap_or_else(|| PathBuf::from(".envios"))
            .join(SLOT_FILE)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSlot {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl LocalSettings for FileSlot {
    fn read(&self) -> Result<Option<AppSettings>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn write(&self, settings: &AppSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;

        // Write beside the target and rename so a crash never leaves half a file.
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, json)?;
        fs::rename(&staging, &self.path)?;
        debug!(path = %self.path.display(), "Wrote settings slot");
        Ok(())
    }
}
