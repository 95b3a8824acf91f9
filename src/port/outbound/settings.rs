//! Settings persistence ports.
//!
//! Settings live in two places: a remote row shared by every desk, and a
//! single local slot that is authoritative when the remote is unreachable.

use async_trait::async_trait;

use crate::domain::settings::AppSettings;
use crate::error::Result;

/// Remote settings record.
#[async_trait]
pub trait RemoteSettings: Send + Sync {
    /// Return the backend name for logging.
    fn name(&self) -> &'static str;

    /// Read the settings row. `Ok(None)` when the row does not exist.
    async fn fetch(&self) -> Result<Option<AppSettings>>;

    /// Overwrite the settings row.
    async fn push(&self, settings: &AppSettings) -> Result<()>;
}

/// Local single-slot settings storage.
pub trait LocalSettings: Send + Sync {
    /// Read the slot. `Ok(None)` when nothing has been saved yet.
    fn read(&self) -> Result<Option<AppSettings>>;

    /// Replace the slot contents.
    fn write(&self, settings: &AppSettings) -> Result<()>;
}
