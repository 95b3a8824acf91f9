//! Mock settings backends.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::settings::AppSettings;
use crate::error::{Error, Result};
use crate::port::outbound::settings::{LocalSettings, RemoteSettings};

/// A remote backend holding at most one row, optionally failing every call.
pub struct ScriptedRemote {
    row: Mutex<Option<AppSettings>>,
    failure: Option<String>,
    pushes: AtomicU32,
}

impl ScriptedRemote {
    /// Remote that answers with no row.
    pub fn empty() -> Self {
        Self {
            row: Mutex::new(None),
            failure: None,
            pushes: AtomicU32::new(0),
        }
    }

    pub fn with_row(settings: AppSettings) -> Self {
        let remote = Self::empty();
        *remote.row.lock() = Some(settings);
        remote
    }

    /// Remote whose every call fails with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::empty()
        }
    }

    /// Number of push attempts, failed ones included.
    pub fn push_count(&self) -> u32 {
        self.pushes.load(Ordering::SeqCst)
    }

    pub fn row(&self) -> Option<AppSettings> {
        self.row.lock().clone()
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(reason) => Err(Error::Connection(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RemoteSettings for ScriptedRemote {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch(&self) -> Result<Option<AppSettings>> {
        self.check()?;
        Ok(self.row())
    }

    async fn push(&self, settings: &AppSettings) -> Result<()> {
        self.pushes.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        *self.row.lock() = Some(settings.clone());
        Ok(())
    }
}

/// A local slot whose reads and writes always fail.
pub struct BrokenSlot;

impl LocalSettings for BrokenSlot {
    fn read(&self) -> Result<Option<AppSettings>> {
        Err(Error::Io(std::io::Error::other("slot unreadable")))
    }

    fn write(&self, _settings: &AppSettings) -> Result<()> {
        Err(Error::Io(std::io::Error::other("slot read-only")))
    }
}

/// An in-process local slot.
#[derive(Debug, Default)]
pub struct MemorySlot {
    slot: Mutex<Option<AppSettings>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot that already holds `settings`.
    pub fn with(settings: AppSettings) -> Self {
        Self {
            slot: Mutex::new(Some(settings)),
        }
    }
}

impl LocalSettings for MemorySlot {
    fn read(&self) -> Result<Option<AppSettings>> {
        Ok(self.slot.lock().clone())
    }

    fn write(&self, settings: &AppSettings) -> Result<()> {
        *self.slot.lock() = Some(settings.clone());
        Ok(())
    }
}
