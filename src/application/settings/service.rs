//! Settings load/save with tagged fallbacks.
//!
//! Loading never fails: it walks remote → local → built-in defaults and
//! reports which source won. Saving writes the local slot first (the only
//! write that can fail the call) and then mirrors to the remote on a
//! best-effort basis. The two copies are never reconciled.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::domain::settings::AppSettings;
use crate::error::Result;
use crate::port::outbound::settings::{LocalSettings, RemoteSettings};

/// Where loaded settings came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsOrigin {
    Remote,
    Local,
    Default,
}

/// Result of the remote leg of a load or save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum RemoteOutcome {
    /// No remote backend is configured.
    Disabled,
    /// The remote answered and the record was read or written.
    Synced,
    /// The remote answered but holds no settings row.
    Empty,
    /// The remote call failed.
    Failed(String),
}

impl RemoteOutcome {
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Settings chosen by [`SettingsService::load`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsLoad {
    pub settings: AppSettings,
    pub origin: SettingsOrigin,
    pub remote: RemoteOutcome,
}

/// Outcome of [`SettingsService::save`]. The local write always succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveReport {
    pub remote: RemoteOutcome,
}

/// Settings persistence over a remote backend and a local slot.
pub struct SettingsService {
    remote: Option<Arc<dyn RemoteSettings>>,
    local: Arc<dyn LocalSettings>,
}

impl SettingsService {
    /// Create a service. `remote = None` means local-only operation.
    #[must_use]
    pub fn new(remote: Option<Arc<dyn RemoteSettings>>, local: Arc<dyn LocalSettings>) -> Self {
        Self { remote, local }
    }

    /// Load the best available settings.
    pub async fn load(&self) -> SettingsLoad {
        let remote = match &self.remote {
            None => RemoteOutcome::Disabled,
            Some(backend) => match backend.fetch().await {
                Ok(Some(settings)) => {
                    info!(backend = backend.name(), "Loaded settings from remote");
                    return SettingsLoad {
                        settings,
                        origin: SettingsOrigin::Remote,
                        remote: RemoteOutcome::Synced,
                    };
                }
                Ok(None) => {
                    debug!(backend = backend.name(), "Remote holds no settings row");
                    RemoteOutcome::Empty
                }
                Err(e) => {
                    warn!(backend = backend.name(), error = %e, "Remote settings unavailable, using local");
                    RemoteOutcome::Failed(e.to_string())
                }
            },
        };

        match self.local.read() {
            Ok(Some(settings)) => {
                debug!("Loaded settings from local slot");
                SettingsLoad {
                    settings,
                    origin: SettingsOrigin::Local,
                    remote,
                }
            }
            Ok(None) => {
                debug!("No saved settings, using defaults");
                Self::defaults(remote)
            }
            Err(e) => {
                warn!(error = %e, "Local settings unreadable, using defaults");
                Self::defaults(remote)
            }
        }
    }

    /// Persist settings locally, then mirror them to the remote.
    ///
    /// # Errors
    ///
    /// Returns an error only when the local write fails. A remote failure is
    /// logged and reported in the [`SaveReport`].
    pub async fn save(&self, settings: &AppSettings) -> Result<SaveReport> {
        self.local.write(settings)?;
        debug!("Saved settings to local slot");

        let remote = match &self.remote {
            None => RemoteOutcome::Disabled,
            Some(backend) => match backend.push(settings).await {
                Ok(()) => {
                    info!(backend = backend.name(), "Mirrored settings to remote");
                    RemoteOutcome::Synced
                }
                Err(e) => {
                    error!(backend = backend.name(), error = %e, "Failed to mirror settings to remote");
                    RemoteOutcome::Failed(e.to_string())
                }
            },
        };

        Ok(SaveReport { remote })
    }

    fn defaults(remote: RemoteOutcome) -> SettingsLoad {
        SettingsLoad {
            settings: AppSettings::default(),
            origin: SettingsOrigin::Default,
            remote,
        }
    }
}
