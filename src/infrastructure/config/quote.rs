//! Quote provider configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::adapter::outbound::gemini::client::DEFAULT_MODEL;

/// Gemini quote lookup settings.
///
/// The API key is read from `GEMINI_API_KEY` (or `API_KEY`) at runtime,
/// never from the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    /// Model identifier.
    pub model: String,
    /// Seconds between background re-polls in `watch`.
    pub refresh_interval_secs: u64,
    /// Thinking token budget for the model.
    pub thinking_budget: u32,
    /// Per-request timeout. Search-grounded answers are slow.
    pub timeout_secs: u64,
}

impl QuoteConfig {
    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            refresh_interval_secs: 300,
            thinking_budget: 4000,
            timeout_secs: 90,
        }
    }
}
