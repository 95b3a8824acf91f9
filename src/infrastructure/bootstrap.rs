//! Composition root: build a [`Desk`] from configuration.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::gemini::client::Gemini;
use crate::adapter::outbound::handoff::console::ConsoleHandoff;
use crate::adapter::outbound::local::file::FileSlot;
use crate::adapter::outbound::supabase::client::Supabase;
use crate::application::desk::Desk;
use crate::application::settings::service::SettingsService;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::handoff::Handoff;
use crate::port::outbound::quote::QuoteProvider;
use crate::port::outbound::settings::RemoteSettings;

/// Build the settings service: Supabase when configured, plus the local file.
///
/// # Errors
///
/// Returns an error if `SUPABASE_URL` is set but invalid.
pub fn build_settings_service(config: &Config) -> Result<SettingsService> {
    let store = &config.store;
    let remote = Supabase::from_env(
        &store.table,
        store.row_id,
        std::time::Duration::from_secs(store.timeout_secs),
    )?
    .map(|supabase| {
        info!(endpoint = %supabase.endpoint(), "Remote settings enabled");
        Arc::new(supabase) as Arc<dyn RemoteSettings>
    });
    if remote.is_none() {
        info!("SUPABASE_URL or SUPABASE_KEY not set, settings are local only");
    }

    Ok(SettingsService::new(remote, Arc::new(build_local_slot(config))))
}

/// The local settings file named by `[store]`.
#[must_use]
pub fn build_local_slot(config: &Config) -> FileSlot {
    FileSlot::new(config.store.local_path())
}

/// Build the quote provider.
#[must_use]
pub fn build_quote_provider(config: &Config) -> Arc<dyn QuoteProvider> {
    let quote = &config.quote;
    let gemini = Gemini::from_env(quote.model.clone(), quote.thinking_budget, quote.timeout());
    if !gemini.has_credential() {
        warn!("GEMINI_API_KEY not set, live quotes are unavailable");
    }
    Arc::new(gemini)
}

/// Build the desk with a console handoff channel.
///
/// # Errors
///
/// Returns an error if the settings backend cannot be built.
pub fn build_desk(config: &Config) -> Result<Desk> {
    build_desk_with(config, Arc::new(ConsoleHandoff::stdout()))
}

/// Build the desk with an explicit handoff channel.
///
/// # Errors
///
/// Returns an error if the settings backend cannot be built.
pub fn build_desk_with(config: &Config, handoff: Arc<dyn Handoff>) -> Result<Desk> {
    let settings = build_settings_service(config)?;
    let provider = build_quote_provider(config);

    Ok(Desk::new(settings, provider, handoff)
        .with_access_codes(config.access.codes.clone())
        .with_recipient(config.handoff.phone_number.clone())
        .with_refresh_interval(config.quote.refresh_interval()))
}
