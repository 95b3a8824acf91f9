//! The remittance desk: one entry point over settings, quotes, pricing and
//! handoff.
//!
//! The desk owns no settings state. Callers load an [`AppSettings`] once and
//! pass it into every pricing call, so a quote refresh and a settings edit
//! never observe each other half-way.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use super::access::{SharedCodeValidator, DEFAULT_ACCESS_CODES};
use super::handoff::{compose, DEFAULT_PHONE_NUMBER};
use super::quote::feed::{FeedUpdate, QuoteFeed, QuoteView};
use super::quote::poller::{QuotePoller, DEFAULT_REFRESH_INTERVAL};
use super::settings::service::{SaveReport, SettingsLoad, SettingsService};
use crate::domain::access::Role;
use crate::domain::calculator::{RateBoard, RateCalculator};
use crate::domain::settings::{AppSettings, SettingsEdit};
use crate::domain::transaction::{Transaction, TransactionDraft};
use crate::error::{Error, HandoffError, Result};
use crate::port::inbound::access::CredentialValidator;
use crate::port::outbound::handoff::{Handoff, HandoffMessage};
use crate::port::outbound::quote::QuoteProvider;

/// Application facade used by every inbound adapter.
pub struct Desk {
    settings: SettingsService,
    provider: Arc<dyn QuoteProvider>,
    feed: Arc<QuoteFeed>,
    handoff: Arc<dyn Handoff>,
    access_codes: Vec<String>,
    recipient: String,
    refresh_interval: Duration,
}

impl Desk {
    pub fn new(
        settings: SettingsService,
        provider: Arc<dyn QuoteProvider>,
        handoff: Arc<dyn Handoff>,
    ) -> Self {
        Self {
            settings,
            provider,
            feed: Arc::new(QuoteFeed::new()),
            handoff,
            access_codes: DEFAULT_ACCESS_CODES.iter().map(ToString::to_string).collect(),
            recipient: DEFAULT_PHONE_NUMBER.to_string(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }

    #[must_use]
    pub fn with_access_codes(mut self, codes: Vec<String>) -> Self {
        self.access_codes = codes;
        self
    }

    #[must_use]
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    #[must_use]
    pub const fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    #[must_use]
    pub fn feed(&self) -> &Arc<QuoteFeed> {
        &self.feed
    }

    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Load settings through the remote, local, default chain.
    pub async fn load_settings(&self) -> SettingsLoad {
        self.settings.load().await
    }

    /// Validator bound to the admin code in `settings`.
    #[must_use]
    pub fn validator(&self, settings: &AppSettings) -> SharedCodeValidator {
        SharedCodeValidator::for_settings(&self.access_codes, settings)
    }

    /// Resolve `code` to a role.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AccessDenied`] when the code is not recognized.
    pub fn authenticate(&self, settings: &AppSettings, code: &str) -> Result<Role> {
        match self.validator(settings).validate(code) {
            Some(role) => {
                info!(%role, "Access granted");
                Ok(role)
            }
            None => {
                warn!("Access code rejected");
                Err(Error::AccessDenied("unrecognized access code".into()))
            }
        }
    }

    /// Fetch one quote now and record it in the feed.
    pub async fn refresh_quote(&self) -> FeedUpdate {
        self.feed.refresh(self.provider.as_ref()).await
    }

    #[must_use]
    pub fn quote_view(&self, settings: &AppSettings) -> QuoteView {
        self.feed.view(settings.is_manual_mode)
    }

    /// Client rates in both directions.
    #[must_use]
    pub fn board(&self, settings: &AppSettings) -> RateBoard {
        let quote = self.feed.latest();
        RateCalculator::new(settings, quote.as_ref()).board()
    }

    /// Freeze `draft` at the current rate for its direction.
    #[must_use]
    pub fn confirm(&self, settings: &AppSettings, draft: &TransactionDraft) -> Option<Transaction> {
        let quote = self.feed.latest();
        let rate = RateCalculator::new(settings, quote.as_ref()).rate(draft.direction);
        draft.confirm(rate)
    }

    /// Apply an admin edit and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AccessDenied`] for non-admin roles, a domain error when
    /// the edited settings break a rule, or the local-slot write error.
    pub async fn update_settings(
        &self,
        role: Role,
        current: &AppSettings,
        edit: &SettingsEdit,
    ) -> Result<(AppSettings, SaveReport)> {
        if !role.is_admin() {
            return Err(Error::AccessDenied(
                "settings can only be changed with the admin code".into(),
            ));
        }

        let next = edit.apply(current);
        next.validate()?;
        let report = self.settings.save(&next).await?;
        Ok((next, report))
    }

    /// Deliver `transaction` once a transfer proof is attached.
    ///
    /// # Errors
    ///
    /// Fails without delivering when `proof` is absent or is not an existing
    /// file, and propagates the channel's delivery error.
    pub fn hand_off(&self, transaction: &Transaction, proof: Option<&Path>) -> Result<HandoffMessage> {
        let proof = proof.ok_or(HandoffError::MissingProof)?;
        if !proof.is_file() {
            return Err(HandoffError::ProofNotFound {
                path: proof.display().to_string(),
            }
            .into());
        }

        let message = compose(transaction, &self.recipient);
        self.handoff.deliver(&message)?;
        info!(
            channel = self.handoff.name(),
            direction = %transaction.direction(),
            proof = %proof.display(),
            "Transaction handed off"
        );
        Ok(message)
    }

    /// A poller that keeps this desk's feed fresh.
    #[must_use]
    pub fn poller(&self) -> QuotePoller {
        QuotePoller::new(
            Arc::clone(&self.provider),
            Arc::clone(&self.feed),
            self.refresh_interval,
        )
    }
}
