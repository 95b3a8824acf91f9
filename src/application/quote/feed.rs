//! Generation-ordered holder of the latest quote.
//!
//! Fetches may overlap: a periodic tick can start a new fetch while an older
//! one is still in flight. Every fetch takes a [`QuoteTicket`] when it starts
//! and the feed only accepts a completion whose generation is newer than what
//! it already holds, so a slow fetch can never overwrite a fresher quote.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use serde::Serialize;

use crate::domain::quote::ExchangeRate;
use crate::error::QuoteError;
use crate::port::outbound::quote::QuoteProvider;

/// Generation stamp taken when a fetch starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QuoteTicket(u64);

impl QuoteTicket {
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// What happened to a completed fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedUpdate {
    /// The quote became the current one.
    Applied {
        generation: u64,
        quote: ExchangeRate,
    },
    /// The fetch failed and its error is now the current warning.
    Failed { generation: u64, reason: String },
    /// A newer completion already landed; this one was discarded.
    Stale { generation: u64, current: u64 },
}

impl FeedUpdate {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        match self {
            Self::Applied { generation, .. }
            | Self::Failed { generation, .. }
            | Self::Stale { generation, .. } => *generation,
        }
    }
}

/// Quote plus the warning a caller should show, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteView {
    pub quote: Option<ExchangeRate>,
    pub warning: Option<String>,
}

#[derive(Debug, Default)]
struct FeedState {
    quote: Option<ExchangeRate>,
    quote_generation: u64,
    error: Option<String>,
    error_generation: u64,
}

/// The current quote, ordered by fetch generation.
#[derive(Debug, Default)]
pub struct QuoteFeed {
    tickets: AtomicU64,
    state: RwLock<FeedState>,
}

impl QuoteFeed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket for a fetch that is about to start.
    pub fn begin(&self) -> QuoteTicket {
        QuoteTicket(self.tickets.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Record a completed fetch.
    ///
    /// A success is applied when it is newer than the current quote; it also
    /// clears an older warning. A failure becomes the warning when it is newer
    /// than both the current quote and the current warning. A failure never
    /// clears the last good quote.
    pub fn complete(
        &self,
        ticket: QuoteTicket,
        result: Result<ExchangeRate, QuoteError>,
    ) -> FeedUpdate {
        let generation = ticket.generation();
        let mut state = self.state.write();

        match result {
            Ok(quote) => {
                if generation <= state.quote_generation {
                    return FeedUpdate::Stale {
                        generation,
                        current: state.quote_generation,
                    };
                }
                state.quote = Some(quote.clone());
                state.quote_generation = generation;
                if state.error_generation < generation {
                    state.error = None;
                }
                FeedUpdate::Applied { generation, quote }
            }
            Err(e) => {
                let current = state.quote_generation.max(state.error_generation);
                if generation <= current {
                    return FeedUpdate::Stale {
                        generation,
                        current,
                    };
                }
                let reason = e.to_string();
                state.error = Some(reason.clone());
                state.error_generation = generation;
                FeedUpdate::Failed { generation, reason }
            }
        }
    }

    /// Fetch once from `provider` and record the result.
    pub async fn refresh(&self, provider: &dyn QuoteProvider) -> FeedUpdate {
        let ticket = self.begin();
        let result = provider.fetch().await;
        self.complete(ticket, result)
    }

    /// The current quote, if any fetch has succeeded.
    #[must_use]
    pub fn latest(&self) -> Option<ExchangeRate> {
        self.state.read().quote.clone()
    }

    /// Generation of the current quote (0 before the first success).
    #[must_use]
    pub fn applied_generation(&self) -> u64 {
        self.state.read().quote_generation
    }

    /// Current quote and warning. Manual mode masks the warning.
    #[must_use]
    pub fn view(&self, manual_mode: bool) -> QuoteView {
        let state = self.state.read();
        QuoteView {
            quote: state.quote.clone(),
            warning: if manual_mode {
                None
            } else {
                state.error.clone()
            },
        }
    }
}
