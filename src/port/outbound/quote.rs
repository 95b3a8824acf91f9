//! Rate-quote provider port.
//!
//! Defines the interface for fetching a fresh [`ExchangeRate`] from an
//! external lookup service.

use async_trait::async_trait;

use crate::domain::quote::ExchangeRate;
use crate::error::QuoteError;

/// Source of exchange-rate quotes.
///
/// Each call is one independent lookup: no retry, no caching, no state carried
/// between calls. Re-polling is the caller's job.
///
/// # Errors
///
/// [`fetch`](Self::fetch) fails with a [`QuoteError`] for a missing
/// credential, a transport or provider failure, or a payload that lacks any
/// required field.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Fetch one quote.
    async fn fetch(&self) -> Result<ExchangeRate, QuoteError>;
}
