//! Mock [`QuoteProvider`] and quote builders.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::quote::{ExchangeRate, GroundingSource, MarketRates};
use crate::error::QuoteError;
use crate::port::outbound::quote::QuoteProvider;

/// A quote whose Bybit pair is `(ves, brl)`.
///
/// The official and Binance figures are plausible constants; pricing only
/// reads the Bybit pair.
pub fn sample_quote(ves: Decimal, brl: Decimal) -> ExchangeRate {
    ExchangeRate {
        brl_to_ves: dec!(93.10),
        usd_ves: dec!(36.50),
        usd_brl: dec!(5.45),
        binance: Some(MarketRates::new(dec!(544.00), dec!(5.82))),
        bybit: Some(MarketRates::new(ves, brl)),
        last_updated: Utc::now(),
        source: "scripted".into(),
        grounding_sources: vec![GroundingSource {
            title: "Referencia p2p.army".into(),
            uri: "https://p2p.army".into(),
        }],
    }
}

struct Step {
    result: Result<ExchangeRate, QuoteError>,
    delay: Duration,
}

/// A provider that replays queued results in order.
///
/// Each step may carry a delay applied after the step is taken, so overlapping
/// fetches can complete out of order. Once the queue is exhausted every fetch
/// fails with [`QuoteError::Request`].
pub struct ScriptedQuoteProvider {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicU32,
}

impl ScriptedQuoteProvider {
    pub fn new() -> Self {
        Self {
            steps: Mutex::new(VecDeque::new()),
            calls: AtomicU32::new(0),
        }
    }

    pub fn then_ok(self, quote: ExchangeRate) -> Self {
        self.push(Ok(quote), Duration::ZERO)
    }

    pub fn then_ok_after(self, quote: ExchangeRate, delay: Duration) -> Self {
        self.push(Ok(quote), delay)
    }

    pub fn then_err(self, error: QuoteError) -> Self {
        self.push(Err(error), Duration::ZERO)
    }

    /// Number of fetches made so far.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(self, result: Result<ExchangeRate, QuoteError>, delay: Duration) -> Self {
        self.steps.lock().push_back(Step { result, delay });
        self
    }
}

impl Default for ScriptedQuoteProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteProvider for ScriptedQuoteProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch(&self) -> Result<ExchangeRate, QuoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self.steps.lock().pop_front();
        match step {
            Some(Step { result, delay }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                result
            }
            None => Err(QuoteError::Request("script exhausted".into())),
        }
    }
}
