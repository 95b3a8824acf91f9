//! Exchange-rate quote snapshots.
//!
//! A quote is produced once per successful provider fetch and never mutated
//! afterwards; the next applied fetch supersedes it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price of one reference asset (USDT) in each fiat currency on one venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketRates {
    /// Bolívares per unit.
    #[serde(with = "rust_decimal::serde::float")]
    pub ves: Decimal,
    /// Reais per unit.
    #[serde(with = "rust_decimal::serde::float")]
    pub brl: Decimal,
}

impl MarketRates {
    #[must_use]
    pub const fn new(ves: Decimal, brl: Decimal) -> Self {
        Self { ves, brl }
    }
}

/// Web reference cited by the quote provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

/// A timestamped exchange-rate snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    /// Official BRL→VES cross rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub brl_to_ves: Decimal,
    /// Official USD rate in Venezuela (BCV).
    #[serde(with = "rust_decimal::serde::float")]
    pub usd_ves: Decimal,
    /// Official USD rate in Brazil (BCB).
    #[serde(with = "rust_decimal::serde::float")]
    pub usd_brl: Decimal,
    /// Binance P2P reference pair.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binance: Option<MarketRates>,
    /// Bybit P2P pair, the basis for client pricing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bybit: Option<MarketRates>,
    pub last_updated: DateTime<Utc>,
    /// Provenance label.
    pub source: String,
    #[serde(default)]
    pub grounding_sources: Vec<GroundingSource>,
}
