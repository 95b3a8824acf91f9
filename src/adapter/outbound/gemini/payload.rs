//! Strict parsing of the model's JSON answer.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::QuoteError;

/// The seven prices a quote needs. Every field is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RatesPayload {
    #[serde(with = "rust_decimal::serde::float")]
    pub usd_ves: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub usd_brl: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub brl_to_ves: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub binance_ves: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub binance_brl: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub bybit_ves: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub bybit_brl: Decimal,
}

impl RatesPayload {
    pub const FIELDS: [&'static str; 7] = [
        "usdVes",
        "usdBrl",
        "brlToVes",
        "binanceVes",
        "binanceBrl",
        "bybitVes",
        "bybitBrl",
    ];

    /// Parse the model text, tolerating a Markdown code fence around it.
    pub fn parse(text: &str) -> Result<Self, QuoteError> {
        serde_json::from_str(strip_fence(text)).map_err(|e| QuoteError::Malformed(e.to_string()))
    }
}

fn strip_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
