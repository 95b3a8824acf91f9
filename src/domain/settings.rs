//! Operator settings.
//!
//! [`AppSettings`] is the single configuration record the desk prices with.
//! It is passed explicitly to every calculation; nothing reads it from global
//! state.

use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Default admin code.
pub const DEFAULT_ADMIN_CODE: &str = "ADMIN2024";

/// Default bank details shown to customers paying in reais.
pub const DEFAULT_BANK_DETAILS: &str =
    "PIX: su-email-o-telefono@pix.com.br\nBanco: Nubank\nNombre: Tu Nombre";

/// Operator-entered overrides for the two P2P venues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualRates {
    #[serde(with = "rust_decimal::serde::float")]
    pub bybit_ves: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub bybit_brl: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub binance_ves: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub binance_brl: Decimal,
}

impl Default for ManualRates {
    fn default() -> Self {
        Self {
            bybit_ves: dec!(545.00),
            bybit_brl: dec!(5.80),
            binance_ves: dec!(544.00),
            binance_brl: dec!(5.82),
        }
    }
}

/// Desk-wide settings record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Profit margin in percentage points (0–100).
    #[serde(with = "rust_decimal::serde::float")]
    pub profit_margin: Decimal,
    /// Shared admin secret.
    pub admin_code: String,
    /// Free-text payment details for customers paying in reais.
    pub brazil_bank_details: String,
    /// When set, [`ManualRates`] replace the provider quote entirely.
    pub is_manual_mode: bool,
    pub manual_rates: ManualRates,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            profit_margin: dec!(2),
            admin_code: DEFAULT_ADMIN_CODE.to_string(),
            brazil_bank_details: DEFAULT_BANK_DETAILS.to_string(),
            is_manual_mode: false,
            manual_rates: ManualRates::default(),
        }
    }
}

impl AppSettings {
    /// Check the rules an admin save must satisfy.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MarginOutOfRange`] for margins outside
    /// `[0, 100]` and [`DomainError::NegativeRate`] for negative overrides.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.profit_margin < Decimal::ZERO || self.profit_margin > Decimal::ONE_HUNDRED {
            return Err(DomainError::MarginOutOfRange {
                margin: self.profit_margin,
            });
        }

        let rates = [
            ("bybitVes", self.manual_rates.bybit_ves),
            ("bybitBrl", self.manual_rates.bybit_brl),
            ("binanceVes", self.manual_rates.binance_ves),
            ("binanceBrl", self.manual_rates.binance_brl),
        ];
        for (field, value) in rates {
            if value < Decimal::ZERO {
                return Err(DomainError::NegativeRate { field, value });
            }
        }

        Ok(())
    }
}

/// A set of admin-panel edits.
///
/// Numeric fields hold the raw text the operator typed; text that does not
/// parse as a number is stored as zero. Parsed numbers are narrowed to the
/// nearest `f64`, the precision the stored record keeps.
#[derive(Debug, Clone, Default)]
pub struct SettingsEdit {
    pub profit_margin: Option<String>,
    pub is_manual_mode: Option<bool>,
    pub bybit_ves: Option<String>,
    pub bybit_brl: Option<String>,
    pub binance_ves: Option<String>,
    pub binance_brl: Option<String>,
    pub brazil_bank_details: Option<String>,
}

impl SettingsEdit {
    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profit_margin.is_none()
            && self.is_manual_mode.is_none()
            && self.bybit_ves.is_none()
            && self.bybit_brl.is_none()
            && self.binance_ves.is_none()
            && self.binance_brl.is_none()
            && self.brazil_bank_details.is_none()
    }

    /// Produce the edited settings. The admin code is never touched.
    #[must_use]
    pub fn apply(&self, current: &AppSettings) -> AppSettings {
        let mut next = current.clone();

        if let Some(margin) = &self.profit_margin {
            next.profit_margin = lenient_number(margin);
        }
        if let Some(manual) = self.is_manual_mode {
            next.is_manual_mode = manual;
        }
        if let Some(value) = &self.bybit_ves {
            next.manual_rates.bybit_ves = lenient_number(value);
        }
        if let Some(value) = &self.bybit_brl {
            next.manual_rates.bybit_brl = lenient_number(value);
        }
        if let Some(value) = &self.binance_ves {
            next.manual_rates.binance_ves = lenient_number(value);
        }
        if let Some(value) = &self.binance_brl {
            next.manual_rates.binance_brl = lenient_number(value);
        }
        if let Some(details) = &self.brazil_bank_details {
            next.brazil_bank_details = details.clone();
        }

        next
    }
}

fn lenient_number(text: &str) -> Decimal {
    Decimal::from_str(text.trim().replace(',', ".").as_str()).map_or(Decimal::ZERO, storable)
}

/// Round `value` to what survives a float encoding of the settings record.
fn storable(value: Decimal) -> Decimal {
    value
        .to_f64()
        .and_then(|float| {
            Decimal::from_str(&float.to_string())
                .ok()
                .or_else(|| Decimal::from_f64(float))
        })
        .unwrap_or(Decimal::ZERO)
}
