//! Client-rate calculation.
//!
//! The client rate is the Bybit P2P cross rate (`ves / brl`) scaled by the
//! margin factor `(100 - margin) / 100`. The reverse direction inverts the
//! base and applies the same factor, so the two directions are not
//! reciprocals of each other:
//!
//! ```
//! use envios::domain::calculator::{base_rate, user_rate};
//! use envios::domain::currency::Direction;
//! use rust_decimal_macros::dec;
//!
//! let base = base_rate(dec!(545), dec!(5.80));
//! let forward = user_rate(base, Direction::BrlToVes, dec!(2));
//! let reverse = user_rate(base, Direction::VesToBrl, dec!(2));
//! assert_ne!(reverse.round_dp(6), (dec!(1) / forward).round_dp(6));
//! ```
//!
//! Every function here is total: degenerate input yields zero.

use rust_decimal::Decimal;
use serde::Serialize;

use super::currency::Direction;
use super::quote::ExchangeRate;
use super::settings::AppSettings;

/// Source of the base pair used for pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RateBasis {
    /// Operator-entered [`ManualRates`](super::settings::ManualRates).
    Manual,
    /// The latest provider quote.
    Market,
}

/// Cross rate `ves / brl`, or zero when `brl` is not positive.
#[must_use]
pub fn base_rate(ves: Decimal, brl: Decimal) -> Decimal {
    if brl > Decimal::ZERO {
        ves.checked_div(brl).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    }
}

/// Margin factor `(100 - margin) / 100`. Not range-checked.
#[must_use]
pub fn margin_factor(profit_margin: Decimal) -> Decimal {
    Decimal::ONE_HUNDRED
        .checked_sub(profit_margin)
        .and_then(|kept| kept.checked_div(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// Client-facing rate for `direction`.
///
/// Negative results (a margin above 100 or a negative base) clamp to zero.
#[must_use]
pub fn user_rate(base: Decimal, direction: Direction, profit_margin: Decimal) -> Decimal {
    let factor = margin_factor(profit_margin);

    let rate = match direction {
        Direction::BrlToVes => base.checked_mul(factor),
        Direction::VesToBrl if base > Decimal::ZERO => Decimal::ONE
            .checked_div(base)
            .and_then(|inverse| inverse.checked_mul(factor)),
        Direction::VesToBrl => Some(Decimal::ZERO),
    };

    rate.map_or(Decimal::ZERO, |r| r.max(Decimal::ZERO))
}

/// Pricing view over one settings record and the latest quote.
#[derive(Debug, Clone, Copy)]
pub struct RateCalculator<'a> {
    settings: &'a AppSettings,
    quote: Option<&'a ExchangeRate>,
}

impl<'a> RateCalculator<'a> {
    #[must_use]
    pub const fn new(settings: &'a AppSettings, quote: Option<&'a ExchangeRate>) -> Self {
        Self { settings, quote }
    }

    /// Which pair feeds the base rate.
    #[must_use]
    pub const fn basis(&self) -> RateBasis {
        if self.settings.is_manual_mode {
            RateBasis::Manual
        } else {
            RateBasis::Market
        }
    }

    /// The `(ves, brl)` pair in use; a missing quote reads as `(0, 0)`.
    #[must_use]
    pub fn pair(&self) -> (Decimal, Decimal) {
        match self.basis() {
            RateBasis::Manual => {
                let manual = &self.settings.manual_rates;
                (manual.bybit_ves, manual.bybit_brl)
            }
            RateBasis::Market => self
                .quote
                .and_then(|quote| quote.bybit)
                .map_or((Decimal::ZERO, Decimal::ZERO), |bybit| (bybit.ves, bybit.brl)),
        }
    }

    #[must_use]
    pub fn base(&self) -> Decimal {
        let (ves, brl) = self.pair();
        base_rate(ves, brl)
    }

    /// Client rate for `direction` at this instant.
    #[must_use]
    pub fn rate(&self, direction: Direction) -> Decimal {
        user_rate(self.base(), direction, self.settings.profit_margin)
    }

    /// Both directions at once, for display.
    #[must_use]
    pub fn board(&self) -> RateBoard {
        RateBoard {
            basis: self.basis(),
            base: self.base(),
            profit_margin: self.settings.profit_margin,
            brl_to_ves: self.rate(Direction::BrlToVes),
            ves_to_brl: self.rate(Direction::VesToBrl),
        }
    }
}

/// Snapshot of the client rates in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateBoard {
    pub basis: RateBasis,
    pub base: Decimal,
    pub profit_margin: Decimal,
    pub brl_to_ves: Decimal,
    pub ves_to_brl: Decimal,
}

impl RateBoard {
    /// True when no usable base rate exists.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.base.is_zero()
    }

    #[must_use]
    pub const fn rate(&self, direction: Direction) -> Decimal {
        match direction {
            Direction::BrlToVes => self.brl_to_ves,
            Direction::VesToBrl => self.ves_to_brl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quote::MarketRates;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn assert_near(actual: Decimal, expected: Decimal, tolerance: Decimal) {
        let diff = (actual - expected).abs();
        assert!(
            diff <= tolerance,
            "expected {expected} ± {tolerance}, got {actual}"
        );
    }

    fn quote_with_bybit(ves: Decimal, brl: Decimal) -> ExchangeRate {
        ExchangeRate {
            brl_to_ves: dec!(90),
            usd_ves: dec!(36),
            usd_brl: dec!(5),
            binance: Some(MarketRates::new(dec!(544), dec!(5.82))),
            bybit: Some(MarketRates::new(ves, brl)),
            last_updated: Utc::now(),
            source: "test".into(),
            grounding_sources: vec![],
        }
    }

    #[test]
    fn forward_rate_is_base_times_margin_factor() {
        let base = base_rate(dec!(545), dec!(5.80));
        let rate = user_rate(base, Direction::BrlToVes, dec!(2));
        assert_eq!(rate, (dec!(545) / dec!(5.80)) * ((dec!(100) - dec!(2)) / dec!(100)));
        assert_near(rate, dec!(92.0862), dec!(0.0001));
    }

    #[test]
    fn zero_brl_means_unavailable_in_both_directions() {
        let base = base_rate(dec!(545), Decimal::ZERO);
        assert_eq!(base, Decimal::ZERO);
        assert_eq!(user_rate(base, Direction::BrlToVes, dec!(2)), Decimal::ZERO);
        assert_eq!(user_rate(base, Direction::VesToBrl, dec!(2)), Decimal::ZERO);
    }

    #[test]
    fn reverse_rate_is_not_reciprocal_of_forward() {
        let base = base_rate(dec!(545), dec!(5.80));
        let forward = user_rate(base, Direction::BrlToVes, dec!(2));
        let reverse = user_rate(base, Direction::VesToBrl, dec!(2));

        assert_near(base, dec!(93.96552), dec!(0.00001));
        assert_near(reverse, dec!(0.010429), dec!(0.000001));
        assert_near(dec!(1) / forward, dec!(0.010859), dec!(0.000001));
        assert_ne!(reverse.round_dp(6), (dec!(1) / forward).round_dp(6));
    }

    #[test]
    fn full_margin_collapses_rate() {
        let base = base_rate(dec!(545), dec!(5.80));
        assert_eq!(user_rate(base, Direction::BrlToVes, dec!(100)), Decimal::ZERO);
        assert_eq!(user_rate(base, Direction::VesToBrl, dec!(100)), Decimal::ZERO);
    }

    #[test]
    fn margin_above_hundred_clamps_to_zero() {
        let base = base_rate(dec!(545), dec!(5.80));
        assert_eq!(user_rate(base, Direction::BrlToVes, dec!(150)), Decimal::ZERO);
    }

    #[test]
    fn negative_margin_inflates_rate() {
        let base = dec!(100);
        assert_eq!(user_rate(base, Direction::BrlToVes, dec!(-10)), dec!(110));
    }

    #[test]
    fn negative_brl_is_unavailable() {
        assert_eq!(base_rate(dec!(545), dec!(-5.8)), Decimal::ZERO);
    }

    #[test]
    fn calculator_uses_manual_rates_in_manual_mode() {
        let mut settings = AppSettings::default();
        settings.is_manual_mode = true;
        settings.manual_rates.bybit_ves = dec!(600);
        settings.manual_rates.bybit_brl = dec!(6);
        let quote = quote_with_bybit(dec!(545), dec!(5.80));

        let calculator = RateCalculator::new(&settings, Some(&quote));
        assert_eq!(calculator.basis(), RateBasis::Manual);
        assert_eq!(calculator.base(), dec!(100));
        assert_eq!(calculator.rate(Direction::BrlToVes), dec!(98));
    }

    #[test]
    fn calculator_uses_quote_in_market_mode() {
        let settings = AppSettings::default();
        let quote = quote_with_bybit(dec!(600), dec!(6));

        let calculator = RateCalculator::new(&settings, Some(&quote));
        assert_eq!(calculator.basis(), RateBasis::Market);
        assert_eq!(calculator.rate(Direction::BrlToVes), dec!(98));
    }

    #[test]
    fn calculator_without_quote_is_unavailable() {
        let settings = AppSettings::default();
        let board = RateCalculator::new(&settings, None).board();

        assert!(board.is_unavailable());
        assert_eq!(board.brl_to_ves, Decimal::ZERO);
        assert_eq!(board.ves_to_brl, Decimal::ZERO);
    }

    #[test]
    fn calculator_treats_missing_bybit_pair_as_unavailable() {
        let settings = AppSettings::default();
        let mut quote = quote_with_bybit(dec!(545), dec!(5.80));
        quote.bybit = None;

        let calculator = RateCalculator::new(&settings, Some(&quote));
        assert_eq!(calculator.base(), Decimal::ZERO);
    }

    #[test]
    fn board_reports_both_directions() {
        let settings = AppSettings::default();
        let quote = quote_with_bybit(dec!(545), dec!(5.80));
        let board = RateCalculator::new(&settings, Some(&quote)).board();

        assert_eq!(board.rate(Direction::BrlToVes), board.brl_to_ves);
        assert_eq!(board.rate(Direction::VesToBrl), board.ves_to_brl);
        assert_eq!(board.profit_margin, dec!(2));
        assert!(!board.is_unavailable());
    }
}
