//! Envios - a BRL↔VES remittance desk.
//!
//! Quotes P2P market rates, prices conversions with an operator margin and
//! hands confirmed transfers off to the operator for manual settlement.
//!
//! # Architecture
//!
//! - [`domain`] - Currencies, quotes, settings, pricing and transactions
//! - [`port`] - Inbound and outbound trait seams
//! - [`application`] - The [`Desk`](application::desk::Desk) facade, quote
//!   feed and poller, settings fallback chain and handoff composition
//! - [`adapter`] - CLI plus Gemini, Supabase, local file and console adapters
//! - [`infrastructure`] - TOML configuration, logging and wiring
//!
//! # Example
//!
//! ```
//! use envios::domain::calculator::RateCalculator;
//! use envios::domain::currency::Direction;
//! use envios::domain::settings::AppSettings;
//!
//! let mut settings = AppSettings::default();
//! settings.is_manual_mode = true;
//! let rate = RateCalculator::new(&settings, None).rate(Direction::BrlToVes);
//! assert!(rate > rust_decimal::Decimal::ZERO);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
