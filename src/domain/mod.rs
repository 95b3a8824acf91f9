//! Exchange-agnostic domain logic: rates, settings, transactions.

pub mod access;
pub mod calculator;
pub mod currency;
pub mod error;
pub mod quote;
pub mod settings;
pub mod transaction;
