//! Domain validation errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when a domain rule is violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Profit margin must stay within percentage bounds.
    #[error("profit margin must be between 0 and 100, got {margin}")]
    MarginOutOfRange {
        /// The rejected margin.
        margin: Decimal,
    },

    /// Manual rates cannot be negative.
    #[error("manual rate {field} must not be negative, got {value}")]
    NegativeRate {
        /// Name of the offending rate.
        field: &'static str,
        /// The rejected value.
        value: Decimal,
    },
}
