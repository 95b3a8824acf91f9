//! Conversion requests and the transactions they freeze into.
//!
//! A [`TransactionDraft`] is the editable form. It can be confirmed into a
//! [`Transaction`] only while every field is valid; an invalid draft simply
//! yields nothing.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use super::currency::Direction;

/// Parse an amount the way the desk's input field accepts it.
///
/// A comma is read as the decimal separator. Only digits and a single
/// separator are allowed; at least one digit is required.
#[must_use]
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let normalized = text.trim().replacen(',', ".", 1);

    let mut separators = 0;
    let mut digits = 0;
    for ch in normalized.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => separators += 1,
            _ => return None,
        }
    }
    if digits == 0 || separators > 1 {
        return None;
    }

    let canonical = match (normalized.starts_with('.'), normalized.ends_with('.')) {
        (true, _) => format!("0{normalized}"),
        (false, true) => normalized.trim_end_matches('.').to_string(),
        (false, false) => normalized,
    };

    Decimal::from_str(&canonical).ok()
}

/// Reason a draft cannot be confirmed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftProblem {
    /// The amount is missing, not a number, or not above zero.
    InvalidAmount,
    MissingBeneficiaryName,
    MissingBeneficiaryId,
    MissingBankName,
}

impl fmt::Display for DraftProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InvalidAmount => "amount must be a number greater than zero",
            Self::MissingBeneficiaryName => "beneficiary name is required",
            Self::MissingBeneficiaryId => "beneficiary ID is required",
            Self::MissingBankName => "bank name is required",
        };
        f.write_str(text)
    }
}

/// Form input for one conversion.
#[derive(Debug, Clone, Default)]
pub struct TransactionDraft {
    pub direction: Direction,
    /// Amount exactly as typed.
    pub amount: String,
    pub beneficiary_name: String,
    pub beneficiary_id: String,
    pub bank_name: String,
}

impl TransactionDraft {
    /// Parsed amount, when it is a positive number.
    #[must_use]
    pub fn source_amount(&self) -> Option<Decimal> {
        parse_amount(&self.amount).filter(|amount| *amount > Decimal::ZERO)
    }

    /// Everything that currently blocks confirmation.
    #[must_use]
    pub fn problems(&self) -> Vec<DraftProblem> {
        let mut problems = Vec::new();
        if self.source_amount().is_none() {
            problems.push(DraftProblem::InvalidAmount);
        }
        if self.beneficiary_name.trim().is_empty() {
            problems.push(DraftProblem::MissingBeneficiaryName);
        }
        if self.beneficiary_id.trim().is_empty() {
            problems.push(DraftProblem::MissingBeneficiaryId);
        }
        if self.bank_name.trim().is_empty() {
            problems.push(DraftProblem::MissingBankName);
        }
        problems
    }

    #[must_use]
    pub fn is_confirmable(&self) -> bool {
        self.problems().is_empty()
    }

    /// Amount the beneficiary would receive at `rate`, for live preview.
    #[must_use]
    pub fn preview(&self, rate: Decimal) -> Decimal {
        self.source_amount()
            .and_then(|amount| amount.checked_mul(rate))
            .unwrap_or(Decimal::ZERO)
    }

    /// Freeze the draft at `rate`.
    ///
    /// Returns `None` while the draft is not confirmable.
    #[must_use]
    pub fn confirm(&self, rate: Decimal) -> Option<Transaction> {
        if !self.is_confirmable() {
            return None;
        }
        let amount_source = self.source_amount()?;
        let amount_target = amount_source.checked_mul(rate)?;

        Some(Transaction {
            direction: self.direction,
            amount_source,
            amount_target,
            rate_applied: rate,
            beneficiary_name: self.beneficiary_name.trim().to_string(),
            beneficiary_id: self.beneficiary_id.trim().to_string(),
            bank_name: self.bank_name.trim().to_string(),
        })
    }
}

/// A confirmed conversion. Immutable and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    direction: Direction,
    amount_source: Decimal,
    amount_target: Decimal,
    rate_applied: Decimal,
    beneficiary_name: String,
    beneficiary_id: String,
    bank_name: String,
}

impl Transaction {
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn amount_source(&self) -> Decimal {
        self.amount_source
    }

    /// Always `amount_source * rate_applied`.
    #[must_use]
    pub const fn amount_target(&self) -> Decimal {
        self.amount_target
    }

    #[must_use]
    pub const fn rate_applied(&self) -> Decimal {
        self.rate_applied
    }

    #[must_use]
    pub fn beneficiary_name(&self) -> &str {
        &self.beneficiary_name
    }

    #[must_use]
    pub fn beneficiary_id(&self) -> &str {
        &self.beneficiary_id
    }

    #[must_use]
    pub fn bank_name(&self) -> &str {
        &self.bank_name
    }
}
