//! Currencies and conversion directions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fiat currencies handled by the desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Brazilian real.
    Brl,
    /// Venezuelan bolívar.
    Ves,
}

impl Currency {
    /// ISO-style currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Brl => "BRL",
            Self::Ves => "VES",
        }
    }

    /// Symbol used in customer-facing text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Brl => "R$",
            Self::Ves => "Bs.",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Direction of a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    /// Customer pays reais, beneficiary receives bolívares.
    #[default]
    BrlToVes,
    /// Customer pays bolívares, beneficiary receives reais.
    VesToBrl,
}

impl Direction {
    /// Currency the customer pays in.
    #[must_use]
    pub const fn source(self) -> Currency {
        match self {
            Self::BrlToVes => Currency::Brl,
            Self::VesToBrl => Currency::Ves,
        }
    }

    /// Currency the beneficiary receives.
    #[must_use]
    pub const fn target(self) -> Currency {
        match self {
            Self::BrlToVes => Currency::Ves,
            Self::VesToBrl => Currency::Brl,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::BrlToVes => Self::VesToBrl,
            Self::VesToBrl => Self::BrlToVes,
        }
    }

    /// Wire name (`BRL_TO_VES` / `VES_TO_BRL`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BrlToVes => "BRL_TO_VES",
            Self::VesToBrl => "VES_TO_BRL",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
