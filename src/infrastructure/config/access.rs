//! Access and handoff configuration.

use serde::Deserialize;

use crate::application::access::DEFAULT_ACCESS_CODES;
use crate::application::handoff::DEFAULT_PHONE_NUMBER;

/// Client access codes. The admin code lives in the desk settings record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    pub codes: Vec<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            codes: DEFAULT_ACCESS_CODES.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Handoff channel settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HandoffConfig {
    /// Operator number, international format without `+`.
    pub phone_number: String,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            phone_number: DEFAULT_PHONE_NUMBER.to_string(),
        }
    }
}
