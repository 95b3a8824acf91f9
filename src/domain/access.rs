//! Access roles.

use std::fmt;

use serde::Serialize;

/// Coarse-grained role granted by a shared access code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May quote and send conversions.
    Client,
    /// May also edit desk settings.
    Admin,
}

impl Role {
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client => f.write_str("client"),
            Self::Admin => f.write_str("admin"),
        }
    }
}
