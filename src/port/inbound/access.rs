//! Credential validation port.

use crate::domain::access::Role;

/// Maps a presented access code to a role.
///
/// Codes are shared secrets: there is no per-user identity, no rotation and
/// no lockout.
pub trait CredentialValidator: Send + Sync {
    /// Return the granted role, or `None` when the code is not recognized.
    fn validate(&self, code: &str) -> Option<Role>;
}
