//! Shared-code access control.

use crate::domain::access::Role;
use crate::domain::settings::AppSettings;
use crate::port::inbound::access::CredentialValidator;

/// Default client access codes.
pub const DEFAULT_ACCESS_CODES: [&str; 4] = ["ENVIO2024", "BRASIL2024", "VES2024", "ADMIN2024"];

/// Validates codes against a fixed client list and the current admin code.
///
/// Comparison ignores case and surrounding whitespace. A code matching the
/// admin code grants [`Role::Admin`] whether or not it is also listed.
#[derive(Debug, Clone)]
pub struct SharedCodeValidator {
    codes: Vec<String>,
    admin_code: String,
}

impl SharedCodeValidator {
    pub fn new<I, S>(codes: I, admin_code: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            codes: codes.into_iter().map(|c| normalize(c.as_ref())).collect(),
            admin_code: normalize(admin_code),
        }
    }

    /// Validator for the admin code stored in `settings`.
    pub fn for_settings<I, S>(codes: I, settings: &AppSettings) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(codes, &settings.admin_code)
    }
}

impl Default for SharedCodeValidator {
    fn default() -> Self {
        Self::new(DEFAULT_ACCESS_CODES, crate::domain::settings::DEFAULT_ADMIN_CODE)
    }
}

impl CredentialValidator for SharedCodeValidator {
    fn validate(&self, code: &str) -> Option<Role> {
        let code = normalize(code);
        if code.is_empty() {
            return None;
        }
        if !self.admin_code.is_empty() && code == self.admin_code {
            return Some(Role::Admin);
        }
        self.codes
            .iter()
            .any(|known| *known == code)
            .then_some(Role::Client)
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}
