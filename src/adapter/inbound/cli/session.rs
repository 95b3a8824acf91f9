//! Access-code session for desk commands.

use std::io::IsTerminal;

use dialoguer::Password;

use crate::adapter::inbound::cli::output;
use crate::application::desk::Desk;
use crate::application::settings::service::{RemoteOutcome, SettingsLoad, SettingsOrigin};
use crate::domain::access::Role;
use crate::error::{Error, Result};

/// Loaded settings plus the role granted for this invocation.
pub struct Session {
    pub load: SettingsLoad,
    pub role: Role,
}

impl Session {
    /// Load settings and authenticate `code`, prompting for it on a
    /// terminal when it was not given.
    pub async fn open(desk: &Desk, code: Option<&str>) -> Result<Self> {
        let load = desk.load_settings().await;
        if let RemoteOutcome::Failed(reason) = &load.remote {
            output::warning(&format!(
                "Remote settings unavailable ({reason}); using {} settings",
                origin_label(load.origin)
            ));
        }

        let code = match code {
            Some(code) => code.to_string(),
            None => prompt_code()?,
        };
        let role = desk.authenticate(&load.settings, &code)?;
        Ok(Self { load, role })
    }

    /// Fail unless the session holds the admin role.
    pub fn require_admin(&self) -> Result<()> {
        if self.role.is_admin() {
            Ok(())
        } else {
            Err(Error::AccessDenied(
                "this command requires the admin code".into(),
            ))
        }
    }
}

#[must_use]
pub const fn origin_label(origin: SettingsOrigin) -> &'static str {
    match origin {
        SettingsOrigin::Remote => "remote",
        SettingsOrigin::Local => "local",
        SettingsOrigin::Default => "default",
    }
}

fn prompt_code() -> Result<String> {
    if output::is_json() || !std::io::stdin().is_terminal() {
        return Err(Error::AccessDenied(
            "no access code given; pass --code or set ENVIOS_CODE".into(),
        ));
    }
    let code = Password::new().with_prompt("Código de acceso").interact()?;
    Ok(code)
}
