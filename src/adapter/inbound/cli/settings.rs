//! Handlers for the `settings` command group.

use serde_json::json;

use super::command::SettingsSetArgs;
use super::output;
use super::session::{origin_label, Session};
use crate::application::desk::Desk;
use crate::application::settings::service::RemoteOutcome;
use crate::domain::settings::{AppSettings, SettingsEdit};
use crate::error::{Error, Result};

fn print_settings(settings: &AppSettings) {
    output::section("Pricing");
    output::field("Margin", format!("{}%", settings.profit_margin));
    output::field(
        "Mode",
        if settings.is_manual_mode {
            "manual"
        } else {
            "market"
        },
    );

    let manual = &settings.manual_rates;
    output::section("Manual rates");
    output::field("Bybit", format!("{} VES / {} BRL", manual.bybit_ves, manual.bybit_brl));
    output::field(
        "Binance",
        format!("{} VES / {} BRL", manual.binance_ves, manual.binance_brl),
    );

    output::section("Bank details");
    output::lines(&settings.brazil_bank_details);
}

fn remote_label(remote: &RemoteOutcome) -> String {
    match remote {
        RemoteOutcome::Disabled => "not configured".to_string(),
        RemoteOutcome::Synced => "synced".to_string(),
        RemoteOutcome::Empty => "no row".to_string(),
        RemoteOutcome::Failed(reason) => format!("failed: {reason}"),
    }
}

/// Execute `settings show`.
pub fn execute_show(session: &Session) -> Result<()> {
    session.require_admin()?;
    let load = &session.load;

    if output::is_json() {
        output::json_output(json!({
            "command": "settings.show",
            "origin": load.origin,
            "remote": load.remote,
            "settings": load.settings,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Settings");
    output::field("Loaded from", origin_label(load.origin));
    output::field("Remote", remote_label(&load.remote));
    print_settings(&load.settings);
    Ok(())
}

fn edit_from(args: &SettingsSetArgs) -> SettingsEdit {
    let is_manual_mode = match (args.manual, args.market) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    };

    SettingsEdit {
        profit_margin: args.margin.clone(),
        is_manual_mode,
        bybit_ves: args.bybit_ves.clone(),
        bybit_brl: args.bybit_brl.clone(),
        binance_ves: args.binance_ves.clone(),
        binance_brl: args.binance_brl.clone(),
        brazil_bank_details: args.bank_details.clone(),
    }
}

/// Execute `settings set`.
pub async fn execute_set(desk: &Desk, session: &Session, args: &SettingsSetArgs) -> Result<()> {
    session.require_admin()?;

    let edit = edit_from(args);
    if edit.is_empty() {
        return Err(Error::InvalidRequest(
            "nothing to change; pass at least one setting".into(),
        ));
    }

    let (saved, report) = desk
        .update_settings(session.role, &session.load.settings, &edit)
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "settings.set",
            "remote": report.remote,
            "settings": saved,
        }));
        return Ok(());
    }

    output::success("Settings saved locally");
    match &report.remote {
        RemoteOutcome::Failed(reason) => {
            output::warning(&format!("Remote copy not updated: {reason}"));
        }
        RemoteOutcome::Synced => output::success("Remote copy updated"),
        RemoteOutcome::Disabled | RemoteOutcome::Empty => {}
    }
    print_settings(&saved);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_maps_mode_flags() {
        let args = SettingsSetArgs {
            manual: true,
            ..Default::default()
        };
        assert_eq!(edit_from(&args).is_manual_mode, Some(true));

        let args = SettingsSetArgs {
            market: true,
            ..Default::default()
        };
        assert_eq!(edit_from(&args).is_manual_mode, Some(false));

        assert!(edit_from(&SettingsSetArgs::default()).is_empty());
    }

    #[test]
    fn edit_keeps_raw_numeric_text() {
        let args = SettingsSetArgs {
            margin: Some("3,5".into()),
            bybit_brl: Some("abc".into()),
            ..Default::default()
        };
        let edit = edit_from(&args);
        assert_eq!(edit.profit_margin.as_deref(), Some("3,5"));
        assert_eq!(edit.bybit_brl.as_deref(), Some("abc"));
    }

    #[test]
    fn remote_label_includes_failure_reason() {
        assert_eq!(
            remote_label(&RemoteOutcome::Failed("timeout".into())),
            "failed: timeout"
        );
        assert_eq!(remote_label(&RemoteOutcome::Disabled), "not configured");
    }
}
