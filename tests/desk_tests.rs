//! End-to-end desk behavior over in-memory ports.

mod support;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::{NamedTempFile, TempDir};

use envios::application::quote::feed::FeedUpdate;
use envios::application::settings::service::{RemoteOutcome, SettingsOrigin};
use envios::domain::access::Role;
use envios::domain::currency::Direction;
use envios::domain::settings::{AppSettings, SettingsEdit};
use envios::domain::transaction::TransactionDraft;
use envios::error::{Error, QuoteError};
use envios::port::outbound::settings::LocalSettings;
use envios::testkit::quote::{sample_quote, ScriptedQuoteProvider};
use envios::testkit::settings::ScriptedRemote;
use support::assertions::assert_quoted_as;
use support::desk::{desk_on_file, desk_with};

fn draft(direction: Direction, amount: &str) -> TransactionDraft {
    TransactionDraft {
        direction,
        amount: amount.to_string(),
        beneficiary_name: "María González".into(),
        beneficiary_id: "V-20.111.222".into(),
        bank_name: "Banco de Venezuela".into(),
    }
}

#[tokio::test]
async fn forward_rate_applies_margin_to_market_cross() {
    let t = desk_with(
        ScriptedQuoteProvider::new().then_ok(sample_quote(dec!(545), dec!(5.80))),
        None,
    );
    let settings = AppSettings::default();

    assert!(matches!(t.desk.refresh_quote().await, FeedUpdate::Applied { .. }));
    let board = t.desk.board(&settings);

    assert_eq!(
        board.brl_to_ves,
        (dec!(545) / dec!(5.80)) * ((dec!(100) - dec!(2)) / dec!(100))
    );
    assert_quoted_as(board.brl_to_ves, dec!(92.0862));
}

#[tokio::test]
async fn reverse_rate_keeps_its_asymmetry() {
    let t = desk_with(
        ScriptedQuoteProvider::new().then_ok(sample_quote(dec!(545), dec!(5.80))),
        None,
    );
    t.desk.refresh_quote().await;
    let board = t.desk.board(&AppSettings::default());

    assert_quoted_as(board.ves_to_brl, dec!(0.010429));
    assert_quoted_as(dec!(1) / board.brl_to_ves, dec!(0.010859));
    assert_ne!(
        board.ves_to_brl.round_dp(6),
        (dec!(1) / board.brl_to_ves).round_dp(6)
    );
}

#[test]
fn zero_manual_brl_leaves_both_directions_unavailable() {
    let t = desk_with(ScriptedQuoteProvider::new(), None);
    let mut settings = AppSettings::default();
    settings.is_manual_mode = true;
    settings.manual_rates.bybit_brl = Decimal::ZERO;

    let board = t.desk.board(&settings);
    assert!(board.is_unavailable());
    assert_eq!(board.brl_to_ves, Decimal::ZERO);
    assert_eq!(board.ves_to_brl, Decimal::ZERO);
}

#[test]
fn confirm_refuses_invalid_drafts() {
    let t = desk_with(ScriptedQuoteProvider::new(), None);
    let mut settings = AppSettings::default();
    settings.is_manual_mode = true;

    assert!(t.desk.confirm(&settings, &draft(Direction::BrlToVes, "0")).is_none());
    assert!(t.desk.confirm(&settings, &draft(Direction::BrlToVes, "-3")).is_none());

    let mut blank = draft(Direction::BrlToVes, "100");
    blank.beneficiary_id = "  ".into();
    assert!(t.desk.confirm(&settings, &blank).is_none());
}

#[tokio::test]
async fn confirmed_amount_is_source_times_rate() {
    let t = desk_with(ScriptedQuoteProvider::new(), None);
    let tx = draft(Direction::BrlToVes, "100")
        .confirm(dec!(92.0862))
        .unwrap();
    assert_eq!(tx.amount_target(), dec!(9208.62));

    let mut settings = AppSettings::default();
    settings.is_manual_mode = true;
    let tx = t
        .desk
        .confirm(&settings, &draft(Direction::BrlToVes, "100"))
        .unwrap();
    assert_eq!(tx.amount_target(), tx.amount_source() * tx.rate_applied());
}

#[tokio::test]
async fn load_without_any_stored_copy_yields_defaults() {
    let t = desk_with(ScriptedQuoteProvider::new(), None);
    let load = t.desk.load_settings().await;

    assert_eq!(load.origin, SettingsOrigin::Default);
    assert_eq!(load.remote, RemoteOutcome::Disabled);
    assert_eq!(load.settings.profit_margin, dec!(2));
    assert_eq!(load.settings.admin_code, "ADMIN2024");
}

#[tokio::test]
async fn save_updates_local_copy_when_remote_fails() {
    let t = desk_with(
        ScriptedQuoteProvider::new(),
        Some(ScriptedRemote::failing("503 Service Unavailable")),
    );
    let edit = SettingsEdit {
        profit_margin: Some("4".into()),
        ..Default::default()
    };

    let (saved, report) = t
        .desk
        .update_settings(Role::Admin, &AppSettings::default(), &edit)
        .await
        .unwrap();

    assert!(report.remote.is_failed());
    assert_eq!(t.local.read().unwrap(), Some(saved));
    assert_eq!(t.remote.as_ref().unwrap().push_count(), 1);
}

#[tokio::test]
async fn save_then_load_round_trips_without_remote() {
    let t = desk_with(ScriptedQuoteProvider::new(), None);
    let edit = SettingsEdit {
        profit_margin: Some("3.25".into()),
        is_manual_mode: Some(true),
        bybit_ves: Some("610".into()),
        brazil_bank_details: Some("PIX: caja@envios.com.br".into()),
        ..Default::default()
    };

    let (saved, _) = t
        .desk
        .update_settings(Role::Admin, &AppSettings::default(), &edit)
        .await
        .unwrap();
    let load = t.desk.load_settings().await;

    assert_eq!(load.origin, SettingsOrigin::Local);
    assert_eq!(load.settings, saved);
}

#[tokio::test]
async fn saved_settings_survive_the_settings_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("brl_ves_settings.json");
    let edit = SettingsEdit {
        profit_margin: Some("2.123456789012345678".into()),
        bybit_brl: Some("5.80000000000000000001".into()),
        bybit_ves: Some("545,5".into()),
        ..Default::default()
    };

    let (saved, _) = desk_on_file(&path)
        .update_settings(Role::Admin, &AppSettings::default(), &edit)
        .await
        .unwrap();
    let load = desk_on_file(&path).load_settings().await;

    assert_eq!(load.origin, SettingsOrigin::Local);
    assert_eq!(load.settings, saved);
    assert_eq!(saved.manual_rates.bybit_brl, dec!(5.8));
}

#[tokio::test]
async fn remote_row_wins_over_local_copy() {
    let mut remote_settings = AppSettings::default();
    remote_settings.profit_margin = dec!(5);
    let t = desk_with(
        ScriptedQuoteProvider::new(),
        Some(ScriptedRemote::with_row(remote_settings.clone())),
    );
    t.local.write(&AppSettings::default()).unwrap();

    let load = t.desk.load_settings().await;
    assert_eq!(load.origin, SettingsOrigin::Remote);
    assert_eq!(load.settings, remote_settings);
}

#[tokio::test]
async fn manual_mode_masks_quote_failures() {
    let t = desk_with(
        ScriptedQuoteProvider::new().then_err(QuoteError::Request("timeout".into())),
        None,
    );
    t.desk.refresh_quote().await;

    let mut settings = AppSettings::default();
    assert!(t.desk.quote_view(&settings).warning.is_some());

    settings.is_manual_mode = true;
    assert!(t.desk.quote_view(&settings).warning.is_none());
}

#[test]
fn client_code_cannot_edit_settings() {
    let t = desk_with(ScriptedQuoteProvider::new(), None);
    let settings = AppSettings::default();

    let role = t.desk.authenticate(&settings, "brasil2024").unwrap();
    assert_eq!(role, Role::Client);

    let result = tokio_test::block_on(t.desk.update_settings(
        role,
        &settings,
        &SettingsEdit {
            profit_margin: Some("1".into()),
            ..Default::default()
        },
    ));
    assert!(matches!(result, Err(Error::AccessDenied(_))));
    assert!(t.local.read().unwrap().is_none());
}

#[test]
fn handoff_requires_existing_proof() {
    let t = desk_with(ScriptedQuoteProvider::new(), None);
    let mut settings = AppSettings::default();
    settings.is_manual_mode = true;
    let tx = t
        .desk
        .confirm(&settings, &draft(Direction::VesToBrl, "10000"))
        .unwrap();

    assert!(t.desk.hand_off(&tx, None).is_err());
    assert!(t.handoff.messages().is_empty());

    let proof = NamedTempFile::new().unwrap();
    let message = t.desk.hand_off(&tx, Some(proof.path())).unwrap();

    assert_eq!(message.recipient, "584121234567");
    assert!(message.body.contains("Bs. 10000.00"));
    assert!(message.body.contains("María González"));
    assert_eq!(t.handoff.messages(), vec![message]);
}
