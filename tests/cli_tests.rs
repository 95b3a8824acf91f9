//! CLI integration tests. None of these reach the network: desk commands
//! run in manual mode against a local settings file.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use envios::domain::settings::AppSettings;

fn envios() -> Command {
    let mut cmd = cargo_bin_cmd!("envios");
    for var in [
        "GEMINI_API_KEY",
        "API_KEY",
        "SUPABASE_URL",
        "SUPABASE_KEY",
        "ENVIOS_CODE",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// A workspace with a config file and a manual-mode settings slot.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let slot = dir.path().join("settings.json");

        let mut settings = AppSettings::default();
        settings.is_manual_mode = true;
        settings.manual_rates.bybit_ves = dec!(600);
        settings.manual_rates.bybit_brl = dec!(6);
        fs::write(&slot, serde_json::to_string(&settings).unwrap()).unwrap();

        let config = format!(
            "[store]\nlocal_path = {:?}\n\n[handoff]\nphone_number = \"584129998877\"\n",
            slot.display().to_string()
        );
        fs::write(dir.path().join("config.toml"), config).unwrap();
        Self { dir }
    }

    fn config(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn config_arg(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn help_lists_commands() {
    envios()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("envios"))
        .stdout(predicate::str::contains("rate"))
        .stdout(predicate::str::contains("send"))
        .stdout(predicate::str::contains("watch"))
        .stdout(predicate::str::contains("settings"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_prints_name() {
    envios()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("envios"));
}

#[test]
fn config_init_writes_valid_template() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    envios()
        .args(["config", "init", "--config", &config_arg(&path)])
        .assert()
        .success();
    assert!(path.exists());

    envios()
        .args(["config", "validate", "--config", &config_arg(&path)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file is valid"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let ws = Workspace::new();
    envios()
        .args(["config", "init", "--config", &config_arg(&ws.config())])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_validate_reports_invalid_value() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[quote]\ntimeout_secs = 0\n").unwrap();

    envios()
        .args(["config", "validate", "--config", &config_arg(&path)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quote.timeout_secs"));
}

#[test]
fn malformed_config_is_rendered_as_diagnostic() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[quote\nmodel = 1\n").unwrap();

    envios()
        .args(["rate", "--code", "ENVIO2024", "--config", &config_arg(&path)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("envios::config"));
}

#[test]
fn rate_in_manual_mode_prints_board_as_json() {
    let ws = Workspace::new();

    envios()
        .args(["--json", "rate", "--amount", "100", "--config"])
        .arg(ws.config())
        .env("ENVIOS_CODE", "envio2024")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"command\":\"rate\""))
        .stdout(predicate::str::contains("\"basis\":\"manual\""))
        .stdout(predicate::str::contains("\"settings\":\"local\""));
}

#[test]
fn rate_rejects_unknown_code() {
    let ws = Workspace::new();

    envios()
        .args(["rate", "--code", "NOPE", "--config"])
        .arg(ws.config())
        .assert()
        .failure()
        .stderr(predicate::str::contains("access denied"));
}

#[test]
fn rate_without_code_off_terminal_is_denied() {
    let ws = Workspace::new();

    envios()
        .args(["rate", "--config"])
        .arg(ws.config())
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ENVIOS_CODE"));
}

#[test]
fn send_without_proof_only_quotes() {
    let ws = Workspace::new();

    envios()
        .args([
            "send", "--amount", "100", "--name", "Ana Pérez", "--id", "V-1234567", "--bank",
            "Banesco", "--code", "VES2024", "--config",
        ])
        .arg(ws.config())
        .assert()
        .success()
        .stdout(predicate::str::contains("Bs. 9800.00"))
        .stdout(predicate::str::contains("--proof"))
        .stdout(predicate::str::contains("Para:").not());
}

#[test]
fn send_with_proof_hands_off_to_operator() {
    let ws = Workspace::new();
    let proof = ws.path("comprobante.jpg");
    fs::write(&proof, b"receipt").unwrap();

    envios()
        .args([
            "send", "--amount", "100", "--name", "Ana Pérez", "--id", "V-1234567", "--bank",
            "Banesco", "--code", "VES2024", "--proof",
        ])
        .arg(&proof)
        .arg("--config")
        .arg(ws.config())
        .assert()
        .success()
        .stdout(predicate::str::contains("Para: +584129998877"))
        .stdout(predicate::str::contains("*SOLICITUD DE ENVÍO*"))
        .stdout(predicate::str::contains("Tasa aplicada:* 98.0000"));
}

#[test]
fn send_with_missing_proof_file_fails() {
    let ws = Workspace::new();

    envios()
        .args([
            "send", "--amount", "100", "--name", "Ana", "--id", "V-1", "--bank", "Banesco",
            "--code", "VES2024", "--proof",
        ])
        .arg(ws.path("missing.jpg"))
        .arg("--config")
        .arg(ws.config())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn send_reports_every_missing_field() {
    let ws = Workspace::new();

    envios()
        .args([
            "send", "--amount", "0", "--name", " ", "--id", "V-1", "--bank", "Banesco",
            "--code", "VES2024", "--config",
        ])
        .arg(ws.config())
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount must be a number"))
        .stderr(predicate::str::contains("beneficiary name is required"));
}

#[test]
fn settings_require_admin_code() {
    let ws = Workspace::new();

    envios()
        .args(["settings", "show", "--code", "ENVIO2024", "--config"])
        .arg(ws.config())
        .assert()
        .failure()
        .stderr(predicate::str::contains("admin"));
}

#[test]
fn settings_set_persists_to_local_slot() {
    let ws = Workspace::new();

    envios()
        .args(["settings", "set", "--margin", "3,5", "--code", "ADMIN2024", "--config"])
        .arg(ws.config())
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved locally"));

    let saved: AppSettings =
        serde_json::from_str(&fs::read_to_string(ws.path("settings.json")).unwrap()).unwrap();
    assert_eq!(saved.profit_margin, dec!(3.5));
    assert!(saved.is_manual_mode);
}

#[test]
fn settings_set_rejects_out_of_range_margin() {
    let ws = Workspace::new();

    envios()
        .args(["settings", "set", "--margin", "120", "--code", "ADMIN2024", "--config"])
        .arg(ws.config())
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 0 and 100"));
}
