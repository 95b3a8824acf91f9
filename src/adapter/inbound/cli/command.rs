//! Command-line interface definitions.
//!
//! `envios` quotes BRL↔VES remittances, records transfer requests and hands
//! them off to the operator, and lets the admin tune the desk settings.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::paths;
use crate::domain::currency::Direction;

/// BRL↔VES remittance desk
#[derive(Parser, Debug)]
#[command(name = "envios")]
#[command(version, about)]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Access code (prompted when omitted on a terminal)
    #[arg(long, global = true, env = "ENVIOS_CODE", hide_env_values = true)]
    pub code: Option<String>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the current client rates
    Rate(RateArgs),

    /// Quote a transfer and, with a proof attached, hand it off
    Send(SendArgs),

    /// Keep the quote fresh and print every update
    Watch(WatchArgs),

    /// Inspect or edit desk settings (admin code required)
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Conversion direction as typed on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    /// Customer pays reais, beneficiary receives bolívares
    #[default]
    BrlToVes,
    /// Customer pays bolívares, beneficiary receives reais
    VesToBrl,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::BrlToVes => Self::BrlToVes,
            DirectionArg::VesToBrl => Self::VesToBrl,
        }
    }
}

/// Arguments for `envios rate`.
#[derive(Args, Debug)]
pub struct RateArgs {
    /// Amount to preview, in the source currency
    #[arg(short, long)]
    pub amount: Option<String>,

    /// Direction used for the preview
    #[arg(short, long, value_enum, default_value_t = DirectionArg::BrlToVes)]
    pub direction: DirectionArg,
}

/// Arguments for `envios send`.
#[derive(Args, Debug)]
pub struct SendArgs {
    /// Conversion direction
    #[arg(short, long, value_enum, default_value_t = DirectionArg::BrlToVes)]
    pub direction: DirectionArg,

    /// Amount in the source currency (comma or dot as decimal separator)
    #[arg(short, long)]
    pub amount: String,

    /// Beneficiary full name
    #[arg(long)]
    pub name: String,

    /// Beneficiary national ID
    #[arg(long)]
    pub id: String,

    /// Beneficiary bank
    #[arg(long)]
    pub bank: String,

    /// Transfer proof (receipt image); required to hand off
    #[arg(long)]
    pub proof: Option<PathBuf>,
}

/// Arguments for `envios watch`.
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Override the refresh interval, in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,
}

/// Subcommands for `envios settings`.
#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Show the desk settings and where they were loaded from
    Show,
    /// Change one or more settings
    Set(SettingsSetArgs),
}

/// Arguments for `envios settings set`.
///
/// Numbers that do not parse are stored as zero.
#[derive(Args, Debug, Default)]
pub struct SettingsSetArgs {
    /// Profit margin in percent (0-100)
    #[arg(long)]
    pub margin: Option<String>,

    /// Price with the manual rates instead of the live quote
    #[arg(long, conflicts_with = "market")]
    pub manual: bool,

    /// Price with the live quote
    #[arg(long, conflicts_with = "manual")]
    pub market: bool,

    /// Manual Bybit VES price
    #[arg(long)]
    pub bybit_ves: Option<String>,

    /// Manual Bybit BRL price
    #[arg(long)]
    pub bybit_brl: Option<String>,

    /// Manual Binance VES price
    #[arg(long)]
    pub binance_ves: Option<String>,

    /// Manual Binance BRL price
    #[arg(long)]
    pub binance_brl: Option<String>,

    /// Payment details shown to customers paying in reais
    #[arg(long)]
    pub bank_details: Option<String>,
}

/// Subcommands for `envios config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a documented configuration template
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied
    Show,
    /// Validate the configuration file
    Validate,
}

/// Arguments for `envios config init`.
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
