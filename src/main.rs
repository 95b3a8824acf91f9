use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use envios::adapter::inbound::cli::command::{Cli, ColorChoice, Commands};
use envios::adapter::inbound::cli::diagnostic::ConfigDiagnostic;
use envios::adapter::inbound::cli::output::{self, OutputConfig};
use envios::adapter::inbound::cli::{dispatch, operator};
use envios::error::{ConfigError, Error, Result};
use envios::infrastructure::bootstrap::{build_desk, build_desk_with};
use envios::infrastructure::config::settings::Config;
use envios::infrastructure::operator::ConfigOperator;
use envios::port::outbound::handoff::LogHandoff;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    let _ = operator::install(Box::new(ConfigOperator));

    if let Err(e) = run(&cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    if let Commands::Config(command) = &cli.command {
        return dispatch::execute_config(command, &cli.config);
    }

    let config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::Parse(err))) => {
            report_parse_error(&cli.config, &err);
            std::process::exit(1);
        }
        Err(e) => return Err(e),
    };

    config.logging.clone().with_verbosity(cli.verbose).init();
    info!(config = %cli.config.display(), "envios starting");

    let desk = if cli.json {
        build_desk_with(&config, Arc::new(LogHandoff))?
    } else {
        build_desk(&config)?
    };

    dispatch::execute(&cli.command, &desk, cli.code.as_deref()).await
}

fn report_parse_error(path: &Path, err: &toml::de::Error) {
    let src = std::fs::read_to_string(path).unwrap_or_default();
    let diagnostic = ConfigDiagnostic::from_toml(path.display().to_string(), &src, err);
    eprintln!("{:?}", miette::Report::new(diagnostic));
}
