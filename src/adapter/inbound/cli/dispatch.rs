//! Routes parsed commands to their handlers.

use std::path::Path;

use super::command::{Commands, ConfigCommand, SettingsCommand};
use super::session::Session;
use super::{config, rate, send, settings, watch};
use crate::application::desk::Desk;
use crate::error::{Error, Result};

/// Run a `config` subcommand. These never build a desk.
pub fn execute_config(command: &ConfigCommand, path: &Path) -> Result<()> {
    match command {
        ConfigCommand::Init(args) => config::execute_init(path, args.force),
        ConfigCommand::Show => config::execute_show(path),
        ConfigCommand::Validate => config::execute_validate(path),
    }
}

/// Run a desk command after authenticating `code`.
pub async fn execute(command: &Commands, desk: &Desk, code: Option<&str>) -> Result<()> {
    if matches!(command, Commands::Config(_)) {
        return Err(Error::InvalidRequest(
            "config commands are handled without a desk".into(),
        ));
    }

    let session = Session::open(desk, code).await?;
    match command {
        Commands::Rate(args) => rate::execute(desk, &session, args).await,
        Commands::Send(args) => send::execute(desk, &session, args).await,
        Commands::Watch(args) => watch::execute(desk, &session, args).await,
        Commands::Settings(SettingsCommand::Show) => settings::execute_show(&session),
        Commands::Settings(SettingsCommand::Set(args)) => {
            settings::execute_set(desk, &session, args).await
        }
        Commands::Config(_) => Ok(()),
    }
}
