//! sap-config-guard CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use sap_config_guard::cli::{commands, handle_error, Cli, Commands};
use sap_config_guard::infrastructure::config::SettingsLoader;
use sap_config_guard::infrastructure::logging::LoggerImpl;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match SettingsLoader::load(cli.settings.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            handle_error(&err, cli.json);
            return ExitCode::FAILURE;
        }
    };

    let _logger = match LoggerImpl::init(&settings.logging) {
        Ok(logger) => logger,
        Err(err) => {
            handle_error(&err, cli.json);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Validate(args) => commands::validate::execute(args, cli.json, &settings),
        Commands::Diff(args) => commands::diff::execute(args, cli.json),
    };

    result.unwrap_or_else(|err| {
        handle_error(&err, cli.json);
        ExitCode::FAILURE
    })
}
