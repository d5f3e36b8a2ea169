//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use super::commands::diff::DiffArgs;
use super::commands::validate::ValidateArgs;

#[derive(Parser, Debug)]
#[command(name = "sap-config-guard")]
#[command(
    about = "Fail-fast configuration validation & environment drift detection for SAP landscapes",
    long_about = None
)]
#[command(version)]
#[command(after_help = "\
Examples:
  sap-config-guard validate ./config/dev
  sap-config-guard validate ./config/prod --schema ./schema.yaml
  sap-config-guard validate ./config/prod --environment prod --fail-on-warning
  sap-config-guard diff dev=./config/dev qa=./config/qa prod=./config/prod
  sap-config-guard diff ./config/dev ./config/qa ./config/prod")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Settings file (defaults to .sap-config-guard.yaml when present)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate configuration
    Validate(ValidateArgs),

    /// Compare configurations across environments
    Diff(DiffArgs),
}

/// Environments accepted by `validate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnvironmentName {
    Dev,
    Qa,
    Prod,
}

impl EnvironmentName {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Qa => "qa",
            Self::Prod => "prod",
        }
    }
}
