//! Implementation of the `sap-config-guard validate` command.

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use crate::cli::display::{action_failure, action_success, output, severity_marker, CommandOutput};
use crate::cli::types::EnvironmentName;
use crate::domain::models::ValidationReport;
use crate::infrastructure::config::Settings;
use crate::infrastructure::loader::FileConfigLoader;
use crate::infrastructure::schema::SchemaLoader;
use crate::services::ConfigValidator;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to config file or directory
    pub config_path: PathBuf,

    /// Path to schema YAML file (defaults to the built-in SAP schema)
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Environment name; `prod` enables production rules
    #[arg(short, long, value_enum)]
    pub environment: Option<EnvironmentName>,

    /// Treat warnings as errors
    #[arg(long)]
    pub fail_on_warning: bool,
}

#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub config_path: PathBuf,
    #[serde(flatten)]
    pub report: ValidationReport,
}

impl CommandOutput for ValidateOutput {
    fn to_human(&self) -> String {
        if self.report.findings.is_empty() {
            return action_success("Configuration is valid!");
        }

        let mut lines: Vec<String> = self
            .report
            .findings
            .iter()
            .map(|f| format!("{} {}", severity_marker(f.severity), f.message))
            .collect();

        let summary = format!(
            "{} error(s), {} warning(s) in {} ({})",
            self.report.error_count(),
            self.report.warning_count(),
            self.config_path.display(),
            self.report.environment
        );
        lines.push(String::new());
        lines.push(if self.report.is_valid {
            action_success(&format!("Validation passed: {summary}"))
        } else {
            action_failure(&format!("Validation failed: {summary}"))
        });
        lines.join("\n")
    }
}

pub fn execute(args: ValidateArgs, json_mode: bool, settings: &Settings) -> Result<ExitCode> {
    if !args.config_path.exists() {
        bail!("Config path not found: {}", args.config_path.display());
    }

    let schema_path = args.schema.as_deref().or(settings.schema.as_deref());
    let schema = SchemaLoader::load(schema_path).context("Failed to load schema")?;

    let environment = args
        .environment
        .map_or_else(|| settings.default_environment.clone(), |e| e.as_str().to_string());

    let report = ConfigValidator::new(schema).validate_path(
        &FileConfigLoader::new(),
        &args.config_path,
        &environment,
        args.fail_on_warning,
    );

    info!(
        path = %args.config_path.display(),
        environment = %environment,
        errors = report.error_count(),
        warnings = report.warning_count(),
        is_valid = report.is_valid,
        "validation complete"
    );

    let is_valid = report.is_valid;
    output(
        &ValidateOutput {
            config_path: args.config_path,
            report,
        },
        json_mode,
    );

    Ok(if is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
