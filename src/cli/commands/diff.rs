//! Implementation of the `sap-config-guard diff` command.

use anyhow::{bail, Context, Result};
use clap::Args;
use comfy_table::Cell;
use serde::Serialize;
use std::process::ExitCode;
use tracing::info;

use crate::cli::display::{
    action_success, action_warning, diff_status_color, list_table, output, section_header,
    CommandOutput,
};
use crate::domain::models::{has_drift, DiffEntry, DiffStatus, EnvironmentSpec};
use crate::infrastructure::loader::FileConfigLoader;
use crate::services::EnvironmentDiff;

/// Shown in place of a value for an environment lacking the key
const ABSENT: &str = "-";

#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Environments as `name=path`, `name:path`, or bare paths (named dev, qa, prod by position)
    #[arg(required = true, num_args = 2..)]
    pub environments: Vec<String>,

    /// Show keys that are the same across environments
    #[arg(long)]
    pub show_same: bool,

    /// Exit with an error code if drift is detected
    #[arg(long)]
    pub fail_on_drift: bool,
}

#[derive(Debug, Serialize)]
pub struct DiffOutput {
    pub environments: Vec<String>,
    pub drift: bool,
    pub entries: Vec<DiffEntry>,
}

impl DiffOutput {
    /// Keep `same` entries only when asked to.
    pub fn new(environments: Vec<String>, entries: Vec<DiffEntry>, show_same: bool) -> Self {
        let drift = has_drift(&entries);
        let entries = entries
            .into_iter()
            .filter(|e| show_same || e.status != DiffStatus::Same)
            .collect();
        Self {
            environments,
            drift,
            entries,
        }
    }

    fn render_table(&self) -> String {
        let mut headers = vec!["key".to_string(), "status".to_string()];
        headers.extend(self.environments.iter().cloned());

        let mut table = list_table(&headers);
        for entry in &self.entries {
            let mut row = vec![
                Cell::new(&entry.key),
                Cell::new(entry.status.as_str()).fg(diff_status_color(entry.status)),
            ];
            row.extend(
                self.environments
                    .iter()
                    .map(|env| Cell::new(entry.value_in(env).unwrap_or(ABSENT))),
            );
            table.add_row(row);
        }
        table.to_string()
    }

    fn count(&self, status: DiffStatus) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }
}

impl CommandOutput for DiffOutput {
    fn to_human(&self) -> String {
        let names = self.environments.join(", ");
        let mut lines = Vec::new();

        if self.drift {
            lines.push(action_warning(&format!("Drift detected across {names}:")));
            lines.push(self.render_table());
            lines.push(String::new());
            lines.push(format!(
                "{} missing, {} different",
                self.count(DiffStatus::Missing),
                self.count(DiffStatus::Different)
            ));
        } else {
            lines.push(action_success(&format!("No differences detected across {names}")));
            if !self.entries.is_empty() {
                lines.push(section_header("Consistent keys"));
                lines.push(self.render_table());
            }
        }
        lines.join("\n")
    }
}

pub fn execute(args: DiffArgs, json_mode: bool) -> Result<ExitCode> {
    let paths = EnvironmentSpec::parse_all(&args.environments)
        .context("Invalid environment specification")?;

    for (name, path) in &paths {
        if !path.exists() {
            bail!("Environment path not found: {name} -> {}", path.display());
        }
    }

    let entries = EnvironmentDiff::new().compare_sources(&FileConfigLoader::new(), &paths);
    let result = DiffOutput::new(paths.keys().cloned().collect(), entries, args.show_same);

    info!(
        environments = result.environments.len(),
        drift = result.drift,
        "environment diff complete"
    );

    let failed = result.drift && args.fail_on_drift;
    output(&result, json_mode);

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
