//! Severity and drift-status color mapping for CLI output.
//!
//! All coloring respects `NO_COLOR` env var automatically via the `colored` crate.

use colored::{ColoredString, Colorize};

use crate::domain::models::{DiffStatus, Severity};

/// Marker printed in front of each finding.
///
/// Error = red cross, Warning = yellow bang, Info = blue `i`.
pub fn severity_marker(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => "\u{2717}".red().bold(),
        Severity::Warning => "!".yellow().bold(),
        Severity::Info => "i".blue(),
    }
}

/// Table cell color for a diff status.
///
/// Missing = red, Different = yellow, Same = green.
pub const fn diff_status_color(status: DiffStatus) -> comfy_table::Color {
    match status {
        DiffStatus::Missing => comfy_table::Color::Red,
        DiffStatus::Different => comfy_table::Color::Yellow,
        DiffStatus::Same => comfy_table::Color::Green,
    }
}

/// Section header with underline.
pub fn section_header(title: &str) -> String {
    format!("\n{}", title.bold().underline())
}
