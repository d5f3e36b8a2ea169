//! Command-line interface
//!
//! Argument parsing, the `validate` and `diff` commands, and output
//! rendering.

pub mod commands;
pub mod display;
pub mod types;

pub use types::{Cli, Commands, EnvironmentName};

/// Report a command error on stderr, or as a JSON object on stdout in JSON mode.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) {
    if json_mode {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );
    } else {
        eprintln!("{}", display::action_failure(&format!("Error: {err:#}")));
    }
}
