use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::infrastructure::logging::LogConfig;

/// Tool settings, independent of the configurations being checked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Logging configuration
    #[serde(default)]
    pub logging: LogConfig,

    /// Schema used when `--schema` is not given
    #[serde(default)]
    pub schema: Option<PathBuf>,

    /// Environment used by `validate` when `--environment` is not given
    #[serde(default = "default_environment")]
    pub default_environment: String,
}

fn default_environment() -> String {
    "dev".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LogConfig::default(),
            schema: None,
            default_environment: default_environment(),
        }
    }
}
