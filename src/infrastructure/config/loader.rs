use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use super::settings::Settings;
use crate::domain::models::KNOWN_ENVIRONMENTS;
use crate::infrastructure::logging::parse_log_level;

/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = ".sap-config-guard.yaml";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "SAP_CONFIG_GUARD_";

/// Settings error types
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid default environment: {0}. Must be one of: dev, qa, prod")]
    InvalidEnvironment(String),

    #[error("Settings file not found: {0}")]
    FileNotFound(String),
}

/// Settings loader with hierarchical merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `explicit` settings file, or `.sap-config-guard.yaml` if present
    /// 3. Environment variables (`SAP_CONFIG_GUARD_*`, `__` for nesting)
    pub fn load(explicit: Option<&Path>) -> Result<Settings> {
        let file = match explicit {
            Some(path) if !path.is_file() => {
                return Err(SettingsError::FileNotFound(path.display().to_string()).into());
            }
            Some(path) => path,
            None => Path::new(DEFAULT_SETTINGS_FILE),
        };

        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Yaml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load settings from {}", file.display()))?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate settings after loading
    pub fn validate(settings: &Settings) -> Result<(), SettingsError> {
        if parse_log_level(&settings.logging.level).is_err() {
            return Err(SettingsError::InvalidLogLevel(
                settings.logging.level.clone(),
            ));
        }

        if !KNOWN_ENVIRONMENTS.contains(&settings.default_environment.as_str()) {
            return Err(SettingsError::InvalidEnvironment(
                settings.default_environment.clone(),
            ));
        }

        Ok(())
    }
}
