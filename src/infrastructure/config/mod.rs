//! Tool settings management
//!
//! Hierarchical settings using figment:
//! - YAML file loading
//! - Environment variable overrides
//! - Settings validation

pub mod loader;
pub mod settings;

pub use loader::{SettingsError, SettingsLoader, DEFAULT_SETTINGS_FILE, ENV_PREFIX};
pub use settings::Settings;
