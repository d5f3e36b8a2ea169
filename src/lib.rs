//! SAP Config Guard - configuration validation and drift detection
//!
//! Validates flat key/value configurations (loaded from `.env`,
//! `.properties`, YAML or JSON files) against a declarative schema, and
//! detects drift between the configurations of several named environments.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): configurations, schemas, findings, diff entries
//! - **Service Layer** (`services`): the validation and diff engines
//! - **Infrastructure Layer** (`infrastructure`): file loading, schema loading,
//!   settings, logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use sap_config_guard::{ConfigValidator, Configuration};
//!
//! let config: Configuration = [
//!     ("SAP_CLIENT", "100"),
//!     ("SAP_SYSTEM_ID", "ABC"),
//!     ("SAP_API_URL", "https://api.sap.com"),
//!     ("SAP_PASSWORD", "securepass123"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let report = ConfigValidator::default().validate(&config, "dev", false);
//! assert!(report.is_valid);
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    has_drift, Configuration, DiffEntry, DiffStatus, EnvironmentSpec, Finding, Schema,
    SchemaDocument, Severity, ValidationReport,
};
pub use domain::{ConfigSource, LoadError, SchemaError, SpecError};
pub use infrastructure::config::{Settings, SettingsLoader};
pub use infrastructure::loader::FileConfigLoader;
pub use infrastructure::schema::SchemaLoader;
pub use services::{ConfigValidator, EnvironmentDiff};
