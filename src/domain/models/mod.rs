pub mod configuration;
pub mod diff;
pub mod environment;
pub mod finding;
pub mod schema;

pub use configuration::Configuration;
pub use diff::{has_drift, DiffEntry, DiffStatus};
pub use environment::{
    is_production, EnvironmentSpec, KNOWN_ENVIRONMENTS, POSITIONAL_NAMES, PRODUCTION,
};
pub use finding::{Finding, Severity, ValidationReport};
pub use schema::{Schema, SchemaDocument};
