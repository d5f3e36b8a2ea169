//! Domain errors for configuration loading and schema construction.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning a file or directory into a [`Configuration`].
///
/// [`Configuration`]: super::models::Configuration
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Config path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {} as {format}: {reason}", path.display())]
    Unparseable {
        path: PathBuf,
        format: &'static str,
        reason: String,
    },
}

/// Errors raised while loading or compiling a validation schema.
///
/// A supplied schema that cannot be used is always a hard failure.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Schema file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read schema {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed schema {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("Invalid pattern for {key}: {pattern} ({source})")]
    InvalidPattern {
        key: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors raised while parsing `name=path` environment arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("Environment specification has an empty name: {0}")]
    EmptyName(String),

    #[error("Environment specification has an empty path: {0}")]
    EmptyPath(String),

    #[error("Cannot infer an environment name from path: {0}")]
    UnnamedPath(String),

    #[error("At most {max} unnamed environment paths are supported, got {count}")]
    TooManyPositional { count: usize, max: usize },
}
