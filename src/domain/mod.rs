//! Domain layer for configuration validation and drift detection
//!
//! This module contains the data the engines operate on, the errors they
//! can raise, and the port through which configurations are loaded.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{LoadError, SchemaError, SpecError};
pub use ports::{ConfigSource, StaticConfigSource};
