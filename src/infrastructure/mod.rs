//! Infrastructure layer module
//!
//! This module contains the adapters that touch the outside world:
//! - Configuration file loading (JSON, YAML, properties, .env)
//! - Schema file loading
//! - Tool settings management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod loader;
pub mod logging;
pub mod schema;
