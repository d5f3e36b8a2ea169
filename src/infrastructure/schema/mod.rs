//! Schema source loading
//!
//! Schemas are YAML documents (JSON is accepted as a YAML subset). The
//! built-in rules apply only when no schema path is given at all.

pub mod loader;

pub use loader::SchemaLoader;
