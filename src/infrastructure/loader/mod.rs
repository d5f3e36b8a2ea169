//! Configuration file loading
//!
//! Normalizes `.env`, `.properties`, YAML and JSON files (or a directory of
//! them) into a single flat [`Configuration`](crate::domain::models::Configuration).

pub mod file_loader;
pub mod flatten;
pub mod formats;

pub use file_loader::{FileConfigLoader, WELL_KNOWN_FILES};
pub use formats::FileFormat;
