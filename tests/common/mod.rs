//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write `content` to `dir/name`, creating parent directories.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(&path, content).expect("Failed to write test file");
    path
}

/// A `.env` body that passes the built-in schema in every environment.
pub const VALID_ENV: &str = "\
SAP_CLIENT=100
SAP_SYSTEM_ID=ABC
SAP_API_URL=https://api.sap.com
SAP_PASSWORD=securepass123
SAP_PRIVATE_KEY=private-key-value
SAP_SECRET=secret-value
SAP_OAUTH_SECRET=oauth-secret-value
";

/// Create `<root>/<name>/.env` holding `content` and return the directory.
pub fn env_dir(root: &Path, name: &str, content: &str) -> PathBuf {
    write_file(root, &format!("{name}/.env"), content);
    root.join(name)
}
