use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::errors::LoadError;
use super::models::Configuration;

/// Source of flat configurations
///
/// This trait separates the validation and diff engines from the file
/// system; the engines only ever see resolved key/value pairs.
pub trait ConfigSource: Send + Sync {
    /// Load the configuration found at `path`
    ///
    /// # Arguments
    /// * `path` - A file or a directory of configuration files
    ///
    /// # Returns
    /// * `Ok(Configuration)` with every key/value pair found
    /// * `Err(LoadError)` if the path is missing, unreadable or unparseable
    fn load(&self, path: &Path) -> Result<Configuration, LoadError>;
}

/// In-memory source keyed by path, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigSource {
    configs: HashMap<PathBuf, Configuration>,
}

impl StaticConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, path: impl Into<PathBuf>, config: Configuration) -> Self {
        self.configs.insert(path.into(), config);
        self
    }
}

impl ConfigSource for StaticConfigSource {
    fn load(&self, path: &Path) -> Result<Configuration, LoadError> {
        self.configs
            .get(path)
            .cloned()
            .ok_or_else(|| LoadError::NotFound(path.to_path_buf()))
    }
}
