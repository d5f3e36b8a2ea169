use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::errors::LoadError;
use crate::domain::models::Configuration;
use crate::domain::ports::ConfigSource;

use super::formats::FileFormat;

/// Files merged first when loading a directory, in this order
pub const WELL_KNOWN_FILES: [&str; 6] = [
    ".env",
    "config.env",
    "config.properties",
    "config.yaml",
    "config.yml",
    "config.json",
];

/// Loads configurations from files and directories on disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FileConfigLoader;

impl FileConfigLoader {
    pub const fn new() -> Self {
        Self
    }

    /// Load a single file, choosing the parser from its extension.
    pub fn load_file(&self, path: &Path) -> Result<Configuration, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let format = FileFormat::from_path(path);
        let config = format.parse(path, &content)?;
        debug!(
            path = %path.display(),
            format = format.as_str(),
            keys = config.len(),
            "loaded config file"
        );
        Ok(config)
    }

    /// Merge the well-known files of a directory, then its other `*.env`
    /// files by name. Later files overwrite earlier keys.
    pub fn load_directory(&self, dir: &Path) -> Result<Configuration, LoadError> {
        let mut config = Configuration::new();
        for file in Self::directory_files(dir)? {
            config.merge(self.load_file(&file)?);
        }
        Ok(config)
    }

    /// Files `load_directory` reads, in merge order.
    pub fn directory_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
        let mut files: Vec<PathBuf> = WELL_KNOWN_FILES
            .iter()
            .map(|name| dir.join(name))
            .filter(|path| path.is_file())
            .collect();

        let unreadable = |source: std::io::Error| LoadError::Unreadable {
            path: dir.to_path_buf(),
            source,
        };

        let mut extra_env_files = Vec::new();
        for entry in fs::read_dir(dir).map_err(unreadable)? {
            let path = entry.map_err(unreadable)?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.ends_with(".env") && !WELL_KNOWN_FILES.contains(&name) && path.is_file() {
                extra_env_files.push(path);
            }
        }
        extra_env_files.sort();
        files.extend(extra_env_files);

        Ok(files)
    }
}

impl ConfigSource for FileConfigLoader {
    fn load(&self, path: &Path) -> Result<Configuration, LoadError> {
        if path.is_file() {
            self.load_file(path)
        } else if path.is_dir() {
            self.load_directory(path)
        } else {
            Err(LoadError::NotFound(path.to_path_buf()))
        }
    }
}
