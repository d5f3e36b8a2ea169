use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::errors::SchemaError;
use crate::domain::models::{Schema, SchemaDocument};

/// Loads validation schemas from disk
pub struct SchemaLoader;

impl SchemaLoader {
    /// Load the schema at `path`, or the built-in schema when `path` is `None`.
    ///
    /// A supplied path must exist and hold a well-formed schema; there is
    /// no fallback to the built-in rules.
    pub fn load(path: Option<&Path>) -> Result<Schema, SchemaError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => {
                debug!("no schema supplied, using built-in rules");
                Ok(Schema::default())
            }
        }
    }

    /// Load and compile a schema file
    pub fn load_from_file(path: &Path) -> Result<Schema, SchemaError> {
        if !path.is_file() {
            return Err(SchemaError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| SchemaError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Self::parse(path, &content)?;
        let schema = Schema::from_document(document)?;
        info!(
            path = %path.display(),
            required = schema.required().len(),
            secure = schema.secure().len(),
            patterns = schema.patterns().count(),
            "schema loaded"
        );
        Ok(schema)
    }

    /// Parse schema text; whitespace-only text is an empty schema.
    pub fn parse(path: &Path, content: &str) -> Result<SchemaDocument, SchemaError> {
        if content.trim().is_empty() {
            return Ok(SchemaDocument::default());
        }
        serde_yaml::from_str(content).map_err(|e| SchemaError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
