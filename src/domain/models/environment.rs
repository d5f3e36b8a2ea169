//! Environment names and `name=path` argument parsing.

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use crate::domain::errors::SpecError;

/// Environments the command line accepts for validation.
pub const KNOWN_ENVIRONMENTS: [&str; 3] = ["dev", "qa", "prod"];

/// Names given to unnamed paths, by position.
pub const POSITIONAL_NAMES: [&str; 3] = KNOWN_ENVIRONMENTS;

/// Environment name that enables production rules (compared case-insensitively).
pub const PRODUCTION: &str = "prod";

pub fn is_production(environment: &str) -> bool {
    environment.eq_ignore_ascii_case(PRODUCTION)
}

/// One parsed environment argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSpec {
    /// `None` for a bare path
    pub name: Option<String>,
    pub path: PathBuf,
}

impl EnvironmentSpec {
    /// Parse `name=path`, then `name:path`, then a bare path.
    pub fn parse(arg: &str) -> Result<Self, SpecError> {
        let split = arg.split_once('=').or_else(|| arg.split_once(':'));

        match split {
            Some((name, path)) => {
                if name.is_empty() {
                    return Err(SpecError::EmptyName(arg.to_string()));
                }
                if path.is_empty() {
                    return Err(SpecError::EmptyPath(arg.to_string()));
                }
                Ok(Self {
                    name: Some(name.to_string()),
                    path: PathBuf::from(path),
                })
            }
            None if arg.is_empty() => Err(SpecError::EmptyPath(arg.to_string())),
            None => Ok(Self {
                name: None,
                path: PathBuf::from(arg),
            }),
        }
    }

    /// Parse every argument into an ordered `name -> path` map.
    ///
    /// When no argument carries a name, paths are named `dev`, `qa`, `prod`
    /// by position. Otherwise a bare path is named after its final
    /// component. A repeated name keeps its first position and takes the
    /// later path.
    pub fn parse_all<S: AsRef<str>>(args: &[S]) -> Result<IndexMap<String, PathBuf>, SpecError> {
        let specs = args
            .iter()
            .map(|a| Self::parse(a.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        if specs.iter().all(|s| s.name.is_none()) {
            if specs.len() > POSITIONAL_NAMES.len() {
                return Err(SpecError::TooManyPositional {
                    count: specs.len(),
                    max: POSITIONAL_NAMES.len(),
                });
            }
            return Ok(POSITIONAL_NAMES
                .iter()
                .zip(specs)
                .map(|(name, spec)| ((*name).to_string(), spec.path))
                .collect());
        }

        let mut environments = IndexMap::with_capacity(specs.len());
        for spec in specs {
            let name = match spec.name {
                Some(name) => name,
                None => name_from_path(&spec.path)
                    .ok_or_else(|| SpecError::UnnamedPath(spec.path.display().to_string()))?,
            };
            environments.insert(name, spec.path);
        }
        Ok(environments)
    }
}

fn name_from_path(path: &Path) -> Option<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
}
