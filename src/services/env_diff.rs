//! Drift detection across any number of named environments.

use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::domain::models::{Configuration, DiffEntry, DiffStatus};
use crate::domain::ports::ConfigSource;

/// Compares configurations key by key
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentDiff;

impl EnvironmentDiff {
    pub const fn new() -> Self {
        Self
    }

    /// Classify every key found in any environment.
    ///
    /// Entries come out in ascending key order. Messages and value maps list
    /// environments in the order they were requested. `same` entries are
    /// included; callers filter them when rendering.
    pub fn compare(&self, environments: &IndexMap<String, Configuration>) -> Vec<DiffEntry> {
        let all_keys: BTreeSet<&str> = environments.values().flat_map(Configuration::keys).collect();

        let entries: Vec<DiffEntry> = all_keys
            .into_iter()
            .map(|key| Self::classify(key, environments))
            .collect();

        debug!(
            environments = environments.len(),
            keys = entries.len(),
            drift = entries.iter().filter(|e| e.status.is_drift()).count(),
            "environment comparison finished"
        );
        entries
    }

    /// Load each environment through `source` and compare them.
    ///
    /// An environment that fails to load is logged and compared as empty,
    /// so the remaining environments are still checked against each other.
    pub fn compare_sources(
        &self,
        source: &dyn ConfigSource,
        paths: &IndexMap<String, PathBuf>,
    ) -> Vec<DiffEntry> {
        let environments: IndexMap<String, Configuration> = paths
            .iter()
            .map(|(name, path)| {
                let config = source.load(path).unwrap_or_else(|err| {
                    warn!(environment = %name, error = %err, "Failed to load environment config");
                    Configuration::new()
                });
                (name.clone(), config)
            })
            .collect();

        self.compare(&environments)
    }

    fn classify(key: &str, environments: &IndexMap<String, Configuration>) -> DiffEntry {
        let values: IndexMap<String, String> = environments
            .iter()
            .filter_map(|(name, config)| {
                config
                    .get(key)
                    .map(|value| (name.clone(), value.to_string()))
            })
            .collect();

        if values.len() < environments.len() {
            let missing_in: Vec<&str> = environments
                .keys()
                .filter(|name| !values.contains_key(*name))
                .map(String::as_str)
                .collect();
            let message = format!("Key '{key}' missing in: {}", missing_in.join(", "));
            return entry(key, values, DiffStatus::Missing, message);
        }

        let distinct: HashSet<&str> = values.values().map(String::as_str).collect();
        if distinct.len() > 1 {
            let listed: Vec<String> = values
                .iter()
                .map(|(env, value)| format!("{env}={value}"))
                .collect();
            let message = format!("Key '{key}' differs: {}", listed.join(", "));
            return entry(key, values, DiffStatus::Different, message);
        }

        let message = format!("Key '{key}' is consistent across environments");
        entry(key, values, DiffStatus::Same, message)
    }
}

fn entry(
    key: &str,
    values: IndexMap<String, String>,
    status: DiffStatus,
    message: String,
) -> DiffEntry {
    DiffEntry {
        key: key.to_string(),
        values,
        status,
        message,
    }
}
