use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-key status across all compared environments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffStatus {
    /// Absent from at least one environment
    Missing,
    /// Present everywhere with more than one distinct value
    Different,
    /// Present everywhere with one value
    Same,
}

impl DiffStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Different => "different",
            Self::Same => "same",
        }
    }

    pub const fn is_drift(self) -> bool {
        matches!(self, Self::Missing | Self::Different)
    }
}

impl fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison result for one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry {
    pub key: String,
    /// Environment name to value, only for environments holding the key,
    /// in request order
    pub values: IndexMap<String, String>,
    pub status: DiffStatus,
    pub message: String,
}

impl DiffEntry {
    pub fn value_in(&self, environment: &str) -> Option<&str> {
        self.values.get(environment).map(String::as_str)
    }
}

/// True when any entry is `missing` or `different`.
pub fn has_drift(entries: &[DiffEntry]) -> bool {
    entries.iter().any(|e| e.status.is_drift())
}
