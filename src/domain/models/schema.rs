//! Declarative validation rules.
//!
//! A [`SchemaDocument`] is the on-disk form; a [`Schema`] is the compiled,
//! immutable rule set the validator runs against. The five rule collections
//! are independent, so one key may appear in several of them.

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::errors::SchemaError;

/// Serde image of a schema source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SchemaDocument {
    /// Keys that must be present with a non-empty value
    pub required: Vec<String>,

    /// Keys holding secrets; problems with them are warnings
    pub secure: Vec<String>,

    /// Key to regular expression the value must match from its start
    pub patterns: IndexMap<String, String>,

    /// Substrings rejected anywhere in a value when validating `prod`
    pub forbidden_in_prod: Vec<String>,

    /// Key to minimum value length in characters
    pub min_lengths: IndexMap<String, usize>,
}

impl SchemaDocument {
    /// The rules used when no schema source is supplied.
    pub fn builtin() -> Self {
        Self {
            required: strings(&["SAP_CLIENT", "SAP_SYSTEM_ID", "SAP_API_URL"]),
            secure: strings(&[
                "SAP_PASSWORD",
                "SAP_PRIVATE_KEY",
                "SAP_SECRET",
                "SAP_OAUTH_SECRET",
            ]),
            patterns: [
                ("SAP_CLIENT", r"^[0-9]{3}$"),
                ("SAP_API_URL", r"^https://.*"),
                ("SAP_SYSTEM_ID", r"^[A-Z0-9]{3}$"),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
            forbidden_in_prod: strings(&["mock", "localhost", "127.0.0.1", "test", "dev"]),
            min_lengths: [("SAP_PASSWORD".to_string(), 8)].into_iter().collect(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[derive(Debug, Clone)]
struct KeyPattern {
    source: String,
    regex: Regex,
}

/// Compiled, immutable validation rules.
#[derive(Debug, Clone)]
pub struct Schema {
    required: Vec<String>,
    secure: Vec<String>,
    patterns: IndexMap<String, KeyPattern>,
    forbidden_in_prod: Vec<String>,
    min_lengths: IndexMap<String, usize>,
}

impl Schema {
    /// Compile a schema document.
    ///
    /// Each pattern is anchored at the start of the value only; a pattern
    /// that must cover the whole value carries its own trailing `$`.
    /// Forbidden substrings are stored lowercased.
    pub fn from_document(doc: SchemaDocument) -> Result<Self, SchemaError> {
        let mut patterns = IndexMap::with_capacity(doc.patterns.len());
        for (key, source) in doc.patterns {
            let regex = Regex::new(&format!("^(?:{source})")).map_err(|e| {
                SchemaError::InvalidPattern {
                    key: key.clone(),
                    pattern: source.clone(),
                    source: e,
                }
            })?;
            patterns.insert(key, KeyPattern { source, regex });
        }

        Ok(Self {
            required: doc.required,
            secure: doc.secure,
            patterns,
            forbidden_in_prod: doc
                .forbidden_in_prod
                .into_iter()
                .map(|s| s.to_lowercase())
                .collect(),
            min_lengths: doc.min_lengths,
        })
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    pub fn secure(&self) -> &[String] {
        &self.secure
    }

    /// Registered patterns as `(key, pattern source)` in document order.
    pub fn patterns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.patterns
            .iter()
            .map(|(k, p)| (k.as_str(), p.source.as_str()))
    }

    pub fn forbidden_in_prod(&self) -> &[String] {
        &self.forbidden_in_prod
    }

    pub fn min_lengths(&self) -> &IndexMap<String, usize> {
        &self.min_lengths
    }

    /// True when no pattern is registered for `key`, otherwise whether the
    /// value matches the pattern at its start.
    pub fn matches_pattern(&self, key: &str, value: &str) -> bool {
        self.patterns
            .get(key)
            .is_none_or(|pattern| pattern.regex.is_match(value))
    }

    /// Case-insensitive check for any forbidden substring.
    pub fn is_forbidden_in_production(&self, value: &str) -> bool {
        let lowered = value.to_lowercase();
        self.forbidden_in_prod
            .iter()
            .any(|item| lowered.contains(item.as_str()))
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::from_document(SchemaDocument::builtin())
            .expect("built-in schema patterns are valid regular expressions")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema_with_pattern(key: &str, pattern: &str) -> Schema {
        let mut doc = SchemaDocument::default();
        doc.patterns.insert(key.to_string(), pattern.to_string());
        Schema::from_document(doc).unwrap()
    }

    #[test]
    fn test_default_schema_contents() {
        let schema = Schema::default();
        assert_eq!(schema.required().len(), 3);
        assert_eq!(schema.secure().len(), 4);
        assert_eq!(schema.patterns().count(), 3);
        assert_eq!(schema.forbidden_in_prod().len(), 5);
        assert_eq!(schema.min_lengths().get("SAP_PASSWORD"), Some(&8));
    }

    #[test]
    fn test_unregistered_key_always_matches() {
        let schema = Schema::default();
        assert!(schema.matches_pattern("UNRELATED", "anything at all"));
    }

    #[test]
    fn test_pattern_is_prefix_anchored() {
        let schema = schema_with_pattern("PORT", "[0-9]+");
        assert!(schema.matches_pattern("PORT", "8080"));
        // Trailing text is allowed without a `$` in the pattern
        assert!(schema.matches_pattern("PORT", "8080abc"));
        // Leading text is not
        assert!(!schema.matches_pattern("PORT", "abc8080"));
    }

    #[test]
    fn test_pattern_with_own_end_anchor_requires_full_value() {
        let schema = Schema::default();
        assert!(schema.matches_pattern("SAP_CLIENT", "100"));
        assert!(!schema.matches_pattern("SAP_CLIENT", "12"));
        assert!(!schema.matches_pattern("SAP_CLIENT", "1000"));
    }

    #[test]
    fn test_alternation_stays_anchored() {
        let schema = schema_with_pattern("MODE", "a|b");
        assert!(schema.matches_pattern("MODE", "b"));
        assert!(!schema.matches_pattern("MODE", "xb"));
    }

    #[test]
    fn test_forbidden_is_case_insensitive() {
        let schema = Schema::default();
        assert!(schema.is_forbidden_in_production("http://LOCALHOST:8080"));
        assert!(schema.is_forbidden_in_production("MockServer"));
        assert!(!schema.is_forbidden_in_production("https://api.sap.com"));
    }

    #[test]
    fn test_forbidden_entries_are_lowercased() {
        let doc = SchemaDocument {
            forbidden_in_prod: vec!["STAGING".to_string()],
            ..SchemaDocument::default()
        };
        let schema = Schema::from_document(doc).unwrap();
        assert_eq!(schema.forbidden_in_prod(), ["staging"]);
        assert!(schema.is_forbidden_in_production("my-Staging-host"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let mut doc = SchemaDocument::default();
        doc.patterns.insert("BAD".to_string(), "([a-z".to_string());

        match Schema::from_document(doc) {
            Err(SchemaError::InvalidPattern { key, pattern, .. }) => {
                assert_eq!(key, "BAD");
                assert_eq!(pattern, "([a-z");
            }
            other => panic!("Expected InvalidPattern error, got {other:?}"),
        }
    }

    #[test]
    fn test_document_parses_with_missing_sections() {
        let doc: SchemaDocument = serde_yaml::from_str("required:\n  - DB_HOST\n").unwrap();
        assert_eq!(doc.required, vec!["DB_HOST"]);
        assert!(doc.patterns.is_empty());
        assert!(doc.min_lengths.is_empty());
    }

    #[test]
    fn test_document_ignores_unknown_sections() {
        let yaml = "required: [A]\nallowed_values: {}\n";
        let doc: SchemaDocument = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(doc.required, vec!["A"]);
    }
}
