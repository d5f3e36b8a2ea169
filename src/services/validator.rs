use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::models::{is_production, Configuration, Finding, Schema, ValidationReport};
use crate::domain::ports::ConfigSource;

/// Secure values shorter than this are reported as suspicious.
pub const MIN_SECURE_LENGTH: usize = 4;

/// Key used for the single finding emitted when loading fails
pub const LOAD_FAILURE_KEY: &str = "config_load";

/// Applies a [`Schema`] to configurations
///
/// The schema is shared read-only, so one validator (or many clones of it)
/// can serve any number of validation runs.
#[derive(Debug, Clone)]
pub struct ConfigValidator {
    schema: Arc<Schema>,
}

impl ConfigValidator {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema: Arc::new(schema),
        }
    }

    pub const fn with_shared(schema: Arc<Schema>) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Run every check against `config`.
    ///
    /// Findings come out grouped by check, in the order required, pattern,
    /// secure, minimum length, then production rules (the last only when
    /// `environment` is `prod`, ignoring case). No check stops the others.
    #[instrument(skip(self, config), fields(keys = config.len()))]
    pub fn validate(
        &self,
        config: &Configuration,
        environment: &str,
        fail_on_warning: bool,
    ) -> ValidationReport {
        let mut findings = Vec::new();

        findings.extend(self.check_required_keys(config));
        findings.extend(self.check_patterns(config));
        findings.extend(self.check_secure_keys(config));
        findings.extend(self.check_min_lengths(config));

        if is_production(environment) {
            findings.extend(self.check_production_rules(config));
        }

        let report = ValidationReport::from_findings(environment, findings, fail_on_warning);
        debug!(
            errors = report.error_count(),
            warnings = report.warning_count(),
            is_valid = report.is_valid,
            "validation finished"
        );
        report
    }

    /// Load `path` through `source`, then validate it.
    ///
    /// A load failure becomes the report's only finding and no check runs.
    pub fn validate_path(
        &self,
        source: &dyn ConfigSource,
        path: &Path,
        environment: &str,
        fail_on_warning: bool,
    ) -> ValidationReport {
        match source.load(path) {
            Ok(config) => self.validate(&config, environment, fail_on_warning),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "configuration failed to load");
                let finding = Finding::error(
                    LOAD_FAILURE_KEY,
                    format!("Failed to load configuration: {err}"),
                );
                ValidationReport {
                    environment: environment.to_string(),
                    findings: vec![finding],
                    is_valid: false,
                }
            }
        }
    }

    fn check_required_keys(&self, config: &Configuration) -> Vec<Finding> {
        self.schema
            .required()
            .iter()
            .filter(|key| is_blank(config.get(key)))
            .map(|key| Finding::error(key.as_str(), format!("Missing required key: {key}")))
            .collect()
    }

    fn check_patterns(&self, config: &Configuration) -> Vec<Finding> {
        self.schema
            .patterns()
            .filter_map(|(key, pattern)| {
                let value = config.get(key)?;
                (!self.schema.matches_pattern(key, value)).then(|| {
                    Finding::error(
                        key,
                        format!("Invalid pattern: {key} = {value} (expected pattern: {pattern})"),
                    )
                })
            })
            .collect()
    }

    fn check_secure_keys(&self, config: &Configuration) -> Vec<Finding> {
        let mut findings = Vec::new();
        for key in self.schema.secure() {
            match config.get(key) {
                None | Some("") => findings.push(Finding::warning(
                    key.as_str(),
                    format!("Secure key missing or empty: {key}"),
                )),
                Some(value) if char_len(value) < MIN_SECURE_LENGTH => {
                    findings.push(Finding::warning(
                        key.as_str(),
                        format!("Secure key seems too short: {key}"),
                    ));
                }
                Some(_) => {}
            }
        }
        findings
    }

    fn check_min_lengths(&self, config: &Configuration) -> Vec<Finding> {
        self.schema
            .min_lengths()
            .iter()
            .filter_map(|(key, &min_length)| {
                let value = config.get(key)?;
                (char_len(value) < min_length).then(|| {
                    Finding::error(
                        key.as_str(),
                        format!("Value too short: {key} must be at least {min_length} characters"),
                    )
                })
            })
            .collect()
    }

    fn check_production_rules(&self, config: &Configuration) -> Vec<Finding> {
        config
            .iter()
            .filter(|(_, value)| self.schema.is_forbidden_in_production(value))
            .map(|(key, value)| {
                Finding::error(
                    key.as_str(),
                    format!(
                        "Production violation: {key} contains forbidden value (found in: {value})"
                    ),
                )
            })
            .collect()
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new(Schema::default())
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}
