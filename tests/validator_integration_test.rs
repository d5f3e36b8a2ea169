//! Validation of configurations loaded from disk.

mod common;

use common::{temp_dir, write_file, VALID_ENV};
use sap_config_guard::domain::ports::ConfigSource;
use sap_config_guard::infrastructure::loader::FileConfigLoader;
use sap_config_guard::infrastructure::schema::SchemaLoader;
use sap_config_guard::services::LOAD_FAILURE_KEY;
use sap_config_guard::{ConfigValidator, Severity};

fn validate_dir(content: &str, environment: &str) -> sap_config_guard::ValidationReport {
    let dir = temp_dir();
    write_file(dir.path(), "config.env", content);
    ConfigValidator::default().validate_path(&FileConfigLoader::new(), dir.path(), environment, false)
}

#[test]
fn test_missing_required_key_from_file() {
    let report = validate_dir("SAP_CLIENT=100\nSAP_SYSTEM_ID=ABC", "dev");

    assert!(!report.is_valid);
    assert!(report
        .findings
        .iter()
        .any(|f| f.key == "SAP_API_URL" && f.message == "Missing required key: SAP_API_URL"));
}

#[test]
fn test_pattern_violation_from_file() {
    let report = validate_dir(
        "SAP_CLIENT=12\nSAP_SYSTEM_ID=ABC\nSAP_API_URL=https://api.sap.com",
        "dev",
    );

    assert!(!report.is_valid);
    let finding = report.findings_for("SAP_CLIENT").next().unwrap();
    assert_eq!(finding.severity, Severity::Error);
    assert_eq!(
        finding.message,
        "Invalid pattern: SAP_CLIENT = 12 (expected pattern: ^[0-9]{3}$)"
    );
}

#[test]
fn test_production_rules_reject_localhost() {
    let report = validate_dir(
        "SAP_CLIENT=100\nSAP_SYSTEM_ID=ABC\nSAP_API_URL=http://localhost:8080",
        "prod",
    );

    assert!(!report.is_valid);
    assert!(report.findings.iter().any(|f| f.message
        == "Production violation: SAP_API_URL contains forbidden value (found in: http://localhost:8080)"));
}

#[test]
fn test_same_config_passes_production_rules_outside_prod() {
    let report = validate_dir(
        "SAP_CLIENT=100\nSAP_SYSTEM_ID=ABC\nSAP_API_URL=http://localhost:8080",
        "qa",
    );
    assert!(!report
        .findings
        .iter()
        .any(|f| f.message.starts_with("Production violation")));
}

#[test]
fn test_valid_config_only_warns() {
    let report = validate_dir(
        "SAP_CLIENT=100\nSAP_SYSTEM_ID=ABC\nSAP_API_URL=https://api.sap.com\nSAP_PASSWORD=securepass123",
        "dev",
    );

    assert!(report.is_valid);
    assert!(report.findings.iter().all(|f| f.severity == Severity::Warning));
}

#[test]
fn test_min_length_violation_from_file() {
    let report = validate_dir(
        "SAP_CLIENT=100\nSAP_SYSTEM_ID=ABC\nSAP_API_URL=https://api.sap.com\nSAP_PASSWORD=short",
        "dev",
    );

    assert!(!report.is_valid);
    assert!(report.findings.iter().any(|f| f.message
        == "Value too short: SAP_PASSWORD must be at least 8 characters"));
}

#[test]
fn test_fully_populated_config_has_no_findings_in_prod() {
    let report = validate_dir(VALID_ENV, "prod");
    assert!(report.is_valid);
    assert!(report.findings.is_empty(), "{:?}", report.findings);
}

#[test]
fn test_fail_on_warning_turns_warnings_fatal() {
    let dir = temp_dir();
    write_file(
        dir.path(),
        ".env",
        "SAP_CLIENT=100\nSAP_SYSTEM_ID=ABC\nSAP_API_URL=https://api.sap.com\nSAP_PASSWORD=securepass123",
    );
    let report =
        ConfigValidator::default().validate_path(&FileConfigLoader::new(), dir.path(), "dev", true);

    assert!(!report.is_valid);
    assert_eq!(report.error_count(), 0);
    assert!(report.has_warnings());
}

#[test]
fn test_unloadable_config_is_single_error() {
    let dir = temp_dir();
    write_file(dir.path(), "config.json", "{ not json");

    let report =
        ConfigValidator::default().validate_path(&FileConfigLoader::new(), dir.path(), "dev", false);

    assert!(!report.is_valid);
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].key, LOAD_FAILURE_KEY);
    assert!(report.findings[0]
        .message
        .starts_with("Failed to load configuration:"));
}

#[test]
fn test_custom_schema_from_file() {
    let dir = temp_dir();
    let schema_path = write_file(
        dir.path(),
        "schema.yaml",
        "required:\n  - DB_HOST\npatterns:\n  DB_PORT: '[0-9]+'\nmin_lengths:\n  DB_HOST: 3\n",
    );
    let config_path = write_file(dir.path(), "app.env", "DB_HOST=db\nDB_PORT=x5432\n");

    let schema = SchemaLoader::load(Some(&schema_path)).unwrap();
    let config = FileConfigLoader::new().load(&config_path).unwrap();
    let report = ConfigValidator::new(schema).validate(&config, "dev", false);

    let messages: Vec<_> = report.findings.iter().map(|f| f.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Invalid pattern: DB_PORT = x5432 (expected pattern: [0-9]+)",
            "Value too short: DB_HOST must be at least 3 characters",
        ]
    );
}
