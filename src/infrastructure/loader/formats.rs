//! Per-format parsers producing flat configurations.

use std::path::Path;

use crate::domain::errors::LoadError;
use crate::domain::models::Configuration;

use super::flatten::flatten_document;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
    Properties,
    Env,
}

impl FileFormat {
    /// Pick a format from the file extension; unknown extensions parse as `.env`.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Self::Json,
            "yaml" | "yml" => Self::Yaml,
            "properties" => Self::Properties,
            _ => Self::Env,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Properties => "properties",
            Self::Env => "env",
        }
    }

    /// Parse `content` read from `path`.
    pub fn parse(self, path: &Path, content: &str) -> Result<Configuration, LoadError> {
        match self {
            Self::Json => parse_json(content).map_err(|reason| self.unparseable(path, reason)),
            Self::Yaml => parse_yaml(content).map_err(|reason| self.unparseable(path, reason)),
            Self::Properties => Ok(parse_lines(content, false)),
            Self::Env => Ok(parse_lines(content, true)),
        }
    }

    fn unparseable(self, path: &Path, reason: String) -> LoadError {
        LoadError::Unparseable {
            path: path.to_path_buf(),
            format: self.as_str(),
            reason,
        }
    }
}

fn parse_json(content: &str) -> Result<Configuration, String> {
    let document: serde_json::Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let document = serde_yaml::to_value(document).map_err(|e| e.to_string())?;
    Ok(flatten_document(&document))
}

fn parse_yaml(content: &str) -> Result<Configuration, String> {
    if content.trim().is_empty() {
        return Ok(Configuration::new());
    }
    let document: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    Ok(flatten_document(&document))
}

/// `KEY=VALUE` lines. Blank lines, `#` comments and lines without `=` are
/// skipped. With `strip_quotes`, quote characters around the value are
/// removed.
fn parse_lines(content: &str, strip_quotes: bool) -> Configuration {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim();
            let value = if strip_quotes {
                value.trim_matches(|c| c == '"' || c == '\'')
            } else {
                value
            };
            (key.trim(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(FileFormat::from_path(Path::new("a.json")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("a.YAML")), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path(Path::new("a.yml")), FileFormat::Yaml);
        assert_eq!(
            FileFormat::from_path(Path::new("a.properties")),
            FileFormat::Properties
        );
        assert_eq!(FileFormat::from_path(Path::new("a.env")), FileFormat::Env);
        assert_eq!(FileFormat::from_path(Path::new(".env")), FileFormat::Env);
        assert_eq!(FileFormat::from_path(Path::new("settings.ini")), FileFormat::Env);
    }

    #[test]
    fn test_env_lines() {
        let content = "SAP_CLIENT=100\n# comment\n\nNOT A PAIR\nSAP_API_URL = \"https://api.sap.com\"\nQUOTED='x=y'\n";
        let config = parse_lines(content, true);

        assert_eq!(config.get("SAP_CLIENT"), Some("100"));
        assert_eq!(config.get("SAP_API_URL"), Some("https://api.sap.com"));
        assert_eq!(config.get("QUOTED"), Some("x=y"));
        assert_eq!(config.len(), 3);
    }

    #[test]
    fn test_properties_keep_quotes() {
        let config = parse_lines("NAME = \"quoted\"\n", false);
        assert_eq!(config.get("NAME"), Some("\"quoted\""));
    }

    #[test]
    fn test_later_line_wins() {
        let config = parse_lines("A=1\nA=2\n", true);
        assert_eq!(config.get("A"), Some("2"));
    }

    #[test]
    fn test_invalid_json_is_unparseable() {
        let err = FileFormat::Json
            .parse(Path::new("config.json"), "{not json")
            .unwrap_err();
        assert!(matches!(err, LoadError::Unparseable { format: "json", .. }));
    }

    #[test]
    fn test_invalid_yaml_is_unparseable() {
        let err = FileFormat::Yaml
            .parse(Path::new("config.yaml"), "key: [unclosed")
            .unwrap_err();
        assert!(matches!(err, LoadError::Unparseable { format: "yaml", .. }));
    }

    #[test]
    fn test_empty_yaml_is_empty() {
        let config = FileFormat::Yaml.parse(Path::new("c.yaml"), "\n").unwrap();
        assert!(config.is_empty());
    }
}
