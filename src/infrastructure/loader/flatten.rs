//! Flattening of nested JSON/YAML documents into key/value pairs.
//!
//! Nested mapping keys are joined with [`SEPARATOR`]; sequences become a
//! comma-joined string of their rendered elements.

use serde_yaml::Value;

use crate::domain::models::Configuration;

/// Joins the keys of nested mappings
pub const SEPARATOR: &str = "_";

/// Flatten a parsed document.
///
/// A null document is empty. Any other non-mapping document becomes a
/// single entry under the empty key.
pub fn flatten_document(document: &Value) -> Configuration {
    let mut config = Configuration::new();
    match untag(document) {
        Value::Null => {}
        Value::Mapping(map) => {
            for (key, value) in map {
                flatten_into(&mut config, &render_key(key), value);
            }
        }
        other => config.insert("", render_value(other)),
    }
    config
}

fn flatten_into(config: &mut Configuration, prefix: &str, value: &Value) {
    match untag(value) {
        Value::Mapping(map) => {
            for (key, nested) in map {
                let key = format!("{prefix}{SEPARATOR}{}", render_key(key));
                flatten_into(config, &key, nested);
            }
        }
        other => config.insert(prefix, render_value(other)),
    }
}

fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn render_key(key: &Value) -> String {
    render_value(untag(key))
}

/// Render a leaf value the way it is stored in a configuration.
fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => items
            .iter()
            .map(|item| render_element(untag(item)))
            .collect::<Vec<_>>()
            .join(","),
        Value::Mapping(_) => compact(value),
        Value::Tagged(tagged) => render_value(&tagged.value),
    }
}

fn render_element(value: &Value) -> String {
    match value {
        Value::Sequence(_) | Value::Mapping(_) => compact(value),
        scalar => render_value(scalar),
    }
}

fn compact(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| {
        serde_yaml::to_string(value)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten_yaml(yaml: &str) -> Configuration {
        flatten_document(&serde_yaml::from_str(yaml).unwrap())
    }

    #[test]
    fn test_nested_keys_joined_with_underscore() {
        let config = flatten_yaml("SAP:\n  CLIENT: 100\n  API:\n    URL: https://api.sap.com\n");
        assert_eq!(config.get("SAP_CLIENT"), Some("100"));
        assert_eq!(config.get("SAP_API_URL"), Some("https://api.sap.com"));
        assert_eq!(config.len(), 2);
    }

    #[test]
    fn test_sequences_join_with_commas() {
        let config = flatten_yaml("HOSTS:\n  - a.example.com\n  - b.example.com\nPORTS: [80, 443]\n");
        assert_eq!(config.get("HOSTS"), Some("a.example.com,b.example.com"));
        assert_eq!(config.get("PORTS"), Some("80,443"));
    }

    #[test]
    fn test_scalar_rendering() {
        let config = flatten_yaml("ENABLED: true\nRATIO: 1.5\nEMPTY: null\nNAME: plain\n");
        assert_eq!(config.get("ENABLED"), Some("true"));
        assert_eq!(config.get("RATIO"), Some("1.5"));
        assert_eq!(config.get("EMPTY"), Some(""));
        assert_eq!(config.get("NAME"), Some("plain"));
    }

    #[test]
    fn test_non_string_keys_are_rendered() {
        let config = flatten_yaml("PORTS:\n  80: http\n  443: https\n");
        assert_eq!(config.get("PORTS_80"), Some("http"));
        assert_eq!(config.get("PORTS_443"), Some("https"));
    }

    #[test]
    fn test_null_document_is_empty() {
        assert!(flatten_document(&Value::Null).is_empty());
    }

    #[test]
    fn test_scalar_document_uses_empty_key() {
        let config = flatten_yaml("just-a-string");
        assert_eq!(config.get(""), Some("just-a-string"));
    }

    #[test]
    fn test_mappings_inside_sequences_render_as_json() {
        let config = flatten_yaml("ITEMS:\n  - name: a\n  - name: b\n");
        assert_eq!(config.get("ITEMS"), Some(r#"{"name":"a"},{"name":"b"}"#));
    }

    #[test]
    fn test_json_documents_flatten_the_same_way() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"SAP": {"CLIENT": "100", "HOSTS": ["x", "y"]}}"#).unwrap();
        let config = flatten_document(&serde_yaml::to_value(json).unwrap());
        assert_eq!(config.get("SAP_CLIENT"), Some("100"));
        assert_eq!(config.get("SAP_HOSTS"), Some("x,y"));
    }
}
