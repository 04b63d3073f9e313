//! Configuration options loaded from the documentation's JSON document
//!
//! The document is consumer-defined: this module only checks that it is a
//! JSON object and keeps it immutable for the lifetime of the build.

mod consts;

pub use consts::{CONTEXT_KEY, DEFAULT_CONFIG_PATH};

use crate::error::{DocjinjaError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Configuration mapping exposed to templates as `config_options`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigOptions {
    options: Map<String, Value>,
}

impl ConfigOptions {
    /// Read and parse the JSON document at `path`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DocjinjaError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let value: Value =
            serde_json::from_str(&content).map_err(|e| DocjinjaError::ConfigParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let options = Self::from_value(value)?;
        tracing::info!(
            path = %path.display(),
            keys = options.len(),
            "loaded configuration options"
        );
        Ok(options)
    }

    /// Parse configuration options from JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Build configuration options from a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(options) => Ok(Self { options }),
            other => Err(DocjinjaError::ConfigNotObject {
                found: json_type_name(&other),
            }),
        }
    }

    /// Look up a top-level option
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Top-level option names
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Borrow the underlying JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.options
    }
}

/// Resolve where the configuration document lives
///
/// An explicit path wins; relative explicit paths are taken relative to
/// `srcdir`. Without one, `srcdir/_static/configuration.json` is used.
pub fn resolve_config_path(srcdir: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => srcdir.join(path),
        None => srcdir.join(DEFAULT_CONFIG_PATH),
    }
}

/// Name of a JSON value's type, as used in error messages and listings
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object() {
        let config = ConfigOptions::from_json_str(r#"{"product": "Gateway", "port": 8080}"#).unwrap();
        assert_eq!(config.len(), 2);
        assert_eq!(config.get("product"), Some(&json!("Gateway")));
        assert_eq!(config.get("port"), Some(&json!(8080)));
        assert!(config.get("missing").is_none());
    }

    #[test]
    fn test_parse_nested_object_keeps_structure() {
        let config =
            ConfigOptions::from_json_str(r#"{"server": {"tls": {"enabled": true}}}"#).unwrap();
        assert_eq!(
            config.get("server"),
            Some(&json!({"tls": {"enabled": true}}))
        );
    }

    #[test]
    fn test_keys_keep_document_order() {
        let config = ConfigOptions::from_json_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let keys: Vec<&str> = config.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_empty_object() {
        let config = ConfigOptions::from_json_str("{}").unwrap();
        assert!(config.is_empty());
        assert_eq!(config.keys().count(), 0);
    }

    #[test]
    fn test_reject_non_object() {
        let err = ConfigOptions::from_json_str("[1, 2, 3]").unwrap_err();
        match err {
            DocjinjaError::ConfigNotObject { found } => assert_eq!(found, "array"),
            other => panic!("Expected ConfigNotObject, got {:?}", other),
        }
    }

    #[test]
    fn test_reject_malformed_json() {
        let err = ConfigOptions::from_json_str("{\"a\": ").unwrap_err();
        assert!(matches!(err, DocjinjaError::ConfigParse { .. }));
    }

    #[test]
    fn test_serializes_transparently() {
        let config = ConfigOptions::from_value(json!({"a": 1})).unwrap();
        assert_eq!(serde_json::to_value(&config).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_resolve_default_path() {
        let path = resolve_config_path(Path::new("docs"), None);
        assert_eq!(path, Path::new("docs").join("_static").join("configuration.json"));
    }

    #[test]
    fn test_resolve_relative_explicit_path() {
        let path = resolve_config_path(Path::new("docs"), Some(Path::new("conf/options.json")));
        assert_eq!(path, Path::new("docs").join("conf/options.json"));
    }

    #[test]
    fn test_resolve_absolute_explicit_path() {
        let absolute = std::env::temp_dir().join("options.json");
        let path = resolve_config_path(Path::new("docs"), Some(&absolute));
        assert_eq!(path, absolute);
    }
}
