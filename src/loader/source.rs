//! Theme source documents and their conversion into [`ValueMap`]s.
//!
//! Sources are parsed with `serde_json` / `serde_yaml` into their generic
//! value trees and then narrowed to the theme [`Value`] model. Entries the
//! model cannot represent (nulls, sequences, non-scalar YAML keys) are
//! dropped with a trace event rather than failing the whole document.

use std::fmt;
use std::path::Path;

use tracing::trace;

use crate::error::LoadError;
use crate::value::{Value, ValueMap};

/// Serialization format of a theme source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// Determines the format from a file extension (`json`, `yaml`, `yml`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(SourceFormat::Json)
        } else if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Some(SourceFormat::Yaml)
        } else {
            None
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Json => f.write_str("JSON"),
            SourceFormat::Yaml => f.write_str("YAML"),
        }
    }
}

/// Unparsed theme text together with its format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSource {
    format: SourceFormat,
    content: String,
}

impl ThemeSource {
    pub fn new(format: SourceFormat, content: impl Into<String>) -> Self {
        Self {
            format,
            content: content.into(),
        }
    }

    pub fn json(content: impl Into<String>) -> Self {
        Self::new(SourceFormat::Json, content)
    }

    /// YAML source. Plain scalars follow YAML typing, so hex colors that
    /// look numeric (`123456`, `123e45`) should be quoted.
    pub fn yaml(content: impl Into<String>) -> Self {
        Self::new(SourceFormat::Yaml, content)
    }

    /// Reads a source file, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// [`LoadError::UnsupportedFormat`] for unknown extensions and
    /// [`LoadError::Io`] when the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let format = SourceFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(format, content))
    }

    pub fn format(&self) -> SourceFormat {
        self.format
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Parses the source into a top-level mapping.
    ///
    /// # Errors
    ///
    /// [`LoadError::Parse`] for syntax errors and [`LoadError::NotAMapping`]
    /// when the top level is anything other than a mapping.
    pub fn parse(&self) -> Result<ValueMap, LoadError> {
        let parse_error = |message: String| LoadError::Parse {
            format: self.format,
            message,
        };
        let not_a_mapping = |found| LoadError::NotAMapping {
            context: "theme document".to_string(),
            found,
        };

        match self.format {
            SourceFormat::Json => {
                let doc: serde_json::Value =
                    serde_json::from_str(&self.content).map_err(|e| parse_error(e.to_string()))?;
                match doc {
                    serde_json::Value::Object(object) => Ok(json_object(object)),
                    other => Err(not_a_mapping(json_kind(&other))),
                }
            }
            SourceFormat::Yaml => {
                let doc: serde_yaml::Value =
                    serde_yaml::from_str(&self.content).map_err(|e| parse_error(e.to_string()))?;
                match untag(doc) {
                    serde_yaml::Value::Mapping(mapping) => Ok(yaml_mapping(mapping)),
                    other => Err(not_a_mapping(yaml_kind(&other))),
                }
            }
        }
    }
}

fn json_object(object: serde_json::Map<String, serde_json::Value>) -> ValueMap {
    object
        .into_iter()
        .filter_map(|(key, value)| match json_value(value) {
            Some(value) => Some((key, value)),
            None => {
                trace!(key = %key, "dropping theme entry with unsupported JSON value");
                None
            }
        })
        .collect()
}

fn json_value(value: serde_json::Value) -> Option<Value> {
    match value {
        serde_json::Value::Bool(b) => Some(Value::Bool(b)),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Some(Value::Integer(i)),
            None => n.as_f64().map(Value::Float),
        },
        serde_json::Value::String(s) => Some(Value::String(s)),
        serde_json::Value::Object(object) => Some(Value::Map(json_object(object))),
        serde_json::Value::Null | serde_json::Value::Array(_) => None,
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "mapping",
    }
}

fn untag(value: serde_yaml::Value) -> serde_yaml::Value {
    match value {
        serde_yaml::Value::Tagged(tagged) => untag(tagged.value),
        other => other,
    }
}

fn yaml_mapping(mapping: serde_yaml::Mapping) -> ValueMap {
    mapping
        .into_iter()
        .filter_map(|(key, value)| {
            let key = match untag(key) {
                serde_yaml::Value::String(s) => s,
                serde_yaml::Value::Number(n) => n.to_string(),
                serde_yaml::Value::Bool(b) => b.to_string(),
                other => {
                    trace!(kind = yaml_kind(&other), "dropping theme entry with non-scalar key");
                    return None;
                }
            };
            match yaml_value(value) {
                Some(value) => Some((key, value)),
                None => {
                    trace!(key = %key, "dropping theme entry with unsupported YAML value");
                    None
                }
            }
        })
        .collect()
}

fn yaml_value(value: serde_yaml::Value) -> Option<Value> {
    match untag(value) {
        serde_yaml::Value::Bool(b) => Some(Value::Bool(b)),
        serde_yaml::Value::Number(n) => match n.as_i64() {
            Some(i) => Some(Value::Integer(i)),
            None => n.as_f64().map(Value::Float),
        },
        serde_yaml::Value::String(s) => Some(Value::String(s)),
        serde_yaml::Value::Mapping(mapping) => Some(Value::Map(yaml_mapping(mapping))),
        serde_yaml::Value::Null
        | serde_yaml::Value::Sequence(_)
        | serde_yaml::Value::Tagged(_) => None,
    }
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "boolean",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(SourceFormat::from_path(Path::new("dark.json")), Some(SourceFormat::Json));
        assert_eq!(SourceFormat::from_path(Path::new("dark.YAML")), Some(SourceFormat::Yaml));
        assert_eq!(SourceFormat::from_path(Path::new("a/dark.yml")), Some(SourceFormat::Yaml));
        assert_eq!(SourceFormat::from_path(Path::new("dark.plist")), None);
        assert_eq!(SourceFormat::from_path(Path::new("dark")), None);
    }

    #[test]
    fn test_parse_json_scalars_and_nesting() {
        let source = ThemeSource::json(
            r##"{
                "accentColor": "#FF0000",
                "titleSize": 14,
                "lineHeight": 1.5,
                "showsTags": true,
                "sidebar": { "textColor": "333333" }
            }"##,
        );
        let map = source.parse().unwrap();

        assert_eq!(map["accentColor"], Value::from("#FF0000"));
        assert_eq!(map["titleSize"], Value::Integer(14));
        assert_eq!(map["lineHeight"], Value::Float(1.5));
        assert_eq!(map["showsTags"], Value::Bool(true));
        let sidebar = map["sidebar"].as_map().unwrap();
        assert_eq!(sidebar["textColor"], Value::from("333333"));
    }

    #[test]
    fn test_parse_json_drops_null_and_arrays() {
        let map = ThemeSource::json(r#"{"a": null, "b": [1, 2], "c": 1}"#)
            .parse()
            .unwrap();
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("c"));
    }

    #[test]
    fn test_parse_yaml() {
        let source = ThemeSource::yaml(
            "accentColor: '#FF0000'\ntitleSize: 14\nmargin:\n  top: 2\n1: numeric key\n",
        );
        let map = source.parse().unwrap();

        assert_eq!(map["accentColor"], Value::from("#FF0000"));
        assert_eq!(map["titleSize"], Value::Integer(14));
        assert!(map["margin"].as_map().is_some());
        assert_eq!(map["1"], Value::from("numeric key"));
    }

    #[test]
    fn test_top_level_must_be_mapping() {
        let err = ThemeSource::json("[1, 2, 3]").parse().unwrap_err();
        assert!(matches!(err, LoadError::NotAMapping { found: "array", .. }));

        let err = ThemeSource::yaml("just a string").parse().unwrap_err();
        assert!(matches!(err, LoadError::NotAMapping { found: "string", .. }));

        let err = ThemeSource::yaml("~").parse().unwrap_err();
        assert!(matches!(err, LoadError::NotAMapping { found: "null", .. }));
    }

    #[test]
    fn test_syntax_error() {
        let err = ThemeSource::json("{ not json").parse().unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse {
                format: SourceFormat::Json,
                ..
            }
        ));
    }

    #[test]
    fn test_from_path_unsupported() {
        let err = ThemeSource::from_path("theme.plist").unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }
}
