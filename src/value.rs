//! Raw theme values and their scalar coercions.
//!
//! A theme document is a mapping from string keys to [`Value`]s. Values keep
//! the type they were written with; accessors on
//! [`ThemeDefinition`](crate::ThemeDefinition) coerce them on demand through
//! the `as_*` methods here. Every coercion returns `None` instead of failing,
//! so callers can substitute the documented default.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// The raw mapping held by a theme definition.
pub type ValueMap = BTreeMap<String, Value>;

/// A single raw value from a theme document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// A nested mapping, reachable through dotted key paths.
    Map(ValueMap),
}

/// A generic numeric value, as returned by
/// [`ThemeDefinition::number`](crate::ThemeDefinition::number).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns the value as a float.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Returns the value as an integer, truncating floats toward zero.
    ///
    /// Non-finite floats yield `0`.
    pub fn as_i64(self) -> i64 {
        match self {
            Number::Integer(i) => i,
            Number::Float(f) if f.is_finite() => f as i64,
            Number::Float(_) => 0,
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Integer(0)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

impl Value {
    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Map(_) => "mapping",
        }
    }

    /// Coerces to a boolean.
    ///
    /// Numbers are true when non-zero. Strings follow the usual plist
    /// convention: leading whitespace, one optional sign and any leading
    /// zeros are skipped, and the value is true when the next character is
    /// `Y`, `y`, `T`, `t` or a digit `1`-`9`. Mappings do not coerce.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Integer(i) => Some(*i != 0),
            Value::Float(f) => Some(*f != 0.0),
            Value::String(s) => Some(string_truthiness(s)),
            Value::Map(_) => None,
        }
    }

    /// Coerces to a number, preserving integer-ness where possible.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Bool(b) => Some(Number::Integer(i64::from(*b))),
            Value::Integer(i) => Some(Number::Integer(*i)),
            Value::Float(f) => Some(Number::Float(*f)),
            Value::String(s) => parse_number(s),
            Value::Map(_) => None,
        }
    }

    /// Coerces to an integer. Floats are truncated toward zero.
    pub fn as_i64(&self) -> Option<i64> {
        match self.as_number()? {
            Number::Float(f) if !f.is_finite() => None,
            n => Some(n.as_i64()),
        }
    }

    /// Coerces to a float.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    /// Returns a textual rendering of scalar values.
    ///
    /// Strings are returned as-is; numbers and booleans are formatted.
    /// Mappings have no textual form.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Integer(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::Map(_) => None,
        }
    }

    /// Returns the nested mapping, if this value is one.
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<ValueMap> for Value {
    fn from(map: ValueMap) -> Self {
        Value::Map(map)
    }
}

/// Finds `key` in a single mapping.
///
/// A literal entry wins. Otherwise a dotted key such as `sidebar.textColor`
/// walks nested mappings one segment at a time.
pub(crate) fn find<'a>(map: &'a ValueMap, key: &str) -> Option<&'a Value> {
    if let Some(value) = map.get(key) {
        return Some(value);
    }
    if !key.contains('.') {
        return None;
    }

    let mut segments = key.split('.');
    let mut current = map.get(segments.next()?)?;
    for segment in segments {
        current = current.as_map()?.get(segment)?;
    }
    Some(current)
}

fn string_truthiness(s: &str) -> bool {
    let s = s.trim_start();
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    let s = s.trim_start_matches('0');
    matches!(s.chars().next(), Some('Y' | 'y' | 'T' | 't' | '1'..='9'))
}

fn parse_number(s: &str) -> Option<Number> {
    let s = s.trim();
    if let Ok(i) = s.parse::<i64>() {
        return Some(Number::Integer(i));
    }
    s.parse::<f64>().ok().map(Number::Float)
}
