//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! The format-agnostic value shared by every adapter
//!
//! A loaded document is always one of three shapes:
//! - a scalar (string, number, boolean, or null)
//! - an ordered list of values (CSV/TXT rows, JSON arrays)
//! - an insertion-ordered map of string keys to values (JSON objects, XML elements)

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Shape category of a [`Value`], used when a saver rejects its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A string, number, boolean, or null.
    Scalar,
    /// An ordered list of values.
    List,
    /// A key/value mapping.
    Map,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar => f.write_str("scalar"),
            Shape::List => f.write_str("sequence"),
            Shape::Map => f.write_str("mapping"),
        }
    }
}

/// A document loaded into memory.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON `null`.
    #[default]
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON number, kept in its original integer/float representation.
    Number(serde_json::Number),
    /// Text.
    String(String),
    /// Ordered sequence of values.
    List(Vec<Value>),
    /// Mapping that preserves insertion order.
    Map(IndexMap<String, Value>),
}

impl Value {
    /// Returns the shape category of this value.
    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            Value::List(_) => Shape::List,
            Value::Map(_) => Shape::Map,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Shape::Scalar,
        }
    }

    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.shape() == Shape::Scalar
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Builds a list of single-column or multi-column string rows.
    ///
    /// This is the shape produced by the text and CSV loaders.
    pub fn rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(
            rows.into_iter()
                .map(|row| Value::List(row.into_iter().map(|s| Value::String(s.into())).collect()))
                .collect(),
        )
    }
}

/// String form used by the text, CSV, and XML savers.
///
/// Strings are written verbatim and null is empty. Lists and maps fall back
/// to compact JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::List(_) | Value::Map(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => items.serialize(serializer),
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // serde_json's map is ordered (preserve_order), so key order survives
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => serde_json::Value::Number(n),
            Value::String(s) => serde_json::Value::String(s),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Map(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, serde_json::Value::from(value)))
                    .collect(),
            ),
        }
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

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Value::Map(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shape() {
        assert_eq!(Value::from("x").shape(), Shape::Scalar);
        assert_eq!(Value::Null.shape(), Shape::Scalar);
        assert_eq!(Value::List(vec![]).shape(), Shape::List);
        assert_eq!(Value::Map(IndexMap::new()).shape(), Shape::Map);
    }

    #[test]
    fn test_display_string_form() {
        assert_eq!(Value::from("hello").to_string(), "hello");
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::from(json!(1.5)).to_string(), "1.5");
        assert_eq!(Value::from(json!([1, "a"])).to_string(), r#"[1,"a"]"#);
        assert_eq!(Value::from(json!({"k": null})).to_string(), r#"{"k":null}"#);
    }

    #[test]
    fn test_json_conversion_keeps_key_order() {
        let value = Value::from(json!({"z": 1, "a": [true, null], "m": "s"}));
        let keys: Vec<&str> = value.as_map().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);

        let back = serde_json::Value::from(value);
        assert_eq!(back, json!({"z": 1, "a": [true, null], "m": "s"}));
    }

    #[test]
    fn test_rows_builder() {
        let value = Value::rows([vec!["a", "b"], vec!["1"]]);
        assert_eq!(value, Value::from(json!([["a", "b"], ["1"]])));
    }
}
