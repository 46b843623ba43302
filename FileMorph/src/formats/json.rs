//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! JSON adapter

use crate::error::FormatResult;
use crate::value::Value;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Read a JSON file from disk
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid JSON.
pub fn read_json<P: AsRef<Path>>(path: P) -> FormatResult<Value> {
    let content = fs::read_to_string(path)?;
    parse_json(&content)
}

/// Parse JSON from string
///
/// # Errors
/// Returns an error if the JSON is malformed.
pub fn parse_json(content: &str) -> FormatResult<Value> {
    let value: Value = serde_json::from_str(content)?;
    Ok(value)
}

/// Write a value to disk as JSON
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_json<P: AsRef<Path>>(value: &Value, path: P) -> FormatResult<()> {
    let json = serialize_json(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Serialize a value to JSON with 4-space indentation, keeping key order
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn serialize_json(value: &Value) -> FormatResult<String> {
    let mut output = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut output, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_native_scalars() {
        let value = parse_json(r#"{"n": 1, "f": 2.5, "b": false, "z": null, "s": "x"}"#).unwrap();
        assert_eq!(value, Value::from(json!({"n": 1, "f": 2.5, "b": false, "z": null, "s": "x"})));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_json("{\"a\": ").is_err());
    }

    #[test]
    fn test_serialize_four_space_indent() {
        let value = Value::from(json!({"b": [1, 2], "a": "x"}));
        let expected = "{\n    \"b\": [\n        1,\n        2\n    ],\n    \"a\": \"x\"\n}";
        assert_eq!(serialize_json(&value).unwrap(), expected);
    }

    #[test]
    fn test_serialize_is_stable() {
        let value = parse_json(r#"{"k": {"y": 1, "x": [true]}}"#).unwrap();
        let first = serialize_json(&value).unwrap();
        let second = serialize_json(&parse_json(&first).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
