//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Plain text adapter
//!
//! Loading yields one single-field row per line. Saving flattens rows back
//! into comma-joined lines, or a mapping into `key: value` lines.

use crate::error::FormatResult;
use crate::value::Value;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Read a text file from disk
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_text<P: AsRef<Path>>(path: P) -> FormatResult<Value> {
    let content = fs::read_to_string(path)?;
    let value = parse_text(&content);
    let line_count = value.as_list().map_or(0, <[Value]>::len);
    tracing::debug!("Read {line_count} text lines");
    Ok(value)
}

/// Split text into rows, each holding the line without its line ending
#[must_use]
pub fn parse_text(content: &str) -> Value {
    Value::rows(content.lines().map(|line| [line]))
}

/// Write a value to disk as text
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_text<P: AsRef<Path>>(value: &Value, path: P) -> FormatResult<()> {
    let text = serialize_text(value);
    fs::write(path, text)?;
    Ok(())
}

/// Render a value as newline-terminated lines
///
/// Any value is accepted; shapes without a line structure become a single line.
#[must_use]
pub fn serialize_text(value: &Value) -> String {
    let mut out = String::new();

    match value {
        Value::List(items) => {
            for item in items {
                match item {
                    Value::List(fields) => out.push_str(&join_fields(fields)),
                    other => {
                        let _ = write!(out, "{other}");
                    }
                }
                out.push('\n');
            }
        }
        Value::Map(entries) => {
            for (key, value) in entries {
                let _ = writeln!(out, "{key}: {value}");
            }
        }
        scalar => {
            let _ = writeln!(out, "{scalar}");
        }
    }

    out
}

fn join_fields(fields: &[Value]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_lines() {
        let value = parse_text("first\nsecond line\r\nthird\n");
        assert_eq!(value, Value::from(json!([["first"], ["second line"], ["third"]])));
    }

    #[test]
    fn test_read_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lines.txt");
        fs::write(&path, "one\ntwo\n").unwrap();
        assert_eq!(read_text(&path).unwrap(), Value::from(json!([["one"], ["two"]])));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_text(""), Value::List(vec![]));
    }

    #[test]
    fn test_parse_keeps_blank_lines() {
        assert_eq!(parse_text("a\n\nb"), Value::from(json!([["a"], [""], ["b"]])));
    }

    #[test]
    fn test_serialize_rows() {
        let value = Value::from(json!([["a", "b"], ["1", 2], "loose", [true, null]]));
        assert_eq!(serialize_text(&value), "a,b\n1,2\nloose\ntrue,\n");
    }

    #[test]
    fn test_serialize_mapping() {
        let value = Value::from(json!({"name": "x", "count": 3, "tags": ["a"]}));
        assert_eq!(serialize_text(&value), "name: x\ncount: 3\ntags: [\"a\"]\n");
    }

    #[test]
    fn test_serialize_scalar() {
        assert_eq!(serialize_text(&Value::from("only")), "only\n");
    }
}
