//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! CSV adapter
//!
//! No header inference: every record, including the first, is a data row.

use super::Format;
use crate::error::{FormatError, FormatResult};
use crate::value::Value;
use ::csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

const ROWS_EXPECTED: &str = "a non-empty sequence of rows";

/// Read a CSV file from disk
///
/// # Errors
/// Returns an error if the file cannot be read or has malformed records.
pub fn read_csv<P: AsRef<Path>>(path: P) -> FormatResult<Value> {
    let content = fs::read_to_string(path)?;
    parse_csv(&content)
}

/// Parse comma-separated rows from a string
///
/// # Errors
/// Returns an error if a record is malformed.
pub fn parse_csv(content: &str) -> FormatResult<Value> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    tracing::debug!("Parsed {} CSV rows", rows.len());
    Ok(Value::rows(rows))
}

/// Write a value to disk as CSV
///
/// # Errors
/// Returns an error if the value is not a list of rows or the file cannot be written.
pub fn write_csv<P: AsRef<Path>>(value: &Value, path: P) -> FormatResult<()> {
    let csv = serialize_csv(value)?;
    fs::write(path, csv)?;
    Ok(())
}

/// Serialize rows to CSV text
///
/// # Errors
/// Returns [`FormatError::Shape`] unless `value` is a non-empty list whose
/// every element is itself a list.
pub fn serialize_csv(value: &Value) -> FormatResult<String> {
    let rows = tabular_rows(value)?;
    tracing::debug!("Writing {} CSV rows", rows.len());

    let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());
    for row in rows {
        writer.write_record(row.iter().map(ToString::to_string))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| FormatError::Io(std::io::Error::new(e.error().kind(), e.to_string())))?;
    Ok(String::from_utf8(bytes)?)
}

fn tabular_rows(value: &Value) -> FormatResult<Vec<&[Value]>> {
    let shape_error = |found| FormatError::Shape {
        format: Format::Csv,
        expected: ROWS_EXPECTED,
        found,
    };

    let items = match value {
        Value::List(items) if !items.is_empty() => items,
        other => return Err(shape_error(other.shape())),
    };

    items
        .iter()
        .map(|item| item.as_list().ok_or_else(|| shape_error(item.shape())))
        .collect()
}
