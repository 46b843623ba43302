//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Format adapters
//!
//! Each adapter translates a file into a [`Value`] and back:
//! - Text (`.txt`) - one single-field row per line
//! - CSV (`.csv`) - comma-separated rows, ragged rows allowed
//! - JSON (`.json`) - full JSON value, 4-space indented output
//! - XML (`.xml`) - element tree folded into nested mappings

pub mod csv;
pub mod json;
pub mod text;
pub mod xml;

use crate::error::FormatResult;
use crate::value::Value;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A supported file format, identified by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Text,
    Csv,
    Json,
    Xml,
}

impl Format {
    /// Every supported format, in picker order.
    pub const ALL: [Format; 4] = [Format::Text, Format::Csv, Format::Json, Format::Xml];

    /// File extension without the leading dot
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Format::Text => "txt",
            Format::Csv => "csv",
            Format::Json => "json",
            Format::Xml => "xml",
        }
    }

    /// Get display name for UI
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Format::Text => "Text",
            Format::Csv => "CSV",
            Format::Json => "JSON",
            Format::Xml => "XML",
        }
    }

    /// Determine format from extension (case-insensitive, leading dot optional)
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        match ext.to_lowercase().as_str() {
            "txt" => Some(Format::Text),
            "csv" => Some(Format::Csv),
            "json" => Some(Format::Json),
            "xml" => Some(Format::Xml),
            _ => None,
        }
    }

    /// Determine format from a file path's extension
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }

    /// Read `path` with this format's loader.
    pub fn load<P: AsRef<Path>>(self, path: P) -> FormatResult<Value> {
        match self {
            Format::Text => text::read_text(path),
            Format::Csv => csv::read_csv(path),
            Format::Json => json::read_json(path),
            Format::Xml => xml::read_xml(path),
        }
    }

    /// Write `value` to `path` with this format's saver.
    pub fn save<P: AsRef<Path>>(self, value: &Value, path: P) -> FormatResult<()> {
        match self {
            Format::Text => text::write_text(value, path),
            Format::Csv => csv::write_csv(value, path),
            Format::Json => json::write_json(value, path),
            Format::Xml => xml::write_xml(value, path),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("text") {
            return Ok(Format::Text);
        }
        Format::from_extension(s).ok_or_else(|| {
            format!("Invalid format '{s}'. Valid values: txt/text, csv, json, xml")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_extension("txt"), Some(Format::Text));
        assert_eq!(Format::from_extension("CSV"), Some(Format::Csv));
        assert_eq!(Format::from_extension(".json"), Some(Format::Json));
        assert_eq!(Format::from_extension("xml"), Some(Format::Xml));
        assert_eq!(Format::from_extension("yaml"), None);
        assert_eq!(Format::from_extension(""), None);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path("data/report.Json"), Some(Format::Json));
        assert_eq!(Format::from_path("notes"), None);
        assert_eq!(Format::from_path("config.yaml"), None);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("text".parse::<Format>(), Ok(Format::Text));
        assert_eq!(".xml".parse::<Format>(), Ok(Format::Xml));
        assert!("yaml".parse::<Format>().is_err());
    }

    #[test]
    fn test_extension_round_trip() {
        for format in Format::ALL {
            assert_eq!(Format::from_extension(format.extension()), Some(format));
        }
    }
}
