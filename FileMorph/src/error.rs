//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Error types for `FileMorph`

use std::path::PathBuf;

use thiserror::Error;

use crate::formats::Format;
use crate::value::Shape;

/// Failure inside a single format adapter (reading, parsing, or writing).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum FormatError {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Parsing Errors ====================
    /// CSV parsing or writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML parsing or writing error.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Well-formedness problem the XML tokenizer does not catch itself.
    #[error("malformed XML: {0}")]
    MalformedXml(String),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    // ==================== Shape Errors ====================
    /// The value handed to a saver does not have a shape the format can hold.
    #[error("{format} output requires {expected}, got {found}")]
    Shape {
        /// The target format.
        format: Format,
        /// What the saver accepts.
        expected: &'static str,
        /// Shape of the offending value.
        found: Shape,
    },

    /// A mapping key cannot be used as an XML element name.
    #[error("invalid XML element name: {0:?}")]
    InvalidElementName(String),
}

impl FormatError {
    /// Returns true if the value was rejected because of its shape.
    #[must_use]
    pub fn is_shape_error(&self) -> bool {
        matches!(self, FormatError::Shape { .. } | FormatError::InvalidElementName(_))
    }
}

/// The error type for conversions.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// The input file extension is not one of txt, csv, json, xml.
    #[error("unsupported format: {extension:?}")]
    UnsupportedFormat {
        /// The extension found on the input path (empty if none).
        extension: String,
    },

    /// The (source, target) pair is not one of the permitted conversions.
    #[error("unsupported conversion: {from} -> {to}")]
    UnsupportedConversion {
        /// Format of the input file.
        from: Format,
        /// Requested output format.
        to: Format,
    },

    /// Reading or parsing the input file failed.
    #[error("failed to load {format} from {}: {source}", path.display())]
    Load {
        format: Format,
        path: PathBuf,
        source: FormatError,
    },

    /// Writing the output file failed, or the loaded value has the wrong shape.
    #[error("failed to save {format} to {}: {source}", path.display())]
    Save {
        format: Format,
        path: PathBuf,
        source: FormatError,
    },
}

/// Category of an [`Error`], for callers that render errors themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedFormat,
    UnsupportedConversion,
    Load,
    Save,
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Error::UnsupportedConversion { .. } => ErrorKind::UnsupportedConversion,
            Error::Load { .. } => ErrorKind::Load,
            Error::Save { .. } => ErrorKind::Save,
        }
    }

    /// Returns true for a save failure caused by a value shape mismatch.
    #[must_use]
    pub fn is_shape_error(&self) -> bool {
        match self {
            Error::Save { source, .. } => source.is_shape_error(),
            _ => false,
        }
    }
}

/// A specialized Result type for conversions.
pub type Result<T> = std::result::Result<T, Error>;

/// A specialized Result type for format adapters.
pub type FormatResult<T> = std::result::Result<T, FormatError>;
