//! # `FileMorph`
//!
//! A small conversion engine between four flat data formats: plain text,
//! CSV, JSON, and XML.
//!
//! Every file is loaded into a common [`Value`] (scalar, list, or mapping)
//! by its format adapter, then written out by the target format's adapter.
//!
//! ## Quick Start
//!
//! ```no_run
//! use filemorph::{converter, Format};
//!
//! // CSV rows become a JSON array of arrays
//! converter::convert("people.csv", "people.json", Format::Json)?;
//!
//! // Ask which targets a picker should offer
//! let targets = converter::supported_targets(Format::Xml);
//! assert_eq!(targets, vec![Format::Json]);
//! # Ok::<(), filemorph::Error>(())
//! ```
//!
//! ## Permitted Conversions
//!
//! Text ↔ CSV, Text ↔ JSON, CSV ↔ JSON, JSON ↔ XML. Anything else fails with
//! [`Error::UnsupportedConversion`] before any file is read.
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `filemorph` command-line binary

pub mod converter;
pub mod error;
pub mod formats;
pub mod value;

// Re-exports for convenience
pub use error::{Error, ErrorKind, FormatError, Result};
pub use formats::Format;
pub use value::{Shape, Value};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::converter::{
        ConvertPhase, ConvertProgress, PERMITTED_CONVERSIONS, convert, convert_with_progress,
        default_output_path, is_permitted, supported_targets,
    };
    pub use crate::error::{Error, ErrorKind, FormatError, FormatResult, Result};
    pub use crate::formats::Format;
    pub use crate::formats::xml::XmlElement;
    pub use crate::value::{Shape, Value};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
