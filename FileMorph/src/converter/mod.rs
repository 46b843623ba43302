//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Conversion routing
//!
//! Only these pairs are converted, in either direction:
//! - Text ↔ CSV
//! - Text ↔ JSON
//! - CSV ↔ JSON
//! - JSON ↔ XML
//!
//! Text ↔ XML and CSV ↔ XML are rejected even though they could be routed
//! through JSON.

mod progress;

pub use progress::{ConvertPhase, ConvertProgress, ConvertProgressCallback};

use crate::error::{Error, Result};
use crate::formats::Format;
use std::path::{Path, PathBuf};

/// Every permitted (source, target) pair.
pub const PERMITTED_CONVERSIONS: [(Format, Format); 8] = [
    (Format::Text, Format::Csv),
    (Format::Csv, Format::Text),
    (Format::Text, Format::Json),
    (Format::Json, Format::Text),
    (Format::Csv, Format::Json),
    (Format::Json, Format::Csv),
    (Format::Json, Format::Xml),
    (Format::Xml, Format::Json),
];

/// Check whether converting `source` into `target` is allowed
#[must_use]
pub fn is_permitted(source: Format, target: Format) -> bool {
    PERMITTED_CONVERSIONS.contains(&(source, target))
}

/// Formats a file of format `source` can be converted into
#[must_use]
pub fn supported_targets(source: Format) -> Vec<Format> {
    Format::ALL
        .into_iter()
        .filter(|&target| is_permitted(source, target))
        .collect()
}

/// Output path next to `input`, with the extension swapped for `target`'s
#[must_use]
pub fn default_output_path<P: AsRef<Path>>(input: P, target: Format) -> PathBuf {
    input.as_ref().with_extension(target.extension())
}

/// Convert `input` into `target` format, writing the result to `output`
///
/// The source format comes from the input file extension.
///
/// # Errors
/// Returns [`Error::UnsupportedFormat`] or [`Error::UnsupportedConversion`]
/// before any file is touched, [`Error::Load`] if the input cannot be read,
/// and [`Error::Save`] if the output cannot be written or the loaded data
/// has the wrong shape for `target`.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q, target: Format) -> Result<()> {
    convert_with_progress(input, output, target, &|_| {})
}

/// Convert with a progress callback
///
/// # Errors
/// See [`convert`].
pub fn convert_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    target: Format,
    progress: ConvertProgressCallback,
) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let source = resolve_source(input)?;
    if !is_permitted(source, target) {
        tracing::warn!("Rejected conversion {source} -> {target} for {input:?}");
        return Err(Error::UnsupportedConversion {
            from: source,
            to: target,
        });
    }

    tracing::info!("Converting {source}→{target}: {input:?} → {output:?}");

    progress(&ConvertProgress::new(
        ConvertPhase::ReadingSource,
        1,
        2,
        format!("Reading {source} file..."),
    ));
    let value = source.load(input).map_err(|source_err| {
        tracing::warn!("Load failed for {input:?}: {source_err}");
        Error::Load {
            format: source,
            path: input.to_path_buf(),
            source: source_err,
        }
    })?;

    progress(&ConvertProgress::new(
        ConvertPhase::WritingOutput,
        2,
        2,
        format!("Writing {target} file..."),
    ));
    target.save(&value, output).map_err(|save_err| {
        tracing::warn!("Save failed for {output:?}: {save_err}");
        Error::Save {
            format: target,
            path: output.to_path_buf(),
            source: save_err,
        }
    })?;

    progress(&ConvertProgress::new(
        ConvertPhase::Complete,
        2,
        2,
        "Conversion complete",
    ));
    tracing::info!("Conversion complete");
    Ok(())
}

fn resolve_source(input: &Path) -> Result<Format> {
    Format::from_path(input).ok_or_else(|| Error::UnsupportedFormat {
        extension: input
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default(),
    })
}
