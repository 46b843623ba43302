//! CLI interface for format conversion

use crate::converter::{self, ConvertProgress};
use crate::error::{Error, ErrorKind};
use crate::formats::Format;
use std::path::Path;

pub fn execute(
    source: &Path,
    target: Format,
    destination: Option<&Path>,
    quiet: bool,
) -> anyhow::Result<()> {
    let destination = destination.map_or_else(
        || converter::default_output_path(source, target),
        Path::to_path_buf,
    );

    let print_step = |p: &ConvertProgress| {
        if !quiet {
            println!("[{}/{}] {}", p.current, p.total, p.message);
        }
    };

    match converter::convert_with_progress(source, &destination, target, &print_step) {
        Ok(()) => {
            println!("Converted {} -> {}", source.display(), destination.display());
            Ok(())
        }
        Err(err) => Err(anyhow::anyhow!(describe_error(&err))),
    }
}

/// Render a conversion failure as user-facing text
fn describe_error(err: &Error) -> String {
    match err {
        Error::UnsupportedFormat { extension } if extension.is_empty() => {
            "Cannot detect input format: the source file has no extension.\n\
             Supported extensions: .txt, .csv, .json, .xml"
                .to_string()
        }
        Error::UnsupportedConversion { from, to } => {
            let targets = converter::supported_targets(*from)
                .into_iter()
                .map(Format::extension)
                .collect::<Vec<_>>()
                .join(", ");
            format!("Unsupported conversion: {from} -> {to}\n{from} files can be converted to: {targets}")
        }
        other => match other.kind() {
            ErrorKind::Save if other.is_shape_error() => {
                format!("{other}\nThe source data does not fit the target format's structure.")
            }
            _ => other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_unsupported_conversion() {
        let err = Error::UnsupportedConversion {
            from: Format::Csv,
            to: Format::Xml,
        };
        assert_eq!(
            describe_error(&err),
            "Unsupported conversion: CSV -> XML\nCSV files can be converted to: txt, json"
        );
    }

    #[test]
    fn test_describe_missing_extension() {
        let err = Error::UnsupportedFormat {
            extension: String::new(),
        };
        assert!(describe_error(&err).starts_with("Cannot detect input format"));
    }
}
