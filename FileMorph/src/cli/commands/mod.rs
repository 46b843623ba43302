use crate::formats::Format;
use clap::Subcommand;
use std::path::PathBuf;

pub mod convert;
mod execute;
pub mod formats;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a file to another format
    Convert {
        /// Source file (.txt, .csv, .json, or .xml)
        #[arg(short, long)]
        source: PathBuf,

        /// Target format: txt, csv, json, or xml
        #[arg(short, long)]
        target: Format,

        /// Destination file (defaults to the source path with the target extension)
        #[arg(short, long)]
        destination: Option<PathBuf>,

        /// Suppress step output
        #[arg(short, long)]
        quiet: bool,
    },

    /// List supported formats and permitted conversions
    Formats,
}
