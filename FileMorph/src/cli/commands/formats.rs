//! CLI listing of formats and conversion pairs

use crate::converter::supported_targets;
use crate::formats::Format;

pub fn execute() {
    println!("Supported formats:");
    for format in Format::ALL {
        let targets = supported_targets(format)
            .into_iter()
            .map(|t| format!(".{}", t.extension()))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  .{:<5} {:<5} -> {targets}", format.extension(), format.display_name());
    }
}
