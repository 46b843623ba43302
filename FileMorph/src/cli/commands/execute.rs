//! Command execution implementations

use super::Commands;
use super::{convert, formats};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Convert {
                source,
                target,
                destination,
                quiet,
            } => convert::execute(source, *target, destination.as_deref(), *quiet),
            Commands::Formats => {
                formats::execute();
                Ok(())
            }
        }
    }
}
