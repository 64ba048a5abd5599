//! Command to print a path in directory form.

use crate::error::CliError;
use crate::utils::{build_platform, GlobalOptions};
use advpath::PathValue;
use clap::Args;

/// Print a path with a trailing separator.
#[derive(Args)]
pub struct AsDirectoryCommand {
    /// Path string to convert
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl AsDirectoryCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let platform = build_platform(global)?;
        let path = PathValue::new(self.path, &platform);

        println!("{}", path.as_directory(&platform));
        Ok(())
    }
}
