//! Command to print the filesystem root above a path.

use crate::error::CliError;
use crate::utils::{build_platform, GlobalOptions};
use advpath::PathValue;
use clap::Args;

/// Print the root of the absolute form of a path.
#[derive(Args)]
pub struct RootCommand {
    /// Path string to find the root of
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl RootCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let platform = build_platform(global)?;
        let path = PathValue::new(self.path, &platform);

        println!("{}", path.root(&platform));
        Ok(())
    }
}
