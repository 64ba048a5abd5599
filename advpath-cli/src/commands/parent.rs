//! Command to print the logical parent of a path.

use crate::error::CliError;
use crate::utils::{build_platform, GlobalOptions};
use advpath::PathValue;
use clap::Args;

/// Print the logical parent of a path, in directory form.
#[derive(Args)]
pub struct ParentCommand {
    /// Path string to climb from
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ParentCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let platform = build_platform(global)?;
        let path = PathValue::new(self.path, &platform);

        println!("{}", path.parent(&platform));
        Ok(())
    }
}
