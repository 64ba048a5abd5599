//! Command to print the longest common prefix of several paths.

use crate::error::CliError;
use crate::utils::{build_platform, load_configuration, GlobalOptions};
use advpath::{common_prefix, PathValue};
use clap::Args;

/// Print the longest prefix shared by every path.
#[derive(Args)]
pub struct CommonPrefixCommand {
    /// Paths to compare (at least two)
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Distinguish letter case (overrides the configured default)
    #[arg(long)]
    pub case_sensitive: bool,
}

impl CommonPrefixCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let platform = build_platform(global)?;

        let case_sensitive = self.case_sensitive || config.case_sensitive_prefix();
        let paths: Vec<PathValue> = self
            .paths
            .into_iter()
            .map(|p| PathValue::new(p, &platform))
            .collect();

        let prefix = common_prefix(&paths, case_sensitive, &platform)?;
        println!("{prefix}");
        Ok(())
    }
}
