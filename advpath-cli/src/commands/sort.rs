//! Command to print paths in display order.

use crate::error::CliError;
use crate::utils::{build_platform, GlobalOptions};
use advpath::PathValue;
use clap::Args;

/// Sort paths with locale-aware collation, one per line.
#[derive(Args)]
pub struct SortCommand {
    /// Paths to sort
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Print in descending order
    #[arg(long)]
    pub reverse: bool,
}

impl SortCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let platform = build_platform(global)?;
        let mut paths: Vec<PathValue> = self
            .paths
            .into_iter()
            .map(|p| PathValue::new(p, &platform))
            .collect();

        paths.sort();
        if self.reverse {
            paths.reverse();
        }

        for path in &paths {
            println!("{path}");
        }
        Ok(())
    }
}
