//! Command to print the path a prompt opens with.

use crate::error::CliError;
use crate::utils::{build_platform, build_workspace, load_configuration, GlobalOptions};
use advpath::{initial_path, DefaultInput, Platform};
use clap::Args;

/// Resolve the initial path from the configured preference.
///
/// Prints an empty line when no source applies.
#[derive(Args)]
pub struct InitialCommand {
    /// Document to treat as open in the editor
    #[arg(long, value_name = "PATH")]
    pub active_file: Option<String>,

    /// Override the configured preference
    /// (active-file-dir, project-root or empty)
    #[arg(long, value_name = "SOURCE")]
    pub default_input: Option<DefaultInput>,
}

impl InitialCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let platform = build_platform(global)?;

        let active = self.active_file.map(|file| platform.absolutify(&file));
        let workspace = build_workspace(&config, active);
        let preference = self.default_input.unwrap_or_else(|| config.default_input());

        println!("{}", initial_path(preference, &workspace, &platform));
        Ok(())
    }
}
