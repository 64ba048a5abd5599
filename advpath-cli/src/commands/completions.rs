//! Shell completion generation command.
//!
//! Prints clap_complete scripts for bash, zsh, fish, PowerShell and elvish.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "advpath";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        eprintln!("# Run the following command to enable completions:");

        match self.shell {
            Shell::Bash => {
                eprintln!(
                    "#   advpath completions bash > ~/.local/share/bash-completion/completions/advpath"
                );
                eprintln!("# Or source it directly in ~/.bashrc:");
                eprintln!("#   eval \"$(advpath completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   advpath completions zsh > ~/.zsh/completions/_advpath");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
                eprintln!("# Or add to ~/.zshrc:");
                eprintln!("#   eval \"$(advpath completions zsh)\"");
            }
            Shell::Fish => {
                eprintln!("#   advpath completions fish > ~/.config/fish/completions/advpath.fish");
                eprintln!("# Or add to config.fish:");
                eprintln!("#   advpath completions fish | source");
            }
            Shell::PowerShell => {
                eprintln!("#   advpath completions powershell > $PROFILE");
                eprintln!("# Or run:");
                eprintln!("#   advpath completions powershell | Out-String | Invoke-Expression");
            }
            _ => {}
        }

        eprintln!();

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
