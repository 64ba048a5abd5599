//! Main entry point for the advpath CLI.
//!
//! Commands:
//! - `inspect`: Show how a path string decomposes
//! - `parent`, `root`, `as-directory`: Derived paths
//! - `shortcut`: Shortcut-token check via exit status
//! - `common-prefix`, `sort`: Operations over several paths
//! - `initial`: The path a prompt opens with

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    if let Err(e) = advpath::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: logging unavailable: {e}");
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        base_dir: cli.base_dir,
        project_roots: cli.project_roots,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Inspect(cmd) => cmd.execute(&global),
        cli::Command::Parent(cmd) => cmd.execute(&global),
        cli::Command::Root(cmd) => cmd.execute(&global),
        cli::Command::AsDirectory(cmd) => cmd.execute(&global),
        cli::Command::Shortcut(cmd) => cmd.execute(&global),
        cli::Command::CommonPrefix(cmd) => cmd.execute(&global),
        cli::Command::Sort(cmd) => cmd.execute(&global),
        cli::Command::Initial(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
