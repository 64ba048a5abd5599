//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AsDirectoryCommand, CommonPrefixCommand, CompletionsCommand, InitialCommand, InspectCommand,
    ParentCommand, RootCommand, ShortcutCommand, SortCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line front end for decomposing and completing path strings.
#[derive(Parser)]
#[command(name = "advpath")]
#[command(version, about = "Decompose and complete path strings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load an additional configuration file
    #[arg(long, value_name = "PATH", global = true, env = "ADVPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Resolve relative paths against this directory instead of the working directory
    #[arg(long, value_name = "PATH", global = true, env = "ADVPATH_BASE_DIR")]
    pub base_dir: Option<String>,

    /// Treat PATH as an open project root (repeatable)
    #[arg(long = "project-root", value_name = "PATH", global = true)]
    pub project_roots: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show how a path string decomposes
    Inspect(InspectCommand),

    /// Print the logical parent of a path
    Parent(ParentCommand),

    /// Print the filesystem root above a path
    Root(RootCommand),

    /// Print a path in directory form
    AsDirectory(AsDirectoryCommand),

    /// Check whether a path ends in a shortcut token
    Shortcut(ShortcutCommand),

    /// Print the longest common prefix of several paths
    CommonPrefix(CommonPrefixCommand),

    /// Print paths in display order
    Sort(SortCommand),

    /// Print the path a prompt would open with
    Initial(InitialCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
