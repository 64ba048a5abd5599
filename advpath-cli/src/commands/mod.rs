//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `inspect`: Show how a path string decomposes
//! - `parent`: Print the logical parent of a path
//! - `root`: Print the filesystem root above a path
//! - `as_directory`: Print a path in directory form
//! - `shortcut`: Check a path for a shortcut token
//! - `common_prefix`: Longest common prefix of several paths
//! - `sort`: Print paths in display order
//! - `initial`: Print the path a prompt opens with
//! - `completions`: Generate shell completion scripts

pub mod as_directory;
pub mod common_prefix;
pub mod completions;
pub mod initial;
pub mod inspect;
pub mod parent;
pub mod root;
pub mod shortcut;
pub mod sort;

pub use as_directory::AsDirectoryCommand;
pub use common_prefix::CommonPrefixCommand;
pub use completions::CompletionsCommand;
pub use initial::InitialCommand;
pub use inspect::InspectCommand;
pub use parent::ParentCommand;
pub use root::RootCommand;
pub use shortcut::ShortcutCommand;
pub use sort::SortCommand;
