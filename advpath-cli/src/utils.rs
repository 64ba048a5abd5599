//! Utility functions for CLI operations.
//!
//! Builds the host platform, workspace and configuration every command works
//! against from the global options.

use crate::error::CliError;
use advpath::{Config, ConfigBuilder, Platform, StaticWorkspace, SystemPlatform};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Additional configuration file.
    pub config: Option<PathBuf>,

    /// Base directory for relative paths.
    pub base_dir: Option<String>,

    /// Project roots given on the command line.
    pub project_roots: Vec<String>,
}

/// Load layered configuration.
///
/// Project roots passed with `--project-root` override every other source.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(path) = &global.config {
        builder = builder.with_config_file(path);
    }

    if !global.project_roots.is_empty() {
        builder = builder.with_config(Config {
            project_roots: Some(global.project_roots.clone()),
            ..Default::default()
        });
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// The host platform, rebased onto `--base-dir` when given.
///
/// A relative base directory is itself resolved against the working
/// directory.
pub fn build_platform(global: &GlobalOptions) -> Result<SystemPlatform, CliError> {
    let platform = SystemPlatform::native()?;

    Ok(match &global.base_dir {
        Some(base) => {
            let base = platform.absolutify(base);
            log::debug!("resolving relative paths against {base}");
            platform.with_base_dir(base)
        }
        None => platform,
    })
}

/// Workspace holding the configured project roots and, optionally, an
/// active document.
pub fn build_workspace(config: &Config, active_document: Option<String>) -> StaticWorkspace {
    let workspace = StaticWorkspace::new().with_project_roots(config.project_roots().to_vec());
    match active_document {
        Some(document) => workspace.with_active_document(document),
        None => workspace,
    }
}
