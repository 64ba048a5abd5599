//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use crate::path::Flavor;

/// Builds a [`Config`] from every configured source.
///
/// Sources are applied lowest precedence first: the user file, an explicit
/// file, `ADVPATH_*` environment variables, then a programmatic override.
/// The result is validated before it is returned.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    load_files: bool,
    load_env: bool,
    config_file: Option<PathBuf>,
    overrides: Option<Config>,
    flavor: Flavor,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    /// Create a builder that reads files and environment variables.
    #[must_use]
    pub fn new() -> Self {
        Self {
            load_files: true,
            load_env: true,
            config_file: None,
            overrides: None,
            flavor: Flavor::native(),
        }
    }

    /// Do not read the user configuration file.
    ///
    /// A file given with [`with_config_file`](Self::with_config_file) is
    /// still loaded.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.load_files = false;
        self
    }

    /// Do not apply environment variable overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.load_env = false;
        self
    }

    /// Load an additional configuration file above the user file.
    #[must_use]
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Validate project roots against `flavor` instead of the host's.
    #[must_use]
    pub fn with_flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self
    }

    /// Load, merge and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is malformed, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut sources: Vec<ConfigSource> = Vec::new();

        if self.load_files {
            if let Some(source) = ConfigLoader::load_user_config()? {
                sources.push(source);
            }
        }

        if let Some(path) = &self.config_file {
            sources.push(ConfigLoader::load_explicit(path)?);
        }

        let mut config = ConfigMerger::merge(sources);

        if self.load_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config, self.flavor)?;
        Ok(config)
    }
}
