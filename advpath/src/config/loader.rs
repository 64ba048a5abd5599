//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Name of the per-user configuration directory under the home directory.
pub const USER_CONFIG_DIR: &str = ".advpath";

/// File name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// A loaded configuration file with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path the configuration was read from.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use advpath::config::ConfigLoader;
///
/// if let Some(source) = ConfigLoader::load_user_config().unwrap() {
///     println!("loaded {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `~/.advpath/config.yaml` if it exists (precedence 1).
    ///
    /// A missing file, or an unknown home directory, is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config() -> Result<Option<ConfigSource>> {
        let Some(path) = Self::user_config_path() else {
            log::debug!("home directory unknown, skipping user configuration");
            return Ok(None);
        };

        if !path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&path)?;
        Ok(Some(ConfigSource {
            path,
            precedence: 1,
            config,
        }))
    }

    /// Load an explicitly named configuration file (precedence 2).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed; unlike the user
    /// file, an explicit file must exist.
    pub fn load_explicit(path: &Path) -> Result<ConfigSource> {
        Ok(ConfigSource {
            path: path.to_path_buf(),
            precedence: 2,
            config: Self::load_file(path)?,
        })
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the file cannot be read and
    /// [`Error::Configuration`] if the YAML is malformed or names an unknown
    /// field.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            log::debug!("rejecting configuration file {}", path.display());
            Error::from(e)
        })
    }

    /// Location of the per-user configuration file.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_CONFIG_DIR).join(CONFIG_FILE_NAME))
    }
}
