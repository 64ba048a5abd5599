//! Environment variable handling for configuration overrides.
//!
//! Recognized variables:
//! - `ADVPATH_DEFAULT_INPUT`: `active-file-dir`, `project-root` or `empty`
//! - `ADVPATH_PROJECT_ROOTS`: project roots in the platform's path-list
//!   syntax (`:` separated on unix, `;` on windows)
//! - `ADVPATH_CASE_SENSITIVE_PREFIX`: boolean

use std::env;

use crate::config::schema::{Config, DefaultInput};
use crate::error::{Error, Result};

/// Selects the initial-path source.
pub const DEFAULT_INPUT_ENV: &str = "ADVPATH_DEFAULT_INPUT";
/// Replaces the configured project roots.
pub const PROJECT_ROOTS_ENV: &str = "ADVPATH_PROJECT_ROOTS";
/// Toggles case-sensitive common-prefix matching.
pub const CASE_SENSITIVE_PREFIX_ENV: &str = "ADVPATH_CASE_SENSITIVE_PREFIX";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use advpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `ADVPATH_*` overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be
    /// parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(value) = env::var(DEFAULT_INPUT_ENV) {
            let input = value
                .parse::<DefaultInput>()
                .map_err(|message| Error::Validation {
                    field: DEFAULT_INPUT_ENV.into(),
                    message,
                })?;
            config.default_input = Some(input);
        }

        if let Some(value) = env::var_os(PROJECT_ROOTS_ENV) {
            let roots = env::split_paths(&value)
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| {
                    p.into_os_string().into_string().map_err(|_| Error::Validation {
                        field: PROJECT_ROOTS_ENV.into(),
                        message: "Project roots must be valid UTF-8".into(),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            config.project_roots = Some(roots);
        }

        if let Ok(value) = env::var(CASE_SENSITIVE_PREFIX_ENV) {
            config.case_sensitive_prefix =
                Some(Self::parse_bool(CASE_SENSITIVE_PREFIX_ENV, &value)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
