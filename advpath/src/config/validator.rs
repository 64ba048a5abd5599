//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::Flavor;

/// Validates configuration values that the schema alone cannot check.
///
/// # Examples
///
/// ```
/// use advpath::config::{Config, ConfigValidator};
/// use advpath::path::Flavor;
///
/// let config = Config {
///     project_roots: Some(vec!["/srv/app".to_string()]),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&config, Flavor::Posix).is_ok());
///
/// let config = Config {
///     project_roots: Some(vec!["relative".to_string()]),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&config, Flavor::Posix).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate `config` for a host using `flavor` paths.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config, flavor: Flavor) -> Result<()> {
        for (index, root) in config.project_roots().iter().enumerate() {
            Self::validate_project_root(index, root, flavor)?;
        }
        Ok(())
    }

    fn validate_project_root(index: usize, root: &str, flavor: Flavor) -> Result<()> {
        let field = format!("project_roots[{index}]");

        if root.trim().is_empty() {
            return Err(Error::Validation {
                field,
                message: "Project root cannot be empty".into(),
            });
        }

        if root.contains('\0') {
            return Err(Error::Validation {
                field,
                message: "Project root cannot contain null bytes".into(),
            });
        }

        if !flavor.is_absolute(root) {
            return Err(Error::Validation {
                field,
                message: format!("Project root must be absolute: '{root}'"),
            });
        }

        Ok(())
    }
}
