//! Configuration schema definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Complete configuration structure.
///
/// Every field is optional so that partial files and environment overrides
/// can be layered; accessors supply the defaults.
///
/// # Examples
///
/// ```
/// use advpath::config::{Config, DefaultInput};
///
/// let config: Config = serde_yaml::from_str("default_input: project-root\n").unwrap();
/// assert_eq!(config.default_input(), DefaultInput::ProjectRoot);
/// assert!(!config.case_sensitive_prefix());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where the initial path comes from.
    pub default_input: Option<DefaultInput>,

    /// Project roots to treat as open when the host supplies none.
    pub project_roots: Option<Vec<String>>,

    /// Whether common-prefix matching distinguishes letter case.
    pub case_sensitive_prefix: Option<bool>,
}

impl Config {
    /// The configured initial-path source, defaulting to the active file's
    /// directory.
    #[must_use]
    pub fn default_input(&self) -> DefaultInput {
        self.default_input.unwrap_or_default()
    }

    /// The configured project roots, or none.
    #[must_use]
    pub fn project_roots(&self) -> &[String] {
        self.project_roots.as_deref().unwrap_or_default()
    }

    /// Whether common-prefix matching is case sensitive (default false).
    #[must_use]
    pub fn case_sensitive_prefix(&self) -> bool {
        self.case_sensitive_prefix.unwrap_or(false)
    }
}

/// Source of the path shown when the prompt first opens.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DefaultInput {
    /// Directory of the active document, falling back to the project root.
    #[default]
    ActiveFileDir,
    /// The project root.
    ProjectRoot,
    /// Start empty.
    Empty,
}

impl fmt::Display for DefaultInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActiveFileDir => write!(f, "active-file-dir"),
            Self::ProjectRoot => write!(f, "project-root"),
            Self::Empty => write!(f, "empty"),
        }
    }
}

impl FromStr for DefaultInput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "active-file-dir" => Ok(Self::ActiveFileDir),
            "project-root" => Ok(Self::ProjectRoot),
            "empty" => Ok(Self::Empty),
            _ => Err(format!(
                "invalid default input '{s}' (expected active-file-dir, project-root or empty)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_input(), DefaultInput::ActiveFileDir);
        assert!(config.project_roots().is_empty());
        assert!(!config.case_sensitive_prefix());
    }

    #[test]
    fn test_deserialize_full() {
        let yaml = "default_input: empty\nproject_roots:\n  - /a\n  - /b\ncase_sensitive_prefix: true\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.default_input(), DefaultInput::Empty);
        assert_eq!(config.project_roots(), ["/a".to_string(), "/b".to_string()]);
        assert!(config.case_sensitive_prefix());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("colour: blue\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_default_input_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("default_input: home\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_input_parse_and_display() {
        for input in [
            DefaultInput::ActiveFileDir,
            DefaultInput::ProjectRoot,
            DefaultInput::Empty,
        ] {
            assert_eq!(input.to_string().parse::<DefaultInput>().unwrap(), input);
        }
        assert_eq!(
            "PROJECT_ROOT".parse::<DefaultInput>().unwrap(),
            DefaultInput::ProjectRoot
        );
        assert!("home".parse::<DefaultInput>().is_err());
    }
}
