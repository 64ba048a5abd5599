//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use advpath::config::{Config, ConfigMerger, DefaultInput};
///
/// let low = Config { default_input: Some(DefaultInput::Empty), ..Default::default() };
/// let high = Config { default_input: Some(DefaultInput::ProjectRoot), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.default_input, Some(DefaultInput::ProjectRoot));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources into one configuration, lowest precedence first.
    #[must_use]
    pub fn merge(mut sources: Vec<ConfigSource>) -> Config {
        sources.sort_by_key(|s| s.precedence);

        let mut result = Config::default();
        for source in sources {
            log::debug!("applying configuration from {}", source.path.display());
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; every field set in `source` wins.
    ///
    /// `project_roots` is replaced as a whole, never concatenated.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.default_input.is_some() {
            target.default_input = source.default_input;
        }

        if source.project_roots.is_some() {
            target.project_roots.clone_from(&source.project_roots);
        }

        if source.case_sensitive_prefix.is_some() {
            target.case_sensitive_prefix = source.case_sensitive_prefix;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::DefaultInput;
    use std::path::PathBuf;

    fn source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/config/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(ConfigMerger::merge(Vec::new()), Config::default());
    }

    #[test]
    fn test_unset_fields_do_not_override() {
        let mut target = Config {
            default_input: Some(DefaultInput::Empty),
            case_sensitive_prefix: Some(true),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.default_input, Some(DefaultInput::Empty));
        assert_eq!(target.case_sensitive_prefix, Some(true));
    }

    #[test]
    fn test_project_roots_replaced() {
        let mut target = Config {
            project_roots: Some(vec!["/a".into(), "/b".into()]),
            ..Default::default()
        };
        let source = Config {
            project_roots: Some(vec!["/c".into()]),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.project_roots, Some(vec!["/c".to_string()]));
    }

    #[test]
    fn test_merge_respects_precedence_not_order() {
        let high = source(
            2,
            Config {
                default_input: Some(DefaultInput::ProjectRoot),
                ..Default::default()
            },
        );
        let low = source(
            1,
            Config {
                default_input: Some(DefaultInput::Empty),
                case_sensitive_prefix: Some(true),
                ..Default::default()
            },
        );

        let merged = ConfigMerger::merge(vec![high, low]);
        assert_eq!(merged.default_input, Some(DefaultInput::ProjectRoot));
        assert_eq!(merged.case_sensitive_prefix, Some(true));
    }
}
