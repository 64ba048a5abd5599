//! Command to check a path for a shortcut token.

use crate::error::CliError;
use crate::utils::{build_platform, GlobalOptions};
use advpath::PathValue;
use clap::Args;

/// Check whether a directory-form path ends in a shortcut token.
///
/// Exits 0 when it does and 1 when it does not.
#[derive(Args)]
pub struct ShortcutCommand {
    /// Path string to check
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Shortcut token, such as `~` or `:`
    #[arg(value_name = "TOKEN")]
    pub token: String,
}

impl ShortcutCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.token.is_empty() {
            return Err(CliError::InvalidArguments(
                "shortcut token cannot be empty".to_string(),
            ));
        }

        let platform = build_platform(global)?;
        let path = PathValue::new(self.path, &platform);

        if path.has_shortcut(&self.token) {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "'{path}' does not end in shortcut '{}'",
                self.token
            )))
        }
    }
}
