//! Command to show how a path string decomposes.

use crate::error::CliError;
use crate::utils::{build_platform, build_workspace, load_configuration, GlobalOptions};
use advpath::PathValue;
use clap::{Args, ValueEnum};
use serde::Serialize;

/// Output format for `inspect`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InspectFormat {
    /// One `field: value` line per field
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Show the fields and predicates of a path.
#[derive(Args)]
pub struct InspectCommand {
    /// Path string to decompose
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = InspectFormat::Text)]
    pub format: InspectFormat,
}

#[derive(Serialize)]
struct Inspection<'a> {
    #[serde(flatten)]
    path: &'a PathValue,
    is_directory_form: bool,
    is_root: bool,
    is_project_directory: bool,
    has_case_sensitive_fragment: bool,
}

impl InspectCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let platform = build_platform(global)?;
        let workspace = build_workspace(&config, None);

        let path = PathValue::new(self.path, &platform);
        let inspection = Inspection {
            path: &path,
            is_directory_form: path.is_directory_form(),
            is_root: path.is_root(&platform),
            is_project_directory: path.is_project_directory(&workspace),
            has_case_sensitive_fragment: path.has_case_sensitive_fragment(),
        };

        match self.format {
            InspectFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&inspection)?);
            }
            InspectFormat::Text => {
                println!("full: {}", path.full());
                println!("separator: {}", path.separator());
                println!("directory: {}", path.directory());
                println!("fragment: {}", path.fragment());
                println!("absolute: {}", path.absolute());
                println!("directory form: {}", yes_no(inspection.is_directory_form));
                println!("root: {}", yes_no(inspection.is_root));
                println!("project directory: {}", yes_no(inspection.is_project_directory));
                println!(
                    "case-sensitive fragment: {}",
                    yes_no(inspection.has_case_sensitive_fragment)
                );
            }
        }
        Ok(())
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
