//! Layered configuration.
//!
//! Sources, highest precedence first:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`ADVPATH_*`)
//! 3. An explicit file (via `ConfigBuilder::with_config_file`)
//! 4. User config (`~/.advpath/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use advpath::config::{Config, ConfigBuilder, DefaultInput};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         default_input: Some(DefaultInput::ProjectRoot),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.default_input(), DefaultInput::ProjectRoot);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, DefaultInput};
pub use validator::ConfigValidator;
