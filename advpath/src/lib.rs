#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # advpath
//!
//! Path strings decomposed for interactive path completion.
//!
//! A [`PathValue`] splits what the user has typed into the directory part and
//! the trailing fragment still being completed, resolves an absolute form,
//! and derives parents, roots, directory forms and shortcut matches from it.
//! Host state (path flavor, base directory, open projects, active document)
//! is supplied through the [`Platform`] and [`Workspace`] traits.
//!
//! ## Core Types
//!
//! - [`PathValue`]: the decomposed path
//! - [`SystemPlatform`] and [`StaticWorkspace`]: provided host implementations
//! - [`Config`] and [`ConfigBuilder`]: layered YAML and environment settings
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use advpath::{common_prefix, PathValue, SystemPlatform};
//!
//! let platform = SystemPlatform::posix("/home/me");
//!
//! let path = PathValue::new("/home/me/src/ma", &platform);
//! assert_eq!(path.fragment(), "ma");
//! assert_eq!(path.parent(&platform).full(), "/home/me/src/");
//!
//! let paths = [
//!     PathValue::new("/Foo/Bar/baz", &platform),
//!     PathValue::new("/foo/bar/qux", &platform),
//! ];
//! assert_eq!(common_prefix(&paths, false, &platform).unwrap().full(), "/foo/bar/");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, DefaultInput};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    common_prefix, initial_path, PathValue, Platform, StaticWorkspace, SystemPlatform, Workspace,
};
