//! Path strings decomposed for interactive completion.
//!
//! The central type is [`PathValue`]: a raw path string split once into the
//! directory part and the trailing fragment the user is still typing, with an
//! absolute form resolved through the host [`Platform`].
//!
//! Host state is injected through two traits:
//!
//! - [`Platform`] knows the path flavor, base directory and home directory.
//! - [`Workspace`] knows the open project roots and the active document.
//!
//! [`SystemPlatform`] and [`StaticWorkspace`] are the provided
//! implementations.
//!
//! # Examples
//!
//! ```
//! use advpath::path::{PathValue, StaticWorkspace, SystemPlatform};
//!
//! let platform = SystemPlatform::posix("/home/me");
//! let workspace = StaticWorkspace::new().with_project_root("/home/me/proj");
//!
//! let path = PathValue::new("proj/", &platform);
//! assert_eq!(path.absolute(), "/home/me/proj/");
//! assert!(!path.is_project_directory(&workspace));
//!
//! let path = PathValue::new("/home/me/proj", &platform);
//! assert!(path.is_project_directory(&workspace));
//! assert_eq!(path.root(&platform).full(), "/");
//! ```

mod collate;
mod flavor;
mod initial;
mod platform;
mod prefix;
mod separator;
mod value;
mod workspace;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use collate::compare_paths;
pub use flavor::Flavor;
pub use initial::initial_path;
pub use platform::{Platform, SystemPlatform};
pub use prefix::common_prefix;
pub use separator::infer_separator;
pub use value::PathValue;
pub use workspace::{StaticWorkspace, Workspace};
