//! Host platform services used by [`PathValue`](crate::path::PathValue).
//!
//! A [`Platform`] answers three questions about path strings: what the
//! absolute form of a possibly-relative string is, which separator is native,
//! and what the parent directory of a string is. [`SystemPlatform`] answers
//! them with pure string logic against a fixed base directory.

use std::env;

use crate::error::{Error, Result};
use crate::path::flavor::Flavor;

/// Path services supplied by the host environment.
///
/// Implementations are expected to be deterministic for a given input; the
/// path algorithms treat them as pure functions.
pub trait Platform {
    /// Resolve a possibly-relative path string against the base directory.
    fn absolutify(&self, path: &str) -> String;

    /// The separator used when a string gives no hint of its own.
    fn native_separator(&self) -> char;

    /// The parent directory of `path`; a root maps to itself.
    fn directory_name(&self, path: &str) -> String;
}

impl<T: Platform + ?Sized> Platform for &T {
    fn absolutify(&self, path: &str) -> String {
        (**self).absolutify(path)
    }

    fn native_separator(&self) -> char {
        (**self).native_separator()
    }

    fn directory_name(&self, path: &str) -> String {
        (**self).directory_name(path)
    }
}

/// A [`Platform`] backed by a path [`Flavor`], a base directory and an
/// optional home directory for `~` expansion.
///
/// # Examples
///
/// ```
/// use advpath::path::{Platform, SystemPlatform};
///
/// let platform = SystemPlatform::posix("/home/me/project")
///     .with_home_dir(Some("/home/me".to_string()));
///
/// assert_eq!(platform.absolutify("src/lib.rs"), "/home/me/project/src/lib.rs");
/// assert_eq!(platform.absolutify("~/notes/"), "/home/me/notes/");
/// assert_eq!(platform.directory_name("/home/me/"), "/home");
/// assert_eq!(platform.native_separator(), '/');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPlatform {
    flavor: Flavor,
    base_dir: String,
    home_dir: Option<String>,
}

impl SystemPlatform {
    /// A platform with an explicit flavor and base directory, no home.
    #[must_use]
    pub fn new(flavor: Flavor, base_dir: impl Into<String>) -> Self {
        Self {
            flavor,
            base_dir: base_dir.into(),
            home_dir: None,
        }
    }

    /// A posix platform rooted at `base_dir`.
    #[must_use]
    pub fn posix(base_dir: impl Into<String>) -> Self {
        Self::new(Flavor::Posix, base_dir)
    }

    /// A windows platform rooted at `base_dir`.
    #[must_use]
    pub fn windows(base_dir: impl Into<String>) -> Self {
        Self::new(Flavor::Windows, base_dir)
    }

    /// The compile target's flavor, the process working directory and the
    /// user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined or is
    /// not valid UTF-8.
    pub fn native() -> Result<Self> {
        let cwd = env::current_dir()?;
        let base_dir = cwd.to_str().ok_or_else(|| Error::InvalidPath {
            path: cwd.clone(),
            reason: "Working directory contains invalid UTF-8".to_string(),
        })?;

        let home_dir = home::home_dir().and_then(|p| p.to_str().map(str::to_string));
        Ok(Self::new(Flavor::native(), base_dir).with_home_dir(home_dir))
    }

    /// Replace the base directory relative paths resolve against.
    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<String>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Set or clear the directory `~` expands to.
    #[must_use]
    pub fn with_home_dir(mut self, home_dir: Option<String>) -> Self {
        self.home_dir = home_dir;
        self
    }

    /// The path grammar in use.
    #[must_use]
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// The directory relative paths resolve against.
    #[must_use]
    pub fn base_dir(&self) -> &str {
        &self.base_dir
    }

    /// The directory `~` expands to, if known.
    #[must_use]
    pub fn home_dir(&self) -> Option<&str> {
        self.home_dir.as_deref()
    }

    /// Expand a leading `~` or `~/`. Other strings, `~user` included, pass
    /// through unchanged.
    fn expand_tilde(&self, path: &str) -> Option<String> {
        let home = self.home_dir.as_deref()?;
        let rest = path.strip_prefix('~')?;

        if rest.is_empty() {
            Some(home.to_string())
        } else if rest.starts_with(|c| self.flavor.is_separator(c)) {
            Some(format!("{home}{rest}"))
        } else {
            None
        }
    }
}

impl Platform for SystemPlatform {
    fn absolutify(&self, path: &str) -> String {
        let expanded = self.expand_tilde(path);
        let path = expanded.as_deref().unwrap_or(path);
        self.flavor.resolve(&self.base_dir, path)
    }

    fn native_separator(&self) -> char {
        self.flavor.separator()
    }

    fn directory_name(&self, path: &str) -> String {
        self.flavor.dirname(path)
    }
}
