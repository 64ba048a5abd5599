//! The [`PathValue`] type.
//!
//! A `PathValue` splits a raw path string once, at construction, into the
//! directory part and the trailing fragment the user is still typing. Every
//! other operation is derived from those fields and never mutates them.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::path::collate::compare_paths;
use crate::path::platform::Platform;
use crate::path::separator::infer_separator;
use crate::path::workspace::Workspace;

/// An immutable, decomposed path string.
///
/// Invariants, for any input string `s`:
/// - `directory() + fragment() == full() == s`
/// - `fragment()` never contains `separator()`
///
/// Equality, hashing and ordering look at `full()` only.
///
/// # Examples
///
/// ```
/// use advpath::path::{PathValue, SystemPlatform};
///
/// let platform = SystemPlatform::posix("/home/me");
/// let path = PathValue::new("src/ma", &platform);
///
/// assert_eq!(path.directory(), "src/");
/// assert_eq!(path.fragment(), "ma");
/// assert_eq!(path.absolute(), "/home/me/src/ma");
/// assert_eq!(path.parent(&platform).full(), "src/");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct PathValue {
    full: String,
    separator: char,
    fragment: String,
    directory: String,
    absolute: String,
}

impl PathValue {
    /// Decompose `full` using `platform` for the native separator and the
    /// absolute form. Never fails.
    #[must_use]
    pub fn new<P>(full: impl Into<String>, platform: &P) -> Self
    where
        P: Platform + ?Sized,
    {
        let full = full.into();
        let separator = infer_separator(&full, platform.native_separator());

        let fragment = full.rsplit(separator).next().unwrap_or_default().to_string();
        let directory = full[..full.len() - fragment.len()].to_string();
        let absolute = platform.absolutify(&full);

        Self {
            full,
            separator,
            fragment,
            directory,
            absolute,
        }
    }

    /// The empty path.
    #[must_use]
    pub fn empty<P>(platform: &P) -> Self
    where
        P: Platform + ?Sized,
    {
        Self::new(String::new(), platform)
    }

    /// The string this value was built from, unchanged.
    #[must_use]
    pub fn full(&self) -> &str {
        &self.full
    }

    /// The separator this value splits on.
    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Text after the last separator; empty for directory-form paths.
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Everything up to and including the last separator.
    #[must_use]
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// The resolved absolute form.
    #[must_use]
    pub fn absolute(&self) -> &str {
        &self.absolute
    }

    /// Whether the original string was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }

    /// Whether this value names a directory rather than an entry in one.
    #[must_use]
    pub fn is_directory_form(&self) -> bool {
        self.fragment.is_empty()
    }

    /// Whether the absolute form is exactly one of the open project roots.
    ///
    /// No normalization is applied; `/proj` and `/proj/` are different.
    #[must_use]
    pub fn is_project_directory<W>(&self, workspace: &W) -> bool
    where
        W: Workspace + ?Sized,
    {
        workspace
            .project_root_paths()
            .iter()
            .any(|root| *root == self.absolute)
    }

    /// Whether the absolute form is already a filesystem root.
    #[must_use]
    pub fn is_root<P>(&self, platform: &P) -> bool
    where
        P: Platform + ?Sized,
    {
        platform.directory_name(&self.absolute) == self.absolute
    }

    /// Whether the fragment uses upper-case letters.
    ///
    /// A hint that the user cares about letter case when matching entries,
    /// not a statement about the filesystem.
    #[must_use]
    pub fn has_case_sensitive_fragment(&self) -> bool {
        !self.fragment.is_empty() && self.fragment != self.fragment.to_lowercase()
    }

    /// This path with a trailing separator, unless it already has one.
    #[must_use]
    pub fn as_directory<P>(&self, platform: &P) -> Self
    where
        P: Platform + ?Sized,
    {
        if self.fragment.is_empty() {
            return self.clone();
        }
        Self::new(format!("{}{}", self.full, self.separator), platform)
    }

    /// The logical parent, always in directory form.
    ///
    /// A root is its own parent. A path with a fragment loses the fragment.
    /// A directory-form path climbs one level: `/a/b/` becomes `/a/`.
    #[must_use]
    pub fn parent<P>(&self, platform: &P) -> Self
    where
        P: Platform + ?Sized,
    {
        if self.is_root(platform) {
            return self.clone();
        }

        if !self.fragment.is_empty() {
            return Self::new(self.directory.clone(), platform);
        }

        let mut parent = platform.directory_name(&self.directory);
        if !parent.ends_with(self.separator) {
            parent.push(self.separator);
        }
        Self::new(parent, platform)
    }

    /// The filesystem root above this path.
    ///
    /// Applies `directory_name` to the absolute form until it stops changing.
    #[must_use]
    pub fn root<P>(&self, platform: &P) -> Self
    where
        P: Platform + ?Sized,
    {
        let mut current = self.absolute.clone();
        loop {
            let next = platform.directory_name(&current);
            if next == current {
                break;
            }
            current = next;
        }
        Self::new(current, platform)
    }

    /// Whether this directory-form path ends in the shortcut `token`.
    ///
    /// `/foo/bar/:/` and `:/` have shortcut `:`; `/foo/bar:/` and `/blah/:`
    /// do not. Matching is exact.
    ///
    /// # Examples
    ///
    /// ```
    /// use advpath::path::{PathValue, SystemPlatform};
    ///
    /// let platform = SystemPlatform::posix("/");
    /// assert!(PathValue::new("/foo/bar/:/", &platform).has_shortcut(":"));
    /// assert!(!PathValue::new("/blah/:", &platform).has_shortcut(":"));
    /// ```
    #[must_use]
    pub fn has_shortcut(&self, token: &str) -> bool {
        if !self.fragment.is_empty() {
            return false;
        }

        let sep = self.separator;
        let suffix = format!("{sep}{token}{sep}");
        self.directory.ends_with(&suffix) || self.directory == format!("{token}{sep}")
    }

    /// Display-order comparison of two paths by their full strings.
    ///
    /// Locale aware, and `Equal` only for identical strings.
    #[must_use]
    pub fn compare(a: &Self, b: &Self) -> Ordering {
        compare_paths(&a.full, &b.full)
    }
}

impl PartialEq for PathValue {
    fn eq(&self, other: &Self) -> bool {
        self.full == other.full
    }
}

impl Eq for PathValue {}

impl Hash for PathValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full.hash(state);
    }
}

impl PartialOrd for PathValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PathValue {
    fn cmp(&self, other: &Self) -> Ordering {
        Self::compare(self, other)
    }
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

impl AsRef<str> for PathValue {
    fn as_ref(&self) -> &str {
        &self.full
    }
}
