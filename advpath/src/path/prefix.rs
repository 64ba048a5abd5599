//! Longest common prefix across a set of paths.

use crate::error::{Error, Result};
use crate::path::platform::Platform;
use crate::path::value::PathValue;

/// The longest character prefix shared by every path in `paths`.
///
/// The full strings are sorted by code point and only the first and last
/// are compared. With `case_sensitive` set, every path in between shares
/// that prefix. Otherwise characters that differ only in case still extend
/// the prefix and are emitted in lower case, but only the two code-point
/// extremes are folded: a path sorting between them may diverge earlier,
/// so `["/B/y", "/a/x", "/b/z"]` yields `/b/`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when fewer than two paths are given.
///
/// # Examples
///
/// ```
/// use advpath::path::{common_prefix, PathValue, SystemPlatform};
///
/// let platform = SystemPlatform::posix("/");
/// let paths = [
///     PathValue::new("/Foo/Bar/baz", &platform),
///     PathValue::new("/foo/bar/qux", &platform),
/// ];
///
/// let prefix = common_prefix(&paths, false, &platform).unwrap();
/// assert_eq!(prefix.full(), "/foo/bar/");
///
/// let prefix = common_prefix(&paths, true, &platform).unwrap();
/// assert_eq!(prefix.full(), "/");
/// ```
pub fn common_prefix<P>(
    paths: &[PathValue],
    case_sensitive: bool,
    platform: &P,
) -> Result<PathValue>
where
    P: Platform + ?Sized,
{
    if paths.len() < 2 {
        return Err(Error::InvalidArgument {
            reason: format!("common prefix needs at least two paths, got {}", paths.len()),
        });
    }

    let mut fulls: Vec<&str> = paths.iter().map(PathValue::full).collect();
    fulls.sort_unstable();

    let (first, last) = (fulls[0], fulls[fulls.len() - 1]);

    let mut prefix = String::new();
    for (a, b) in first.chars().zip(last.chars()) {
        if a == b {
            prefix.push(a);
        } else if !case_sensitive && a.to_lowercase().eq(b.to_lowercase()) {
            prefix.extend(a.to_lowercase());
        } else {
            break;
        }
    }

    log::debug!(
        "common prefix of {} paths is {} chars long",
        paths.len(),
        prefix.chars().count()
    );
    Ok(PathValue::new(prefix, platform))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::platform::SystemPlatform;

    fn values(platform: &SystemPlatform, raw: &[&str]) -> Vec<PathValue> {
        raw.iter().map(|s| PathValue::new(*s, platform)).collect()
    }

    #[test]
    fn test_case_insensitive_default() {
        let platform = SystemPlatform::posix("/");
        let paths = values(&platform, &["/Foo/Bar/baz", "/foo/bar/qux"]);
        let prefix = common_prefix(&paths, false, &platform).unwrap();
        assert_eq!(prefix.full(), "/foo/bar/");
        assert_eq!(prefix.fragment(), "");
    }

    #[test]
    fn test_partial_fragment() {
        let platform = SystemPlatform::posix("/");
        let paths = values(&platform, &["/abc", "/abd"]);
        let prefix = common_prefix(&paths, false, &platform).unwrap();
        assert_eq!(prefix.full(), "/ab");
        assert_eq!(prefix.fragment(), "ab");
    }

    #[test]
    fn test_case_sensitive_stops_at_case_difference() {
        let platform = SystemPlatform::posix("/");
        let paths = values(&platform, &["/src/Main.rs", "/src/main.rs"]);
        let prefix = common_prefix(&paths, true, &platform).unwrap();
        assert_eq!(prefix.full(), "/src/");
    }

    #[test]
    fn test_many_paths_use_sorted_extremes() {
        let platform = SystemPlatform::posix("/");
        let paths = values(
            &platform,
            &["/proj/src/lib.rs", "/proj/src/main.rs", "/proj/src/bin/x.rs", "/proj/src/mod.rs"],
        );
        let prefix = common_prefix(&paths, false, &platform).unwrap();
        assert_eq!(prefix.full(), "/proj/src/");
    }

    #[test]
    fn test_case_folding_compares_code_point_extremes() {
        let platform = SystemPlatform::posix("/");
        let paths = values(&platform, &["/B/y", "/a/x", "/b/z"]);
        assert_eq!(common_prefix(&paths, false, &platform).unwrap().full(), "/b/");
        assert_eq!(common_prefix(&paths, true, &platform).unwrap().full(), "/");
    }

    #[test]
    fn test_no_common_prefix() {
        let platform = SystemPlatform::posix("/");
        let paths = values(&platform, &["alpha", "beta"]);
        let prefix = common_prefix(&paths, false, &platform).unwrap();
        assert_eq!(prefix.full(), "");
    }

    #[test]
    fn test_identical_paths() {
        let platform = SystemPlatform::posix("/");
        let paths = values(&platform, &["/same/path", "/same/path"]);
        let prefix = common_prefix(&paths, true, &platform).unwrap();
        assert_eq!(prefix.full(), "/same/path");
    }

    #[test]
    fn test_single_path_is_invalid() {
        let platform = SystemPlatform::posix("/");
        let paths = values(&platform, &["/only"]);
        let err = common_prefix(&paths, false, &platform).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_no_paths_is_invalid() {
        let platform = SystemPlatform::posix("/");
        assert!(matches!(
            common_prefix(&[], false, &platform),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_windows_paths() {
        let platform = SystemPlatform::windows(r"C:\");
        let paths = values(&platform, &[r"C:\Users\Me\a.txt", r"c:\users\me\b.txt"]);
        let prefix = common_prefix(&paths, false, &platform).unwrap();
        assert_eq!(prefix.full(), r"c:\users\me\");
        assert_eq!(prefix.separator(), '\\');
    }
}
