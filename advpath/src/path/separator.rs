//! Separator inference for raw path strings.

/// Decide which separator a raw path string uses.
///
/// A string containing only forward slashes uses `/`, one containing only
/// backslashes uses `\`. When the string contains both, or neither, there is
/// nothing reliable to go on and `native` wins. Mixed input is therefore a
/// best guess rather than a parse.
///
/// # Examples
///
/// ```
/// use advpath::path::infer_separator;
///
/// assert_eq!(infer_separator("/usr/local", '\\'), '/');
/// assert_eq!(infer_separator(r"C:\Users", '/'), '\\');
/// assert_eq!(infer_separator("file.txt", '/'), '/');
/// assert_eq!(infer_separator(r"a/b\c", '\\'), '\\');
/// ```
#[must_use]
pub fn infer_separator(path: &str, native: char) -> char {
    let has_slash = path.contains('/');
    let has_backslash = path.contains('\\');

    match (has_slash, has_backslash) {
        (true, false) => '/',
        (false, true) => '\\',
        (true, true) => {
            log::debug!("mixed separators in {path:?}, falling back to {native:?}");
            native
        }
        (false, false) => native,
    }
}
