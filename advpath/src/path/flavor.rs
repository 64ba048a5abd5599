//! String-level path grammar for posix and windows style paths.
//!
//! Everything here works on `&str` without consulting the filesystem, so a
//! windows path can be dissected on a unix host and vice versa.
//!
//! # Examples
//!
//! ```
//! use advpath::path::Flavor;
//!
//! assert_eq!(Flavor::Posix.dirname("/a/b/"), "/a");
//! assert_eq!(Flavor::Posix.dirname("/"), "/");
//! assert_eq!(Flavor::Windows.dirname(r"C:\Users\me"), r"C:\Users");
//! assert_eq!(Flavor::Windows.dirname(r"C:\"), r"C:\");
//! ```

/// Path grammar used to split, join and resolve path strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// `/` separated paths rooted at `/`.
    Posix,
    /// `\` (or `/`) separated paths rooted at a drive, UNC share or `\`.
    Windows,
}

impl Flavor {
    /// The flavor of the compile target.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// The separator this flavor writes.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Whether `c` separates components in this flavor.
    #[must_use]
    pub fn is_separator(self, c: char) -> bool {
        match self {
            Self::Posix => c == '/',
            Self::Windows => c == '/' || c == '\\',
        }
    }

    /// Byte length of the root prefix of `path` (`/`, `C:\`, `\\server\share\`).
    ///
    /// Returns 0 for relative paths.
    #[must_use]
    pub fn root_len(self, path: &str) -> usize {
        let bytes = path.as_bytes();
        let is_sep = |b: u8| self.is_separator(char::from(b));

        match self {
            Self::Posix => usize::from(path.starts_with('/')),
            Self::Windows => {
                if bytes.len() >= 2 && is_sep(bytes[0]) && is_sep(bytes[1]) {
                    // \\server\share\ counts as a single root
                    let mut idx = 2;
                    for _ in 0..2 {
                        while idx < bytes.len() && !is_sep(bytes[idx]) {
                            idx += 1;
                        }
                        if idx < bytes.len() {
                            idx += 1;
                        }
                    }
                    idx
                } else if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
                    if bytes.len() >= 3 && is_sep(bytes[2]) {
                        3
                    } else {
                        2
                    }
                } else {
                    usize::from(!bytes.is_empty() && is_sep(bytes[0]))
                }
            }
        }
    }

    /// Whether `path` is absolute in this flavor.
    ///
    /// Drive-relative windows paths such as `C:foo` are not absolute. A UNC
    /// share is absolute with or without its trailing separator.
    #[must_use]
    pub fn is_absolute(self, path: &str) -> bool {
        let root = self.root_len(path);
        if root == 0 {
            return false;
        }
        (self.is_unc(path) && root > 2)
            || path[..root].chars().last().is_some_and(|c| self.is_separator(c))
    }

    fn is_unc(self, path: &str) -> bool {
        let mut chars = path.chars();
        matches!(self, Self::Windows)
            && chars.next().is_some_and(|c| self.is_separator(c))
            && chars.next().is_some_and(|c| self.is_separator(c))
    }

    /// The drive (`C:`) or share (`\\server\share`) `path` lives on,
    /// without a trailing separator. Empty for posix and rootless paths.
    fn volume(self, path: &str) -> &str {
        match self {
            Self::Posix => "",
            Self::Windows => {
                let root = self.root_len(path);
                if root < 2 {
                    return "";
                }
                path[..root].trim_end_matches(|c| self.is_separator(c))
            }
        }
    }

    /// The parent directory of `path`, with `dirname(1)` semantics.
    ///
    /// Trailing separators are ignored, a root is its own dirname, and a
    /// bare relative name yields `"."`.
    #[must_use]
    pub fn dirname(self, path: &str) -> String {
        if path.is_empty() {
            return ".".to_string();
        }

        let root = self.root_len(path);
        if root == path.len() {
            return path.to_string();
        }

        let rest = path[root..].trim_end_matches(|c| self.is_separator(c));
        let parent = rest
            .rfind(|c| self.is_separator(c))
            .map_or("", |idx| rest[..idx].trim_end_matches(|c| self.is_separator(c)));

        if parent.is_empty() {
            if root > 0 {
                path[..root].to_string()
            } else {
                ".".to_string()
            }
        } else {
            format!("{}{parent}", &path[..root])
        }
    }

    /// Resolve `.` and `..` segments and collapse repeated separators.
    ///
    /// `..` never climbs above the root of an absolute path; on relative
    /// paths leading `..` segments are kept. A trailing separator survives.
    #[must_use]
    pub fn normalize(self, path: &str) -> String {
        let root_len = self.root_len(path);
        let root: String = path[..root_len]
            .chars()
            .map(|c| if self.is_separator(c) { self.separator() } else { c })
            .collect();
        let absolute = self.is_absolute(path);

        let mut segments: Vec<&str> = Vec::new();
        for segment in path[root_len..].split(|c| self.is_separator(c)) {
            match segment {
                "" | "." => {}
                ".." => {
                    if matches!(segments.last(), Some(&last) if last != "..") {
                        segments.pop();
                    } else if !absolute {
                        segments.push(segment);
                    }
                }
                _ => segments.push(segment),
            }
        }

        let mut result = root;
        result.push_str(&segments.join(&self.separator().to_string()));

        let trailing = path.len() > root_len
            && path.chars().last().is_some_and(|c| self.is_separator(c));
        if trailing && !segments.is_empty() {
            result.push(self.separator());
        }
        if result.is_empty() {
            result.push('.');
        }
        result
    }

    /// Join `path` onto `base` and normalize, like `path.join` in most
    /// runtimes. An absolute `path` is normalized on its own.
    ///
    /// On windows, `\temp` lands on the drive of `base`, and `D:foo` is
    /// joined onto `base` only when `base` is on drive `D:`; otherwise it is
    /// taken from the root of `D:`.
    #[must_use]
    pub fn resolve(self, base: &str, path: &str) -> String {
        if matches!(self, Self::Windows) {
            let root = self.root_len(path);
            if root == 2 && path.as_bytes()[1] == b':' {
                let (drive, rest) = path.split_at(2);
                if self.volume(base).eq_ignore_ascii_case(drive) {
                    return self.resolve(base, rest);
                }
                return self.normalize(&format!("{drive}{}{rest}", self.separator()));
            }
            if root == 1 {
                return self.normalize(&format!("{}{path}", self.volume(base)));
            }
        }
        if self.is_absolute(path) {
            return self.normalize(path);
        }
        if path.is_empty() {
            return self.normalize(base);
        }

        let mut joined = base.to_string();
        if !joined.is_empty() && !joined.ends_with(|c| self.is_separator(c)) {
            joined.push(self.separator());
        }
        joined.push_str(path);
        self.normalize(&joined)
    }
}

impl Default for Flavor {
    fn default() -> Self {
        Self::native()
    }
}
