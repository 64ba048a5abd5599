//! Editor workspace state consulted by project-aware path operations.

/// Read-only view of the host's open projects and active document.
pub trait Workspace {
    /// Absolute paths of every project root currently open.
    fn project_root_paths(&self) -> Vec<String>;

    /// Path of the document the host considers active, if any.
    fn active_document_path(&self) -> Option<String>;

    /// The single project root the host would pick as a starting point.
    fn project_root_path(&self) -> Option<String>;
}

impl<T: Workspace + ?Sized> Workspace for &T {
    fn project_root_paths(&self) -> Vec<String> {
        (**self).project_root_paths()
    }

    fn active_document_path(&self) -> Option<String> {
        (**self).active_document_path()
    }

    fn project_root_path(&self) -> Option<String> {
        (**self).project_root_path()
    }
}

/// An in-memory [`Workspace`] assembled by the caller.
///
/// When no preferred root is set, [`Workspace::project_root_path`] picks the
/// project root that contains the active document, then the first root.
///
/// # Examples
///
/// ```
/// use advpath::path::{StaticWorkspace, Workspace};
///
/// let workspace = StaticWorkspace::new()
///     .with_project_root("/src/app")
///     .with_project_root("/src/lib")
///     .with_active_document("/src/lib/mod.rs");
///
/// assert_eq!(workspace.project_root_path().as_deref(), Some("/src/lib"));
/// assert_eq!(workspace.project_root_paths().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticWorkspace {
    project_roots: Vec<String>,
    active_document: Option<String>,
    preferred_root: Option<String>,
}

impl StaticWorkspace {
    /// An empty workspace: no projects, no active document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an open project root.
    #[must_use]
    pub fn with_project_root(mut self, root: impl Into<String>) -> Self {
        self.project_roots.push(root.into());
        self
    }

    /// Add several open project roots.
    #[must_use]
    pub fn with_project_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.project_roots.extend(roots.into_iter().map(Into::into));
        self
    }

    /// Set the active document.
    #[must_use]
    pub fn with_active_document(mut self, path: impl Into<String>) -> Self {
        self.active_document = Some(path.into());
        self
    }

    /// Pin the root returned by [`Workspace::project_root_path`].
    #[must_use]
    pub fn with_preferred_root(mut self, root: impl Into<String>) -> Self {
        self.preferred_root = Some(root.into());
        self
    }

    fn root_containing(&self, document: &str) -> Option<&String> {
        self.project_roots.iter().find(|root| {
            document.strip_prefix(root.as_str()).is_some_and(|rest| {
                rest.starts_with(['/', '\\']) || root.ends_with(['/', '\\'])
            })
        })
    }
}

impl Workspace for StaticWorkspace {
    fn project_root_paths(&self) -> Vec<String> {
        self.project_roots.clone()
    }

    fn active_document_path(&self) -> Option<String> {
        self.active_document.clone()
    }

    fn project_root_path(&self) -> Option<String> {
        if let Some(root) = &self.preferred_root {
            return Some(root.clone());
        }

        self.active_document
            .as_deref()
            .and_then(|document| self.root_containing(document))
            .or_else(|| self.project_roots.first())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_workspace() {
        let workspace = StaticWorkspace::new();
        assert!(workspace.project_root_paths().is_empty());
        assert_eq!(workspace.active_document_path(), None);
        assert_eq!(workspace.project_root_path(), None);
    }

    #[test]
    fn test_first_root_without_active_document() {
        let workspace = StaticWorkspace::new().with_project_roots(["/a", "/b"]);
        assert_eq!(workspace.project_root_path().as_deref(), Some("/a"));
    }

    #[test]
    fn test_root_containing_active_document() {
        let workspace = StaticWorkspace::new()
            .with_project_roots(["/a", "/b"])
            .with_active_document("/b/src/main.rs");
        assert_eq!(workspace.project_root_path().as_deref(), Some("/b"));
    }

    #[test]
    fn test_sibling_prefix_is_not_containment() {
        let workspace = StaticWorkspace::new()
            .with_project_roots(["/app", "/application"])
            .with_active_document("/application/main.rs");
        assert_eq!(workspace.project_root_path().as_deref(), Some("/application"));
    }

    #[test]
    fn test_root_with_trailing_separator() {
        let workspace = StaticWorkspace::new()
            .with_project_roots(["/x", "/y/"])
            .with_active_document("/y/file");
        assert_eq!(workspace.project_root_path().as_deref(), Some("/y/"));
    }

    #[test]
    fn test_active_document_outside_projects() {
        let workspace = StaticWorkspace::new()
            .with_project_root("/a")
            .with_active_document("/tmp/scratch.txt");
        assert_eq!(workspace.project_root_path().as_deref(), Some("/a"));
    }

    #[test]
    fn test_preferred_root_wins() {
        let workspace = StaticWorkspace::new()
            .with_project_roots(["/a", "/b"])
            .with_active_document("/b/x")
            .with_preferred_root("/pinned");
        assert_eq!(workspace.project_root_path().as_deref(), Some("/pinned"));
    }
}
