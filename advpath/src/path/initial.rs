//! The path shown when a prompt first opens.

use crate::config::DefaultInput;
use crate::path::platform::Platform;
use crate::path::value::PathValue;
use crate::path::workspace::Workspace;

/// A place the initial path can be taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InitialSource {
    /// Directory containing the active document. Skipped without one.
    ActiveFileDir,
    /// The workspace's project root. Skipped when no project is open.
    ProjectRoot,
}

impl InitialSource {
    /// Sources to try for `preference`, in order.
    fn sequence(preference: DefaultInput) -> &'static [Self] {
        match preference {
            DefaultInput::ActiveFileDir => &[Self::ActiveFileDir, Self::ProjectRoot],
            DefaultInput::ProjectRoot => &[Self::ProjectRoot],
            DefaultInput::Empty => &[],
        }
    }

    fn resolve<W, P>(self, workspace: &W, platform: &P) -> Option<PathValue>
    where
        W: Workspace + ?Sized,
        P: Platform + ?Sized,
    {
        match self {
            Self::ActiveFileDir => workspace.active_document_path().map(|document| {
                let directory = platform.directory_name(&document);
                PathValue::new(directory, platform).as_directory(platform)
            }),
            Self::ProjectRoot => workspace
                .project_root_path()
                .map(|root| PathValue::new(root, platform).as_directory(platform)),
        }
    }
}

/// Resolve the initial path for `preference`.
///
/// `ActiveFileDir` yields the active document's directory and falls back to
/// the project root; `ProjectRoot` yields the project root. When nothing
/// applies, or for `Empty`, the result is the empty path.
///
/// # Examples
///
/// ```
/// use advpath::config::DefaultInput;
/// use advpath::path::{initial_path, StaticWorkspace, SystemPlatform};
///
/// let platform = SystemPlatform::posix("/");
/// let workspace = StaticWorkspace::new()
///     .with_project_root("/proj")
///     .with_active_document("/proj/src/main.rs");
///
/// let path = initial_path(DefaultInput::ActiveFileDir, &workspace, &platform);
/// assert_eq!(path.full(), "/proj/src/");
///
/// let path = initial_path(DefaultInput::ProjectRoot, &workspace, &platform);
/// assert_eq!(path.full(), "/proj/");
///
/// let path = initial_path(DefaultInput::Empty, &workspace, &platform);
/// assert!(path.is_empty());
/// ```
#[must_use]
pub fn initial_path<W, P>(preference: DefaultInput, workspace: &W, platform: &P) -> PathValue
where
    W: Workspace + ?Sized,
    P: Platform + ?Sized,
{
    for source in InitialSource::sequence(preference) {
        if let Some(path) = source.resolve(workspace, platform) {
            log::debug!("initial path from {source:?}: {path}");
            return path;
        }
        log::debug!("initial path source {source:?} unavailable");
    }

    log::debug!("no initial path source for {preference}, starting empty");
    PathValue::empty(platform)
}

impl PathValue {
    /// Shorthand for [`initial_path`].
    #[must_use]
    pub fn initial<W, P>(preference: DefaultInput, workspace: &W, platform: &P) -> Self
    where
        W: Workspace + ?Sized,
        P: Platform + ?Sized,
    {
        initial_path(preference, workspace, platform)
    }
}
