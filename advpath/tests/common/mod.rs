//! Common test utilities for integration tests.
//!
//! Fixture builders for platforms and workspaces with predictable state.

use advpath::{PathValue, StaticWorkspace, SystemPlatform};

/// Base directory used by [`posix_platform`].
#[allow(dead_code)]
pub const POSIX_BASE: &str = "/home/tester/work";

/// A posix platform rooted at [`POSIX_BASE`] with a fixed home directory.
#[allow(dead_code)]
pub fn posix_platform() -> SystemPlatform {
    SystemPlatform::posix(POSIX_BASE).with_home_dir(Some("/home/tester".to_string()))
}

/// A windows platform rooted at `C:\work`.
#[allow(dead_code)]
pub fn windows_platform() -> SystemPlatform {
    SystemPlatform::windows(r"C:\work").with_home_dir(Some(r"C:\Users\tester".to_string()))
}

/// Build path values for each string in `raw`.
#[allow(dead_code)]
pub fn values(platform: &SystemPlatform, raw: &[&str]) -> Vec<PathValue> {
    raw.iter().map(|s| PathValue::new(*s, platform)).collect()
}

/// Builder for workspaces used across tests.
///
/// # Examples
///
/// ```no_run
/// # use common::WorkspaceFixture;
/// let workspace = WorkspaceFixture::new()
///     .with_root("/proj")
///     .editing("/proj/src/main.rs")
///     .build();
/// ```
#[allow(dead_code)]
#[derive(Default)]
pub struct WorkspaceFixture {
    roots: Vec<String>,
    active: Option<String>,
}

#[allow(dead_code)]
impl WorkspaceFixture {
    /// Creates an empty fixture: no project roots, no active document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a project root.
    pub fn with_root(mut self, root: &str) -> Self {
        self.roots.push(root.to_string());
        self
    }

    /// Sets the active document.
    pub fn editing(mut self, document: &str) -> Self {
        self.active = Some(document.to_string());
        self
    }

    /// Builds the workspace.
    pub fn build(self) -> StaticWorkspace {
        let workspace = StaticWorkspace::new().with_project_roots(self.roots);
        match self.active {
            Some(document) => workspace.with_active_document(document),
            None => workspace,
        }
    }
}
