//! The validated project root.
//!
//! A [`ProjectRoot`] is only ever constructed through the resolver in the
//! application layer, so holding one is proof that the marker file was
//! present at resolution time.

use std::path::{Path, PathBuf};

/// File that must exist at the root of a valid target project.
pub const PROJECT_MARKER: &str = "pubspec.yaml";

/// Conventional source directory scanned for preview declarations.
pub const SOURCE_DIR: &str = "lib";

/// Absolute path to a validated Flutter project.
///
/// Immutable once resolved for a command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot(PathBuf);

impl ProjectRoot {
    /// Wrap an already-validated absolute path.
    ///
    /// Only the resolver should call this; it performs no checks.
    pub(crate) fn new_unchecked(path: PathBuf) -> Self {
        Self(path)
    }

    /// The project root directory.
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Path to the project marker (`pubspec.yaml`).
    pub fn marker_path(&self) -> PathBuf {
        self.0.join(PROJECT_MARKER)
    }

    /// Path to the conventional source directory (`lib/`).
    pub fn source_dir(&self) -> PathBuf {
        self.0.join(SOURCE_DIR)
    }

    /// Express `path` relative to the root as a forward-slash string.
    ///
    /// Returns `None` when `path` is not under the root.
    pub fn relativize(&self, path: &Path) -> Option<String> {
        let rel = path.strip_prefix(&self.0).ok()?;
        let parts: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(parts.join("/"))
    }
}

impl std::fmt::Display for ProjectRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
