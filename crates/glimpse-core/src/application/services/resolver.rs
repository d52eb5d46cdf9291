//! Project Resolver - validates and normalizes the target project path.
//!
//! Pure validation: reads through the [`Filesystem`] port, never mutates.
//! The working directory is an explicit argument so callers (and tests)
//! control it instead of the resolver reading a process global.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::ports::Filesystem;
use crate::domain::{DomainError, PROJECT_MARKER, ProjectManifest, ProjectRoot};
use crate::error::GlimpseResult;

/// Resolve the effective project root for a command invocation.
///
/// - more than one explicit path fails before any filesystem access;
/// - an explicit path must exist as a directory;
/// - the effective root (explicit path, else `cwd`) must contain the
///   project marker.
pub fn resolve(fs: &dyn Filesystem, explicit: &[PathBuf], cwd: &Path) -> GlimpseResult<ProjectRoot> {
    if explicit.len() > 1 {
        return Err(DomainError::MultipleProjectPaths.into());
    }

    let candidate = match explicit.first() {
        Some(path) => {
            let absolute = if path.is_absolute() {
                path.clone()
            } else {
                cwd.join(path)
            };
            if !fs.is_dir(&absolute) {
                return Err(DomainError::InvalidPath { path: absolute }.into());
            }
            absolute
        }
        None => cwd.to_path_buf(),
    };

    if !fs.exists(&candidate.join(PROJECT_MARKER)) {
        return Err(DomainError::NotAProject { path: candidate }.into());
    }

    debug!(root = %candidate.display(), "project root resolved");
    Ok(ProjectRoot::new_unchecked(candidate))
}

/// Load and parse the resolved project's manifest.
pub fn load_manifest(fs: &dyn Filesystem, root: &ProjectRoot) -> GlimpseResult<ProjectManifest> {
    let path = root.marker_path();
    let content = fs.read_to_string(&path)?;
    Ok(ProjectManifest::parse(&path, &content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryFs, seed_project};

    #[test]
    fn cwd_is_implicit_root() {
        let fs = MemoryFs::new();
        let root = seed_project(&fs, "my_app");
        let resolved = resolve(&fs, &[], &root).unwrap();
        assert_eq!(resolved.path(), root);
    }

    #[test]
    fn explicit_path_overrides_cwd() {
        let fs = MemoryFs::new();
        let root = seed_project(&fs, "my_app");
        let resolved = resolve(&fs, &[root.clone()], Path::new("/elsewhere")).unwrap();
        assert_eq!(resolved.path(), root);
    }

    #[test]
    fn relative_explicit_path_is_joined_to_cwd() {
        let fs = MemoryFs::new();
        let root = seed_project(&fs, "my_app");
        let resolved = resolve(&fs, &[PathBuf::from("app")], Path::new("/work")).unwrap();
        assert_eq!(resolved.path(), root);
    }

    #[test]
    fn two_paths_fail_before_filesystem_access() {
        // Note: neither path exists in the fake; the argument-count check
        // must win regardless.
        let fs = MemoryFs::new();
        let err = resolve(
            &fs,
            &[PathBuf::from("/a"), PathBuf::from("/b")],
            Path::new("/work"),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Only one directory should be provided."
        );
    }

    #[test]
    fn missing_explicit_path_is_invalid_path() {
        let fs = MemoryFs::new();
        seed_project(&fs, "my_app");
        let err = resolve(&fs, &[PathBuf::from("/work/missing")], Path::new("/work")).unwrap_err();
        assert!(err.to_string().contains("/work/missing"));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn root_without_marker_is_not_a_project() {
        let fs = MemoryFs::new();
        fs.seed_dir("/work/plain");
        let err = resolve(&fs, &[], Path::new("/work/plain")).unwrap_err();
        assert!(err.to_string().contains("/work/plain"));
        assert!(err.to_string().contains("not a valid Flutter project"));
    }

    #[test]
    fn manifest_loads_for_valid_project() {
        let fs = MemoryFs::new();
        let root = seed_project(&fs, "my_app");
        let resolved = resolve(&fs, &[], &root).unwrap();
        let manifest = load_manifest(&fs, &resolved).unwrap();
        assert_eq!(manifest.package_name(), "my_app");
    }
}
