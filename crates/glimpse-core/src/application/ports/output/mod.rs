//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `glimpse-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::GlimpseResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `glimpse_adapters::filesystem::LocalFilesystem` (production)
/// - `glimpse_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `write_atomic` must never leave a truncated file behind: content is
///   staged to a sibling temp file and renamed over the destination.
/// - `list_files` makes no ordering promise; callers that need determinism
///   sort the result themselves.
pub trait Filesystem: Send + Sync {
    /// Read a file to a string.
    fn read_to_string(&self, path: &Path) -> GlimpseResult<String>;

    /// Replace `path` with `content` atomically.
    fn write_atomic(&self, path: &Path, content: &str) -> GlimpseResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GlimpseResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> GlimpseResult<()>;

    /// Recursively enumerate regular files under `root`.
    fn list_files(&self, root: &Path) -> GlimpseResult<Vec<PathBuf>>;
}

/// Outcome of a finished subprocess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code; `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Port for blocking subprocess invocation.
///
/// Implemented by:
/// - `glimpse_adapters::process::SystemProcessRunner` (production)
/// - `glimpse_adapters::process::FakeProcessRunner` (testing)
pub trait ProcessRunner: Send + Sync {
    /// Run `program` with `args` in `cwd`, capturing output until exit.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> GlimpseResult<ProcessOutput>;
}

/// Handle to a launched preview runtime.
pub trait PreviewHandle: Send + std::fmt::Debug {
    /// Stop the runtime, releasing the subprocess handle.
    fn stop(&mut self) -> GlimpseResult<()>;

    /// Whether the runtime is still alive.
    fn is_running(&mut self) -> bool;
}

/// Port for launching the long-running preview runtime against a scaffold.
///
/// The runtime itself is an external collaborator; Glimpse only starts and
/// stops it.
pub trait PreviewLauncher: Send + Sync {
    fn launch(&self, scaffold: &Path) -> GlimpseResult<Box<dyn PreviewHandle>>;
}
