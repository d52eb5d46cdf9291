//! Hand-rolled test doubles for the output ports.
//!
//! Uses `Arc<Mutex<_>>` internally so doubles can be cloned and shared
//! between the service under test and the asserting test body.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::application::ApplicationError;
use crate::application::ports::{
    Filesystem, PreviewHandle, PreviewLauncher, ProcessOutput, ProcessRunner,
};
use crate::error::{GlimpseError, GlimpseResult};

// ── MemoryFs ──────────────────────────────────────────────────────────────────

/// In-memory filesystem double.
#[derive(Clone, Default)]
pub struct MemoryFs {
    inner: Arc<Mutex<MemoryFsInner>>,
}

#[derive(Default)]
struct MemoryFsInner {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    fail_path: Option<PathBuf>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating implied parent directories.
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: &str) {
        let path = path.into();
        let mut inner = self.inner.lock().unwrap();
        let mut current = PathBuf::new();
        if let Some(parent) = path.parent() {
            for component in parent.components() {
                current.push(component);
                inner.dirs.insert(current.clone());
            }
        }
        inner.files.insert(path, content.to_string());
    }

    pub fn seed_dir(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let mut inner = self.inner.lock().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.dirs.insert(current.clone());
        }
    }

    /// Make every subsequent write to exactly `path` fail.
    pub fn fail_writes_to(&self, path: impl Into<PathBuf>) {
        self.inner.lock().unwrap().fail_path = Some(path.into());
    }

    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.inner.lock().unwrap().files.get(path).cloned()
    }
}

impl Filesystem for MemoryFs {
    fn read_to_string(&self, path: &Path) -> GlimpseResult<String> {
        self.read_file(path).ok_or_else(|| {
            ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "file not found".into(),
            }
            .into()
        })
    }

    fn write_atomic(&self, path: &Path, content: &str) -> GlimpseResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_path.as_deref() == Some(path) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "no space left on device".into(),
            }
            .into());
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> GlimpseResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.dirs.insert(current.clone());
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.files.contains_key(path) || inner.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.lock().unwrap().dirs.contains(path)
    }

    fn remove_dir_all(&self, path: &Path) -> GlimpseResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.dirs.retain(|d| !d.starts_with(path));
        inner.files.retain(|f, _| !f.starts_with(path));
        Ok(())
    }

    fn list_files(&self, root: &Path) -> GlimpseResult<Vec<PathBuf>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .files
            .keys()
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect())
    }
}

// ── RecordingRunner ───────────────────────────────────────────────────────────

/// A recorded subprocess invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Process-runner double that records invocations and replays scripted
/// results (success by default).
#[derive(Clone, Default)]
pub struct RecordingRunner {
    invocations: Arc<Mutex<Vec<Invocation>>>,
    results: Arc<Mutex<VecDeque<Result<ProcessOutput, GlimpseError>>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result for the next invocation.
    pub fn push_result(&self, result: Result<ProcessOutput, GlimpseError>) {
        self.results.lock().unwrap().push_back(result);
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> GlimpseResult<ProcessOutput> {
        self.invocations.lock().unwrap().push(Invocation {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.to_path_buf(),
        });
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(ProcessOutput {
                code: Some(0),
                stdout: String::new(),
                stderr: String::new(),
            }))
    }
}

// ── StubLauncher ──────────────────────────────────────────────────────────────

/// Launcher double whose handle reports not-running so watch loops exit
/// immediately in tests.
#[derive(Clone, Default)]
pub struct StubLauncher {
    launches: Arc<Mutex<Vec<PathBuf>>>,
    stops: Arc<Mutex<usize>>,
}

impl StubLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn launches(&self) -> Vec<PathBuf> {
        self.launches.lock().unwrap().clone()
    }

    pub fn stop_count(&self) -> usize {
        *self.stops.lock().unwrap()
    }
}

#[derive(Debug)]
struct StubHandle {
    stops: Arc<Mutex<usize>>,
    alive: bool,
}

impl PreviewHandle for StubHandle {
    fn stop(&mut self) -> GlimpseResult<()> {
        self.alive = false;
        *self.stops.lock().unwrap() += 1;
        Ok(())
    }

    fn is_running(&mut self) -> bool {
        self.alive
    }
}

impl PreviewLauncher for StubLauncher {
    fn launch(&self, scaffold: &Path) -> GlimpseResult<Box<dyn PreviewHandle>> {
        self.launches.lock().unwrap().push(scaffold.to_path_buf());
        Ok(Box::new(StubHandle {
            stops: Arc::clone(&self.stops),
            alive: true,
        }))
    }
}

// ── Fixture helpers ───────────────────────────────────────────────────────────

/// Seed a minimal valid project at `/work/app` and return its path.
pub fn seed_project(fs: &MemoryFs, name: &str) -> PathBuf {
    let root = PathBuf::from("/work/app");
    fs.seed_dir(&root);
    fs.seed_file(root.join("pubspec.yaml"), &format!("name: {name}\n"));
    fs.seed_dir(root.join("lib"));
    root
}
