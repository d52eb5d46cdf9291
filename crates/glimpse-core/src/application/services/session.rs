//! Command Orchestrator - the `start`/`clean` state machine.
//!
//! Composes resolver → scaffold manager → scanner → generator → dependency
//! resolver, then (for live sessions) hands off to the preview runtime and
//! keeps the generated file current while sources change.
//!
//! Any failure in a stage aborts the whole command; no stage is retried
//! here, and no partial state transition is committed once an error is
//! raised.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::application::ports::{Filesystem, PreviewHandle, PreviewLauncher, ProcessRunner};
use crate::application::services::{generator, resolver, scanner};
use crate::application::services::{pub_get::DependencyResolver, scaffold::ScaffoldManager};
use crate::domain::{ProjectRoot, ScaffoldLayout};
use crate::error::{GlimpseError, GlimpseResult};

/// Debounce window for coalescing bursts of change events.
const DEBOUNCE: Duration = Duration::from_millis(100);
/// Poll interval for the cancellation flag while waiting for events.
const POLL: Duration = Duration::from_millis(50);

/// Orchestrator states.
///
/// `start` walks `Idle → Validating → ScaffoldReady → Scanning → Generating
/// → Resolving → Running`; `clean` walks `Idle → Validating → Removing →
/// Idle`. A failure leaves the session in the state of the failing stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Validating,
    ScaffoldReady,
    Scanning,
    Generating,
    Resolving,
    Running,
    Removing,
}

/// Options for the `start` pipeline.
#[derive(Debug, Clone)]
pub struct StartOptions {
    /// Run the package manager after generation.
    pub resolve_dependencies: bool,
    /// Pass the offline flag to the package manager.
    pub offline: bool,
}

impl Default for StartOptions {
    fn default() -> Self {
        Self {
            resolve_dependencies: true,
            offline: false,
        }
    }
}

/// What a successful `start` pipeline produced.
#[derive(Debug, Clone)]
pub struct StartOutcome {
    pub root: ProjectRoot,
    pub scaffold_dir: PathBuf,
    pub generated_file: PathBuf,
    pub preview_count: usize,
}

/// A preview session over one project.
///
/// Two different projects never share a session, so the scaffold lock is
/// simply a field: it serializes generator writes and scaffold
/// `ensure`/`remove` for this scaffold, including regenerations triggered
/// by the watch loop.
pub struct PreviewSession {
    fs: Arc<dyn Filesystem>,
    runner: Arc<dyn ProcessRunner>,
    launcher: Arc<dyn PreviewLauncher>,
    flutter_bin: String,
    scaffold_lock: Mutex<()>,
    state: SessionState,
}

impl PreviewSession {
    pub fn new(
        fs: Arc<dyn Filesystem>,
        runner: Arc<dyn ProcessRunner>,
        launcher: Arc<dyn PreviewLauncher>,
        flutter_bin: impl Into<String>,
    ) -> Self {
        Self {
            fs,
            runner,
            launcher,
            flutter_bin: flutter_bin.into(),
            scaffold_lock: Mutex::new(()),
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The `start` pipeline: validate → ensure scaffold → scan → generate →
    /// resolve dependencies.
    ///
    /// Launching the runtime is a separate step ([`Self::launch_and_watch`])
    /// so callers can run the pipeline headless.
    pub fn start(
        &mut self,
        explicit: &[PathBuf],
        cwd: &Path,
        options: &StartOptions,
    ) -> GlimpseResult<StartOutcome> {
        self.state = SessionState::Validating;
        let root = resolver::resolve(&*self.fs, explicit, cwd)?;
        let manifest = resolver::load_manifest(&*self.fs, &root)?;

        let manager = ScaffoldManager::new(Arc::clone(&self.fs));
        let layout = {
            let _guard = self.lock()?;
            manager.ensure(&root, &manifest)?
        };
        self.state = SessionState::ScaffoldReady;

        self.state = SessionState::Scanning;
        let declarations = scanner::scan(&*self.fs, &root, &layout.tool_dir())?;
        info!(count = declarations.len(), "preview declarations discovered");

        self.state = SessionState::Generating;
        let content = generator::generate(&manifest, &declarations);
        let generated_file = {
            let _guard = self.lock()?;
            manager.write_generated(&layout, &content)?
        };

        if options.resolve_dependencies {
            self.state = SessionState::Resolving;
            DependencyResolver::new(Arc::clone(&self.runner), self.flutter_bin.clone())
                .resolve(&layout.scaffold_dir(), options.offline)?;
        }

        self.state = SessionState::Running;
        Ok(StartOutcome {
            scaffold_dir: layout.scaffold_dir(),
            generated_file,
            preview_count: declarations.len(),
            root,
        })
    }

    /// Launch the preview runtime and block in the watch loop until the
    /// session is cancelled or the runtime exits.
    ///
    /// The runtime handle is always stopped before returning.
    pub fn launch_and_watch(
        &mut self,
        root: &ProjectRoot,
        events: &Receiver<PathBuf>,
        running: &AtomicBool,
    ) -> GlimpseResult<()> {
        let layout = ScaffoldLayout::for_project(root);
        let mut handle = self.launcher.launch(&layout.scaffold_dir())?;
        info!(scaffold = %layout.scaffold_dir().display(), "preview runtime launched");

        let result = self.watch_loop(root, &layout, events, running, &mut *handle);

        if let Err(e) = handle.stop() {
            warn!(error = %e, "failed to stop preview runtime");
        }
        result
    }

    /// Re-run scan → generate for a live session.
    ///
    /// Serialized under the scaffold lock so a regeneration triggered by a
    /// change event can never interleave with another write and produce
    /// output reflecting two different scan passes.
    pub fn regenerate(&self, root: &ProjectRoot) -> GlimpseResult<PathBuf> {
        let manifest = resolver::load_manifest(&*self.fs, root)?;
        let layout = ScaffoldLayout::for_project(root);
        let declarations = scanner::scan(&*self.fs, root, &layout.tool_dir())?;
        let content = generator::generate(&manifest, &declarations);

        let manager = ScaffoldManager::new(Arc::clone(&self.fs));
        let _guard = self.lock()?;
        manager.write_generated(&layout, &content)
    }

    /// The `clean` flow: validate, then remove the scaffold.
    ///
    /// Validation failure aborts before any deletion attempt. Running
    /// `clean` against a scaffold belonging to a still-active `start`
    /// session is caller misuse; stop the session first.
    pub fn clean(&mut self, explicit: &[PathBuf], cwd: &Path) -> GlimpseResult<PathBuf> {
        self.state = SessionState::Validating;
        let root = resolver::resolve(&*self.fs, explicit, cwd)?;

        self.state = SessionState::Removing;
        let removed = {
            let _guard = self.lock()?;
            ScaffoldManager::new(Arc::clone(&self.fs)).remove(&root)?
        };

        self.state = SessionState::Idle;
        Ok(removed)
    }

    fn watch_loop(
        &self,
        root: &ProjectRoot,
        layout: &ScaffoldLayout,
        events: &Receiver<PathBuf>,
        running: &AtomicBool,
        handle: &mut dyn PreviewHandle,
    ) -> GlimpseResult<()> {
        let mut pending: BTreeSet<PathBuf> = BTreeSet::new();
        let mut last_change = Instant::now();

        while running.load(Ordering::SeqCst) {
            if !handle.is_running() {
                info!("preview runtime exited");
                break;
            }

            match events.recv_timeout(POLL) {
                Ok(path) => {
                    if Self::is_relevant(root, layout, &path) {
                        pending.insert(path);
                        last_change = Instant::now();
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            if !pending.is_empty() && last_change.elapsed() >= DEBOUNCE {
                let changed = std::mem::take(&mut pending);
                debug!(files = changed.len(), "source change detected, regenerating");
                self.regenerate(root)?;
            }
        }

        Ok(())
    }

    /// Only `.dart` files under the source tree trigger regeneration; the
    /// scaffold subtree is excluded so our own writes never loop back.
    fn is_relevant(root: &ProjectRoot, layout: &ScaffoldLayout, path: &Path) -> bool {
        path.extension().map(|e| e == "dart").unwrap_or(false)
            && path.starts_with(root.source_dir())
            && !path.starts_with(layout.tool_dir())
    }

    fn lock(&self) -> GlimpseResult<MutexGuard<'_, ()>> {
        self.scaffold_lock.lock().map_err(|_| GlimpseError::Internal {
            message: "scaffold lock poisoned".into(),
        })
    }
}
