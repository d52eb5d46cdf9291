//! Source-tree watcher feeding change events to the session's watch loop.
//!
//! Event paths are forwarded raw; relevance filtering (dart-only, scaffold
//! subtree excluded) and debouncing happen in the core watch loop so the
//! policy is testable without a real watcher.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, channel};

use glimpse_core::application::ApplicationError;
use glimpse_core::error::{GlimpseError, GlimpseResult};
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::debug;

/// Recursive watcher over a project root.
#[derive(Debug)]
pub struct SourceWatcher {
    // Held for its Drop; unregisters the platform watcher with the receiver.
    _watcher: RecommendedWatcher,
    events: Receiver<PathBuf>,
}

impl SourceWatcher {
    /// Install a recursive watcher on `root`.
    pub fn watch(root: &Path) -> GlimpseResult<Self> {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            Config::default(),
        )
        .map_err(|e| watch_error(root, e))?;

        watcher
            .watch(root, RecursiveMode::Recursive)
            .map_err(|e| watch_error(root, e))?;

        debug!(root = %root.display(), "source watcher installed");
        Ok(Self {
            _watcher: watcher,
            events: rx,
        })
    }

    /// The channel the core watch loop consumes.
    pub fn events(&self) -> &Receiver<PathBuf> {
        &self.events
    }
}

fn watch_error(path: &Path, e: notify::Error) -> GlimpseError {
    ApplicationError::Watch {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
