//! Preview-runtime launcher: `flutter run` against the scaffold.

use std::path::Path;
use std::process::{Child, Command, Stdio};

use glimpse_core::application::ApplicationError;
use glimpse_core::application::ports::{PreviewHandle, PreviewLauncher};
use glimpse_core::error::GlimpseResult;
use tracing::{debug, warn};

/// Launches `flutter run` with the scaffold as working directory.
///
/// The runtime inherits the terminal so its interactive hot-reload keys
/// keep working; Glimpse only holds the child handle to stop it.
#[derive(Debug, Clone)]
pub struct FlutterRunLauncher {
    bin: String,
}

impl FlutterRunLauncher {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }
}

impl PreviewLauncher for FlutterRunLauncher {
    fn launch(&self, scaffold: &Path) -> GlimpseResult<Box<dyn PreviewHandle>> {
        debug!(bin = %self.bin, cwd = %scaffold.display(), "launching preview runtime");

        let child = Command::new(&self.bin)
            .arg("run")
            .current_dir(scaffold)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| ApplicationError::Subprocess {
                program: self.bin.clone(),
                reason: e.to_string(),
            })?;

        Ok(Box::new(FlutterRunHandle { child }))
    }
}

#[derive(Debug)]
struct FlutterRunHandle {
    child: Child,
}

impl PreviewHandle for FlutterRunHandle {
    fn stop(&mut self) -> GlimpseResult<()> {
        match self.child.try_wait() {
            Ok(Some(status)) => {
                debug!(%status, "preview runtime already exited");
                return Ok(());
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "could not query preview runtime state"),
        }

        self.child.kill().map_err(|e| ApplicationError::Subprocess {
            program: "flutter run".into(),
            reason: e.to_string(),
        })?;
        // Reap the child so no zombie outlives the session.
        let _ = self.child.wait();
        Ok(())
    }

    fn is_running(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }
}
