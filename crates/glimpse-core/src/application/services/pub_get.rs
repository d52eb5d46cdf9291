//! Dependency Resolution Invoker.
//!
//! Shells out to the package manager against the scaffold's own manifest.
//! The subprocess's exit code and captured output are the sole signal of
//! success or failure; nothing is retried here. Falling back to `--offline`
//! is a user action, not an automatic one.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::error::ApplicationError;
use crate::application::ports::ProcessRunner;
use crate::error::GlimpseResult;

pub struct DependencyResolver {
    runner: Arc<dyn ProcessRunner>,
    flutter_bin: String,
}

impl DependencyResolver {
    pub fn new(runner: Arc<dyn ProcessRunner>, flutter_bin: impl Into<String>) -> Self {
        Self {
            runner,
            flutter_bin: flutter_bin.into(),
        }
    }

    /// Run `flutter pub get` with the scaffold as working directory.
    ///
    /// Must only be called after the generated file has been written — its
    /// imports determine what the scaffold depends on.
    pub fn resolve(&self, scaffold: &Path, offline: bool) -> GlimpseResult<()> {
        let mut args = vec!["pub", "get"];
        if offline {
            args.push("--offline");
        }

        info!(offline, cwd = %scaffold.display(), "resolving scaffold dependencies");
        let output = self.runner.run(&self.flutter_bin, &args, scaffold)?;

        if !output.success() {
            return Err(ApplicationError::DependencyResolution {
                code: output.code,
                stdout: output.stdout,
                stderr: output.stderr,
            }
            .into());
        }

        debug!("scaffold dependencies resolved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ProcessOutput;
    use crate::testing::RecordingRunner;
    use std::path::PathBuf;

    fn scaffold() -> PathBuf {
        PathBuf::from("/work/app/.glimpse/widget_preview_scaffold")
    }

    #[test]
    fn online_resolution_omits_offline_flag() {
        let runner = RecordingRunner::new();
        let resolver = DependencyResolver::new(Arc::new(runner.clone()), "flutter");

        resolver.resolve(&scaffold(), false).unwrap();

        let invocations = runner.invocations();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].program, "flutter");
        assert_eq!(invocations[0].args, vec!["pub", "get"]);
        assert_eq!(invocations[0].cwd, scaffold());
    }

    #[test]
    fn offline_resolution_passes_offline_flag() {
        let runner = RecordingRunner::new();
        let resolver = DependencyResolver::new(Arc::new(runner.clone()), "flutter");

        resolver.resolve(&scaffold(), true).unwrap();

        assert_eq!(
            runner.invocations()[0].args,
            vec!["pub", "get", "--offline"]
        );
    }

    #[test]
    fn nonzero_exit_surfaces_captured_output() {
        let runner = RecordingRunner::new();
        runner.push_result(Ok(ProcessOutput {
            code: Some(66),
            stdout: "Resolving dependencies...".into(),
            stderr: "version solving failed".into(),
        }));
        let resolver = DependencyResolver::new(Arc::new(runner), "flutter");

        let err = resolver.resolve(&scaffold(), false).unwrap_err();
        assert!(err.to_string().contains("dependency resolution failed"));
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("version solving failed"))
        );
    }

    #[test]
    fn configured_binary_name_is_used() {
        let runner = RecordingRunner::new();
        let resolver = DependencyResolver::new(Arc::new(runner.clone()), "/opt/flutter/bin/flutter");
        resolver.resolve(&scaffold(), false).unwrap();
        assert_eq!(runner.invocations()[0].program, "/opt/flutter/bin/flutter");
    }
}
