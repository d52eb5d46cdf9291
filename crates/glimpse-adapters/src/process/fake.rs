//! Recording, scriptable process runner for tests.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use glimpse_core::application::ports::{ProcessOutput, ProcessRunner};
use glimpse_core::error::{GlimpseError, GlimpseResult};

/// A recorded subprocess invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Process-runner double.
///
/// Records every invocation and replays scripted results in FIFO order;
/// unscripted invocations succeed with empty output. Cloning shares the
/// underlying state so tests can keep a handle for assertions.
#[derive(Clone, Default)]
pub struct FakeProcessRunner {
    invocations: Arc<Mutex<Vec<RecordedInvocation>>>,
    results: Arc<Mutex<VecDeque<Result<ProcessOutput, GlimpseError>>>>,
}

impl FakeProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result returned by the next invocation.
    pub fn push_result(&self, result: Result<ProcessOutput, GlimpseError>) {
        self.results.lock().unwrap().push_back(result);
    }

    /// Convenience: queue a plain exit status with captured output.
    pub fn push_exit(&self, code: i32, stdout: &str, stderr: &str) {
        self.push_result(Ok(ProcessOutput {
            code: Some(code),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }));
    }

    pub fn invocations(&self) -> Vec<RecordedInvocation> {
        self.invocations.lock().unwrap().clone()
    }
}

impl ProcessRunner for FakeProcessRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> GlimpseResult<ProcessOutput> {
        self.invocations.lock().unwrap().push(RecordedInvocation {
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

#[cfg(test)]
mod tests {
    use super::*;
    use glimpse_core::application::DependencyResolver;
    use std::sync::Arc;

    #[test]
    fn records_invocations_in_order() {
        let runner = FakeProcessRunner::new();
        runner.run("a", &["1"], Path::new("/w")).unwrap();
        runner.run("b", &["2", "3"], Path::new("/w")).unwrap();

        let invocations = runner.invocations();
        assert_eq!(invocations[0].program, "a");
        assert_eq!(invocations[1].args, vec!["2", "3"]);
    }

    #[test]
    fn scripted_results_replay_fifo() {
        let runner = FakeProcessRunner::new();
        runner.push_exit(1, "", "first");
        runner.push_exit(0, "second", "");

        assert_eq!(runner.run("x", &[], Path::new("/")).unwrap().code, Some(1));
        assert_eq!(
            runner.run("x", &[], Path::new("/")).unwrap().stdout,
            "second"
        );
        // Unscripted calls fall back to success.
        assert!(runner.run("x", &[], Path::new("/")).unwrap().success());
    }

    // The offline-flag contract, exercised through the real resolver service
    // against this fake.
    #[test]
    fn dependency_resolver_passes_offline_flag_through() {
        let runner = FakeProcessRunner::new();
        let resolver = DependencyResolver::new(Arc::new(runner.clone()), "flutter");
        let scaffold = Path::new("/p/.glimpse/widget_preview_scaffold");

        resolver.resolve(scaffold, true).unwrap();
        resolver.resolve(scaffold, false).unwrap();

        let invocations = runner.invocations();
        assert_eq!(invocations[0].args, vec!["pub", "get", "--offline"]);
        assert_eq!(invocations[1].args, vec!["pub", "get"]);
        assert_eq!(invocations[0].cwd, scaffold);
    }
}
