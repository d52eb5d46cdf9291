//! Blocking subprocess runner using std::process.

use std::path::Path;
use std::process::{Command, Stdio};

use glimpse_core::application::ApplicationError;
use glimpse_core::application::ports::{ProcessOutput, ProcessRunner};
use glimpse_core::error::GlimpseResult;
use tracing::debug;

/// Production process runner.
///
/// Runs the program to completion with captured stdout/stderr; the exit
/// code and captured output are the caller's only signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> GlimpseResult<ProcessOutput> {
        debug!(program, ?args, cwd = %cwd.display(), "running subprocess");

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ApplicationError::Subprocess {
                program: program.to_string(),
                reason: e.to_string(),
            })?;

        Ok(ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
