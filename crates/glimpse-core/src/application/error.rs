//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem traversal or read failure during discovery.
    ///
    /// Distinct from "zero declarations found", which is success.
    #[error("failed to scan {}: {reason}", path.display())]
    Scan { path: PathBuf, reason: String },

    /// Failure to write the generated aggregation file.
    #[error("failed to write generated file {}: {reason}", path.display())]
    Generation { path: PathBuf, reason: String },

    /// The package-manager subprocess exited non-zero.
    ///
    /// Captured output is surfaced verbatim through [`Self::suggestions`].
    #[error("dependency resolution failed with exit code {code:?}")]
    DependencyResolution {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// Generic filesystem operation failed.
    #[error("filesystem error at {}: {reason}", path.display())]
    Filesystem { path: PathBuf, reason: String },

    /// The source watcher could not be installed.
    #[error("failed to watch {}: {reason}", path.display())]
    Watch { path: PathBuf, reason: String },

    /// A subprocess could not be spawned or controlled.
    #[error("failed to run {program}: {reason}")]
    Subprocess { program: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Scan { path, .. } => vec![
                format!("Failed while reading: {}", path.display()),
                "Check read permissions on the project's lib/ directory".into(),
            ],
            Self::Generation { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check write permissions and available disk space".into(),
                "Run glimpse clean and retry".into(),
            ],
            Self::DependencyResolution { stdout, stderr, .. } => {
                let mut out = Vec::new();
                for line in stdout.lines().chain(stderr.lines()) {
                    out.push(line.to_string());
                }
                out.push("If you are offline, retry with --offline".into());
                out
            }
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::Watch { path, .. } => vec![
                format!("Could not watch: {}", path.display()),
                "The platform file watcher may be out of handles".into(),
            ],
            Self::Subprocess { program, .. } => vec![
                format!("Ensure '{program}' is installed and in your PATH"),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Scan { .. }
            | Self::Generation { .. }
            | Self::Filesystem { .. }
            | Self::Watch { .. }
            | Self::Subprocess { .. } => ErrorCategory::Internal,
            Self::DependencyResolution { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_error_surfaces_captured_output() {
        let err = ApplicationError::DependencyResolution {
            code: Some(69),
            stdout: "Resolving dependencies...".into(),
            stderr: "Could not resolve package intl.".into(),
        };
        let suggestions = err.suggestions();
        assert!(
            suggestions
                .iter()
                .any(|s| s.contains("Resolving dependencies"))
        );
        assert!(suggestions.iter().any(|s| s.contains("intl")));
        assert!(err.to_string().contains("69"));
    }

    #[test]
    fn scan_error_names_path() {
        let err = ApplicationError::Scan {
            path: PathBuf::from("/p/lib/a.dart"),
            reason: "permission denied".into(),
        };
        assert!(err.to_string().contains("/p/lib/a.dart"));
        assert!(err.to_string().contains("permission denied"));
    }
}
