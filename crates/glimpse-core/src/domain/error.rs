//! Domain layer errors.
//!
//! These errors represent violations of the project-validity rules, not
//! orchestration failures. Orchestration errors are `ApplicationError` from
//! `crate::application`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while validating the target project.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// More than one project path argument was supplied.
    #[error("Only one directory should be provided.")]
    MultipleProjectPaths,

    /// The supplied path does not exist (or is not a directory).
    #[error("{} does not exist.", path.display())]
    InvalidPath { path: PathBuf },

    /// The resolved root lacks a `pubspec.yaml`.
    #[error("{} is not a valid Flutter project.", path.display())]
    NotAProject { path: PathBuf },

    /// The project's `pubspec.yaml` could not be understood.
    #[error("failed to parse {}: {reason}", path.display())]
    InvalidManifest { path: PathBuf, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MultipleProjectPaths => vec![
                "Pass a single project directory, or none to use the current directory".into(),
                "Example: glimpse start path/to/project".into(),
            ],
            Self::InvalidPath { path } => vec![
                format!("No directory found at '{}'", path.display()),
                "Check the path for typos".into(),
            ],
            Self::NotAProject { path } => vec![
                format!("'{}' does not contain a pubspec.yaml", path.display()),
                "Run glimpse from inside a Flutter project, or pass its path".into(),
            ],
            Self::InvalidManifest { path, .. } => vec![
                format!("Could not read the package name from '{}'", path.display()),
                "Ensure pubspec.yaml declares a top-level 'name:' entry".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MultipleProjectPaths => ErrorCategory::Validation,
            Self::InvalidPath { .. } => ErrorCategory::NotFound,
            Self::NotAProject { .. } => ErrorCategory::Validation,
            Self::InvalidManifest { .. } => ErrorCategory::Validation,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
