//! Application layer for Glimpse.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (scanner, generator, scaffold
//!   lifecycle, dependency resolution, the preview session)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    generator, resolver, scanner,
    pub_get::DependencyResolver,
    scaffold::ScaffoldManager,
    session::{PreviewSession, SessionState, StartOptions, StartOutcome},
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, PreviewHandle, PreviewLauncher, ProcessOutput, ProcessRunner};

pub use error::ApplicationError;
