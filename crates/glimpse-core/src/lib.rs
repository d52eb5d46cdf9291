//! Glimpse Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Glimpse
//! widget preview tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           glimpse-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (PreviewSession, Scanner, Generator)   │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Filesystem, Process, Launcher) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    glimpse-adapters (Infrastructure)    │
//! │ (LocalFilesystem, SystemProcessRunner)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ProjectRoot, PreviewDeclaration, ...)  │
//! │         No I/O Dependencies             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use glimpse_core::application::{PreviewSession, StartOptions};
//!
//! // Build a session with injected adapters, then drive the start pipeline.
//! let mut session = PreviewSession::new(fs, runner, launcher, "flutter");
//! let outcome = session.start(&[], &cwd, &StartOptions::default())?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

#[cfg(test)]
pub(crate) mod testing;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        PreviewSession, SessionState, StartOptions, StartOutcome,
        ports::{Filesystem, PreviewHandle, PreviewLauncher, ProcessOutput, ProcessRunner},
    };
    pub use crate::domain::{
        PreviewDeclaration, ProjectManifest, ProjectRoot, ScaffoldLayout, PROJECT_MARKER,
    };
    pub use crate::error::{GlimpseError, GlimpseResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
