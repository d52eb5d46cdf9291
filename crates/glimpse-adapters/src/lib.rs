//! Infrastructure adapters for Glimpse.
//!
//! This crate implements the ports defined in
//! `glimpse-core::application::ports`. It contains all external dependencies
//! and I/O operations.

pub mod filesystem;
pub mod process;
pub mod watcher;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{FakeProcessRunner, FlutterRunLauncher, SystemProcessRunner};
pub use watcher::SourceWatcher;
