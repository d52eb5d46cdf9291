//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `glimpse-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `Filesystem`: file operations
//!   - `ProcessRunner`: blocking subprocess invocation
//!   - `PreviewLauncher`: long-running preview runtime
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by
//!   application (defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, PreviewHandle, PreviewLauncher, ProcessOutput, ProcessRunner};
