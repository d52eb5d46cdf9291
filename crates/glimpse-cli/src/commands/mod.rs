//! Command handlers.
//!
//! Each handler translates CLI arguments into core types, wires up the
//! production adapters, calls the core session, and displays results.
//! No business logic lives here.

pub mod clean;
pub mod start;

use std::sync::Arc;

use glimpse_adapters::{FlutterRunLauncher, LocalFilesystem, SystemProcessRunner};
use glimpse_core::application::PreviewSession;

use crate::config::AppConfig;

/// Wire a session over the production adapters.
pub(crate) fn build_session(config: &AppConfig) -> PreviewSession {
    PreviewSession::new(
        Arc::new(LocalFilesystem::new()),
        Arc::new(SystemProcessRunner::new()),
        Arc::new(FlutterRunLauncher::new(config.flutter.bin.clone())),
        config.flutter.bin.clone(),
    )
}
