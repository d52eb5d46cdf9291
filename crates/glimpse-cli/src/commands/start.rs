//! Implementation of the `glimpse start` command.
//!
//! Dispatch sequence:
//! 1. Validate the flag combination
//! 2. Run the core pipeline (validate → scaffold → scan → generate →
//!    resolve dependencies)
//! 3. Unless `--no-launch`: install the Ctrl+C handler and the source
//!    watcher, launch the preview runtime, and block in the watch loop

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, instrument};

use glimpse_adapters::SourceWatcher;
use glimpse_core::application::StartOptions;

use crate::{
    cli::{GlobalArgs, StartArgs},
    commands::build_session,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `glimpse start` command.
#[instrument(skip_all)]
pub fn execute(
    args: StartArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    if args.offline && !args.resolve_dependencies() {
        return Err(CliError::InvalidInput {
            message: "--offline has no effect when --no-pub is set".into(),
        });
    }

    let cwd = std::env::current_dir()?;
    let mut session = build_session(&config);
    let options = StartOptions {
        resolve_dependencies: args.resolve_dependencies(),
        offline: args.offline,
    };

    debug!(
        paths = args.paths.len(),
        resolve = options.resolve_dependencies,
        offline = options.offline,
        "starting preview session"
    );

    output.header("Preparing widget previews...")?;
    let outcome = session.start(&args.paths, &cwd, &options)?;

    if outcome.preview_count == 0 {
        output.warning("No @Preview declarations found; the preview list will be empty.")?;
    }
    output.success(&format!(
        "Aggregated {} preview(s) into {}",
        outcome.preview_count,
        outcome.generated_file.display()
    ))?;

    if args.no_launch {
        info!("launch skipped");
        if !output.is_quiet() {
            output.print("Launch skipped (--no-launch). Run without the flag to open previews.")?;
        }
        return Ok(());
    }

    // Ctrl+C flips the flag; the watch loop notices within its poll tick.
    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = Arc::clone(&running);
    ctrlc::set_handler(move || handler_flag.store(false, Ordering::SeqCst)).map_err(|e| {
        CliError::SessionSetup {
            message: format!("could not install the Ctrl+C handler: {e}"),
        }
    })?;

    let watcher = SourceWatcher::watch(outcome.root.path())?;
    output.info("Watching for source changes. Press Ctrl+C to stop.")?;

    session.launch_and_watch(&outcome.root, watcher.events(), &running)?;

    output.success("Preview session stopped.")?;
    Ok(())
}
