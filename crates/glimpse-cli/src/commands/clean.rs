//! Implementation of the `glimpse clean` command.

use tracing::instrument;

use crate::{
    cli::{CleanArgs, GlobalArgs},
    commands::build_session,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `glimpse clean` command.
///
/// Validation failures abort before any deletion is attempted; removing an
/// already-absent scaffold succeeds quietly.
#[instrument(skip_all)]
pub fn execute(
    args: CleanArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let cwd = std::env::current_dir()?;
    let mut session = build_session(&config);

    let removed = session.clean(&args.paths, &cwd)?;

    output.success(&format!("Cleaned {}", removed.display()))?;
    Ok(())
}
