//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text. No business logic lives here — in particular, the
//! "one directory only" rule is enforced by the resolver, not clap, so the
//! taxonomy error message is the one users see.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "glimpse",
    bin_name = "glimpse",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f50d} Preview isolated Flutter widgets",
    long_about = "Glimpse discovers @Preview-annotated widget declarations, \
                  aggregates them into a throwaway preview scaffold, and runs \
                  them without launching the full application.",
    after_help = "EXAMPLES:\n\
        \x20 glimpse start                      # preview the project in the current directory\n\
        \x20 glimpse start path/to/project\n\
        \x20 glimpse start --offline            # resolve dependencies from the local cache\n\
        \x20 glimpse clean                      # remove the preview scaffold",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start a widget preview session.
    #[command(
        about = "Start a widget preview session",
        after_help = "EXAMPLES:\n\
            \x20 glimpse start\n\
            \x20 glimpse start path/to/project\n\
            \x20 glimpse start --no-pub --no-launch   # regenerate the scaffold only"
    )]
    Start(StartArgs),

    /// Remove the preview scaffold.
    #[command(
        about = "Remove the preview scaffold",
        after_help = "EXAMPLES:\n\
            \x20 glimpse clean\n\
            \x20 glimpse clean path/to/project"
    )]
    Clean(CleanArgs),
}

// ── start ─────────────────────────────────────────────────────────────────────

/// Arguments for `glimpse start`.
#[derive(Debug, Args)]
pub struct StartArgs {
    /// Project directory. Defaults to the current directory.
    ///
    /// Declared repeatable so that surplus paths reach the resolver, which
    /// rejects them with the canonical message.
    #[arg(value_name = "PROJECT_PATH", num_args = 0..)]
    pub paths: Vec<PathBuf>,

    /// Resolve scaffold dependencies after generation (the default).
    #[arg(long = "pub", overrides_with = "no_pub", help = "Run pub get on the scaffold")]
    pub pub_get: bool,

    /// Skip dependency resolution.
    #[arg(long = "no-pub", help = "Skip pub get on the scaffold")]
    pub no_pub: bool,

    /// Resolve dependencies without hitting the network.
    #[arg(long = "offline", help = "Pass --offline to the package manager")]
    pub offline: bool,

    /// Run the pipeline and exit without launching the preview runtime.
    #[arg(long = "no-launch", help = "Generate the scaffold and exit")]
    pub no_launch: bool,
}

impl StartArgs {
    /// Resolution is on unless explicitly disabled.
    pub fn resolve_dependencies(&self) -> bool {
        !self.no_pub
    }
}

// ── clean ─────────────────────────────────────────────────────────────────────

/// Arguments for `glimpse clean`.
#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Project directory. Defaults to the current directory.
    #[arg(value_name = "PROJECT_PATH", num_args = 0..)]
    pub paths: Vec<PathBuf>,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_bare_start() {
        let cli = Cli::parse_from(["glimpse", "start"]);
        match cli.command {
            Commands::Start(args) => {
                assert!(args.paths.is_empty());
                assert!(args.resolve_dependencies());
                assert!(!args.offline);
                assert!(!args.no_launch);
            }
            _ => panic!("expected Start"),
        }
    }

    #[test]
    fn parse_start_with_path() {
        let cli = Cli::parse_from(["glimpse", "start", "my/project"]);
        match cli.command {
            Commands::Start(args) => {
                assert_eq!(args.paths, vec![PathBuf::from("my/project")]);
            }
            _ => panic!("expected Start"),
        }
    }

    #[test]
    fn surplus_paths_are_accepted_by_clap() {
        // Rejection is the resolver's job so its message is authoritative.
        let cli = Cli::parse_from(["glimpse", "start", "a", "b"]);
        match cli.command {
            Commands::Start(args) => assert_eq!(args.paths.len(), 2),
            _ => panic!("expected Start"),
        }
    }

    #[test]
    fn no_pub_disables_resolution() {
        let cli = Cli::parse_from(["glimpse", "start", "--no-pub"]);
        match cli.command {
            Commands::Start(args) => assert!(!args.resolve_dependencies()),
            _ => panic!("expected Start"),
        }
    }

    #[test]
    fn explicit_pub_keeps_resolution_on() {
        let cli = Cli::parse_from(["glimpse", "start", "--pub"]);
        match cli.command {
            Commands::Start(args) => assert!(args.resolve_dependencies()),
            _ => panic!("expected Start"),
        }
    }

    #[test]
    fn offline_flag_parses() {
        let cli = Cli::parse_from(["glimpse", "start", "--offline"]);
        match cli.command {
            Commands::Start(args) => assert!(args.offline),
            _ => panic!("expected Start"),
        }
    }

    #[test]
    fn parse_clean_with_path() {
        let cli = Cli::parse_from(["glimpse", "clean", "proj"]);
        match cli.command {
            Commands::Clean(args) => assert_eq!(args.paths, vec![PathBuf::from("proj")]),
            _ => panic!("expected Clean"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["glimpse", "--quiet", "--verbose", "start"]);
        assert!(result.is_err());
    }
}
