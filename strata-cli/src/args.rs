//! Argument parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "strata",
    version,
    about = "Architecture boundary gate for layered module graphs"
)]
pub struct Cli {
    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable ANSI colors in console output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full gate sequence: configure, compile, test, coverage,
    /// boundaries, package
    Build {
        /// Path to the module manifest
        #[arg(long, default_value = "strata.toml")]
        manifest: PathBuf,

        /// Per-module coverage report (JSON) produced by the test run
        #[arg(long)]
        coverage_report: Option<PathBuf>,

        /// Output format: console, json, or github
        #[arg(long, default_value = "console")]
        format: String,

        /// Check transitive reachability, not just direct edges
        #[arg(long)]
        transitive: bool,

        /// Skip configured compile/test/package hooks
        #[arg(long)]
        skip_hooks: bool,
    },

    /// Validate layering boundaries only, for fast feedback
    VerifyBoundaries {
        /// Path to the module manifest
        #[arg(long, default_value = "strata.toml")]
        manifest: PathBuf,

        /// Output format: console, json, or github
        #[arg(long, default_value = "console")]
        format: String,

        /// Check transitive reachability, not just direct edges
        #[arg(long)]
        transitive: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn build_defaults() {
        let cli = Cli::parse_from(["strata", "build"]);
        match cli.command {
            Command::Build {
                manifest, format, ..
            } => {
                assert_eq!(manifest, PathBuf::from("strata.toml"));
                assert_eq!(format, "console");
            }
            _ => panic!("expected build subcommand"),
        }
    }
}
