mod args;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::{Cli, Command};
use commands::{run_build, run_verify, BuildArgs, VerifyArgs};

fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);
    let use_color = !cli.no_color;

    let code = match &cli.command {
        Command::Build {
            manifest,
            coverage_report,
            format,
            transitive,
            skip_hooks,
        } => run_build(&BuildArgs {
            manifest,
            coverage_report: coverage_report.as_deref(),
            format,
            transitive: *transitive,
            skip_hooks: *skip_hooks,
            use_color,
        }),
        Command::VerifyBoundaries {
            manifest,
            format,
            transitive,
        } => run_verify(&VerifyArgs {
            manifest,
            format,
            transitive: *transitive,
            use_color,
        }),
    };

    std::process::exit(code);
}
