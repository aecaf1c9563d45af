//! Subcommand implementations. Thin: argument plumbing, exit-code mapping,
//! and report printing; all analysis lives in `strata-analysis`.

use std::path::Path;

use strata_analysis::gates::{BoundariesGate, GateInput, GateOrchestrator};
use strata_analysis::graph::GraphBuilder;
use strata_analysis::pipeline::{PipelineReport, PipelineRunner, Stage, StageOutcome};
use strata_analysis::reporters::{available_formats, create_reporter, Reporter};
use strata_core::config::{CliOverrides, StrataConfig};
use strata_core::errors::StrataErrorCode;
use strata_core::manifest::Manifest;

/// Exit code for a clean run.
pub const EXIT_OK: i32 = 0;
/// Exit code for gate or stage failures.
pub const EXIT_VIOLATIONS: i32 = 1;
/// Exit code for configuration, manifest, or usage errors.
pub const EXIT_USAGE: i32 = 2;

pub struct BuildArgs<'a> {
    pub manifest: &'a Path,
    pub coverage_report: Option<&'a Path>,
    pub format: &'a str,
    pub transitive: bool,
    pub skip_hooks: bool,
    pub use_color: bool,
}

pub fn run_build(args: &BuildArgs<'_>) -> i32 {
    tracing::info!(
        manifest = %args.manifest.display(),
        format = args.format,
        "running build pipeline"
    );
    let Some(reporter) = reporter_for(args.format, args.use_color) else {
        return EXIT_USAGE;
    };

    let overrides = CliOverrides {
        transitive: args.transitive.then_some(true),
        skip_hooks: args.skip_hooks.then_some(true),
    };
    let config = match StrataConfig::load(args.manifest, Some(&overrides)) {
        Ok(config) => config,
        Err(e) => return fatal(&e),
    };

    let runner = PipelineRunner::new(config);
    match runner.run(args.manifest, args.coverage_report) {
        Ok(report) => {
            print!("{}", reporter.generate(&report));
            if report.passed {
                EXIT_OK
            } else {
                EXIT_VIOLATIONS
            }
        }
        Err(e) => fatal(&e),
    }
}

pub struct VerifyArgs<'a> {
    pub manifest: &'a Path,
    pub format: &'a str,
    pub transitive: bool,
    pub use_color: bool,
}

pub fn run_verify(args: &VerifyArgs<'_>) -> i32 {
    tracing::info!(
        manifest = %args.manifest.display(),
        transitive = args.transitive,
        "verifying boundaries"
    );
    let Some(reporter) = reporter_for(args.format, args.use_color) else {
        return EXIT_USAGE;
    };

    let overrides = CliOverrides {
        transitive: args.transitive.then_some(true),
        skip_hooks: None,
    };
    let config = match StrataConfig::load(args.manifest, Some(&overrides)) {
        Ok(config) => config,
        Err(e) => return fatal(&e),
    };
    let manifest = match Manifest::load(args.manifest) {
        Ok(manifest) => manifest,
        Err(e) => return fatal(&e),
    };
    let graph = match GraphBuilder::build(&manifest) {
        Ok(graph) => graph,
        Err(e) => return fatal(&e),
    };

    let orchestrator = GateOrchestrator::with_gates(vec![Box::new(BoundariesGate)]);
    let input = GateInput {
        graph: &graph,
        config: &config,
        coverage: None,
    };
    let results = match orchestrator.execute(&input) {
        Ok(results) => results,
        Err(e) => return fatal(&e),
    };

    let failed = results.iter().any(|r| r.is_blocking());
    let detail = results
        .iter()
        .map(|r| format!("{}: {}", r.gate_id, r.summary))
        .collect::<Vec<_>>()
        .join("; ");
    let outcome = if failed {
        StageOutcome::failed(Stage::BoundaryVerify, detail)
    } else {
        StageOutcome::passed(Stage::BoundaryVerify, detail)
    }
    .with_gates(results);

    let report = PipelineReport {
        outcomes: vec![outcome],
        passed: !failed,
        halted_at: failed.then_some(Stage::BoundaryVerify),
    };
    print!("{}", reporter.generate(&report));
    if failed {
        EXIT_VIOLATIONS
    } else {
        EXIT_OK
    }
}

fn reporter_for(format: &str, use_color: bool) -> Option<Box<dyn Reporter>> {
    let reporter = create_reporter(format, use_color);
    if reporter.is_none() {
        eprintln!(
            "unknown format {format:?}; available: {}",
            available_formats().join(", ")
        );
    }
    reporter
}

fn fatal<E: std::error::Error + StrataErrorCode>(error: &E) -> i32 {
    tracing::error!(code = error.error_code(), "fatal: {error}");
    eprintln!("error[{}]: {error}", error.error_code());
    EXIT_USAGE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn manifest_on_disk(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strata.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    fn verify_args(manifest: &std::path::Path) -> VerifyArgs<'_> {
        VerifyArgs {
            manifest,
            format: "console",
            transitive: false,
            use_color: false,
        }
    }

    #[test]
    fn verify_exits_clean_on_a_clean_manifest() {
        let (_dir, path) = manifest_on_disk(
            r#"
            [[module]]
            name = "domain"
            role = "domain"

            [[module]]
            name = "application"
            role = "application"
            dependencies = ["domain"]
            "#,
        );
        assert_eq!(run_verify(&verify_args(&path)), EXIT_OK);
    }

    #[test]
    fn verify_exits_nonzero_on_a_boundary_violation() {
        let (_dir, path) = manifest_on_disk(
            r#"
            [[module]]
            name = "persistence"
            role = "adapter-out"

            [[module]]
            name = "application"
            role = "application"
            dependencies = ["persistence"]
            "#,
        );
        assert_eq!(run_verify(&verify_args(&path)), EXIT_VIOLATIONS);
    }

    #[test]
    fn missing_manifest_is_a_usage_error() {
        let path = Path::new("/nonexistent/strata.toml");
        assert_eq!(run_verify(&verify_args(path)), EXIT_USAGE);
    }

    #[test]
    fn unknown_format_is_a_usage_error() {
        let (_dir, path) = manifest_on_disk(
            r#"
            [[module]]
            name = "domain"
            role = "domain"
            "#,
        );
        let code = run_build(&BuildArgs {
            manifest: &path,
            coverage_report: None,
            format: "yaml",
            transitive: false,
            skip_hooks: false,
            use_color: false,
        });
        assert_eq!(code, EXIT_USAGE);
    }
}
