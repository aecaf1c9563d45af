//! Pipeline runner.

use std::path::Path;
use std::time::Instant;

use strata_core::config::StrataConfig;
use strata_core::errors::PipelineError;
use strata_core::manifest::Manifest;

use super::hooks::run_hook;
use super::stage::{PipelineReport, Stage, StageOutcome, StageStatus};
use crate::coverage::CoverageReport;
use crate::gates::{
    BoundariesGate, CoverageGate, DependencyPolicyGate, GateInput, GateOrchestrator,
    QualityGate,
};
use crate::graph::GraphBuilder;

/// Drives the fixed stage sequence over one manifest.
///
/// Unrecoverable input problems (unreadable manifest, unresolved module,
/// cyclic graph, unparseable coverage report) surface as `Err` — the run
/// never started in a meaningful sense. Gate and hook failures come back
/// as a report with `passed == false` and a `halted_at` stage.
pub struct PipelineRunner {
    config: StrataConfig,
}

impl PipelineRunner {
    pub fn new(config: StrataConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StrataConfig {
        &self.config
    }

    /// Run the full gate sequence.
    pub fn run(
        &self,
        manifest_path: &Path,
        coverage_path: Option<&Path>,
    ) -> Result<PipelineReport, PipelineError> {
        let mut outcomes = Vec::new();

        // Configure: manifest + graph. Failure here aborts immediately,
        // before any validation phase.
        let start = Instant::now();
        let manifest = Manifest::load(manifest_path)?;
        let graph = GraphBuilder::build(&manifest)?;
        let mut outcome = StageOutcome::passed(
            Stage::Configure,
            format!(
                "{} module(s), {} edge(s)",
                graph.module_count(),
                graph.edge_count()
            ),
        );
        outcome.duration_ms = start.elapsed().as_millis() as u64;
        outcomes.push(outcome);

        let coverage = match coverage_path {
            Some(path) => Some(CoverageReport::load(path)?),
            None => None,
        };
        let input = GateInput {
            graph: &graph,
            config: &self.config,
            coverage: coverage.as_ref(),
        };

        for &stage in &Stage::sequence()[1..] {
            let start = Instant::now();
            let mut outcome = match stage {
                Stage::Configure => unreachable!("configure already ran"),
                Stage::Compile => self.hook_stage(stage, self.config.pipeline.compile.as_deref()),
                Stage::Test => self.hook_stage(stage, self.config.pipeline.test.as_deref()),
                Stage::CoverageVerify => {
                    self.gate_stage(stage, vec![Box::new(CoverageGate)], &input)?
                }
                Stage::BoundaryVerify => self.gate_stage(
                    stage,
                    vec![Box::new(DependencyPolicyGate), Box::new(BoundariesGate)],
                    &input,
                )?,
                Stage::Package => self.hook_stage(stage, self.config.pipeline.package.as_deref()),
            };
            outcome.duration_ms = start.elapsed().as_millis() as u64;

            let failed = outcome.status == StageStatus::Failed;
            tracing::info!(%stage, status = ?outcome.status, "stage finished");
            outcomes.push(outcome);

            if failed {
                return Ok(Self::halt(outcomes, stage));
            }
        }

        Ok(PipelineReport {
            outcomes,
            passed: true,
            halted_at: None,
        })
    }

    fn hook_stage(&self, stage: Stage, command: Option<&str>) -> StageOutcome {
        match command {
            None => StageOutcome::skipped(stage, "no hook configured".to_string()),
            Some(_) if self.config.pipeline.skip_hooks() => {
                StageOutcome::skipped(stage, "hooks disabled".to_string())
            }
            Some(command) => match run_hook(stage, command) {
                Ok(()) => StageOutcome::passed(stage, command.to_string()),
                Err(e) => StageOutcome::failed(stage, e.to_string()),
            },
        }
    }

    fn gate_stage(
        &self,
        stage: Stage,
        gates: Vec<Box<dyn QualityGate>>,
        input: &GateInput<'_>,
    ) -> Result<StageOutcome, PipelineError> {
        let orchestrator = GateOrchestrator::with_gates(gates);
        let results = orchestrator.execute(input)?;

        let blocking: Vec<&str> = results
            .iter()
            .filter(|r| r.is_blocking())
            .map(|r| r.summary.as_str())
            .collect();

        let outcome = if blocking.is_empty() {
            let detail = results
                .iter()
                .map(|r| format!("{}: {}", r.gate_id, r.summary))
                .collect::<Vec<_>>()
                .join("; ");
            StageOutcome::passed(stage, detail)
        } else {
            StageOutcome::failed(stage, blocking.join("; "))
        };
        Ok(outcome.with_gates(results))
    }

    /// Fail-fast: mark the remaining stages skipped and close the report.
    fn halt(mut outcomes: Vec<StageOutcome>, stage: Stage) -> PipelineReport {
        let completed = outcomes.len();
        for &remaining in &Stage::sequence()[completed..] {
            outcomes.push(StageOutcome::skipped(
                remaining,
                format!("pipeline halted at {stage}"),
            ));
        }
        tracing::error!(%stage, "pipeline halted");
        PipelineReport {
            outcomes,
            passed: false,
            halted_at: Some(stage),
        }
    }
}
