//! Pipeline stages and typed stage results.

use serde::Serialize;

use crate::gates::{GateResult, Severity};

/// The fixed stage sequence of a `build` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Configure,
    Compile,
    Test,
    CoverageVerify,
    BoundaryVerify,
    Package,
}

impl Stage {
    pub fn sequence() -> &'static [Stage] {
        &[
            Stage::Configure,
            Stage::Compile,
            Stage::Test,
            Stage::CoverageVerify,
            Stage::BoundaryVerify,
            Stage::Package,
        ]
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Configure => "configure",
            Stage::Compile => "compile",
            Stage::Test => "test",
            Stage::CoverageVerify => "coverage-verify",
            Stage::BoundaryVerify => "boundary-verify",
            Stage::Package => "package",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageStatus {
    Passed,
    Failed,
    Skipped,
}

/// Typed result of one stage — success or failure-with-reason, never an
/// exception across stage boundaries.
#[derive(Debug, Clone, Serialize)]
pub struct StageOutcome {
    pub stage: Stage,
    pub status: StageStatus,
    pub detail: String,
    pub gate_results: Vec<GateResult>,
    pub duration_ms: u64,
}

impl StageOutcome {
    pub fn passed(stage: Stage, detail: String) -> Self {
        Self {
            stage,
            status: StageStatus::Passed,
            detail,
            gate_results: Vec::new(),
            duration_ms: 0,
        }
    }

    pub fn failed(stage: Stage, detail: String) -> Self {
        Self {
            stage,
            status: StageStatus::Failed,
            detail,
            gate_results: Vec::new(),
            duration_ms: 0,
        }
    }

    pub fn skipped(stage: Stage, detail: String) -> Self {
        Self {
            stage,
            status: StageStatus::Skipped,
            detail,
            gate_results: Vec::new(),
            duration_ms: 0,
        }
    }

    pub fn with_gates(mut self, gates: Vec<GateResult>) -> Self {
        self.gate_results = gates;
        self
    }
}

/// The full run record, consumed by reporters and the CLI exit-code
/// mapping.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub outcomes: Vec<StageOutcome>,
    pub passed: bool,
    pub halted_at: Option<Stage>,
}

impl PipelineReport {
    pub fn outcome(&self, stage: Stage) -> Option<&StageOutcome> {
        self.outcomes.iter().find(|o| o.stage == stage)
    }

    /// Total blocking violations across all gate results. Advisory
    /// (warning-severity) findings are not counted.
    pub fn violation_count(&self) -> usize {
        self.outcomes
            .iter()
            .flat_map(|o| &o.gate_results)
            .flat_map(|g| &g.violations)
            .filter(|v| v.severity == Severity::Error)
            .count()
    }
}
