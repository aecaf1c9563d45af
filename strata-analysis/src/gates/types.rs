//! Gate trait and result types.

use serde::Serialize;

use strata_core::config::StrataConfig;

use crate::coverage::CoverageReport;
use crate::graph::ModuleGraph;

/// Identifier for each built-in gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GateId {
    DependencyPolicy,
    Boundaries,
    Coverage,
}

impl std::fmt::Display for GateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GateId::DependencyPolicy => "dependency-policy",
            GateId::Boundaries => "boundaries",
            GateId::Coverage => "coverage",
        };
        f.write_str(name)
    }
}

/// Outcome status of a gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GateStatus {
    Passed,
    Failed,
    Warned,
    Skipped,
}

/// Error findings block the stage; warning findings are advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One actionable finding.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    /// Stable rule identifier, e.g. `boundary/application-adapter-out`.
    pub rule_id: String,
    /// Module the finding is attributed to.
    pub module: String,
    pub severity: Severity,
    pub message: String,
}

/// Result of evaluating one gate.
#[derive(Debug, Clone, Serialize)]
pub struct GateResult {
    pub gate_id: GateId,
    pub status: GateStatus,
    pub passed: bool,
    /// 0.0..=100.0, higher is healthier.
    pub score: f64,
    pub summary: String,
    pub violations: Vec<Violation>,
    pub execution_time_ms: u64,
}

impl GateResult {
    pub fn pass(gate_id: GateId, score: f64, summary: String) -> Self {
        Self {
            gate_id,
            status: GateStatus::Passed,
            passed: true,
            score,
            summary,
            violations: Vec::new(),
            execution_time_ms: 0,
        }
    }

    pub fn fail(
        gate_id: GateId,
        score: f64,
        summary: String,
        violations: Vec<Violation>,
    ) -> Self {
        Self {
            gate_id,
            status: GateStatus::Failed,
            passed: false,
            score,
            summary,
            violations,
            execution_time_ms: 0,
        }
    }

    /// Advisory findings only: the gate still counts as passed.
    pub fn warn(
        gate_id: GateId,
        score: f64,
        summary: String,
        violations: Vec<Violation>,
    ) -> Self {
        Self {
            gate_id,
            status: GateStatus::Warned,
            passed: true,
            score,
            summary,
            violations,
            execution_time_ms: 0,
        }
    }

    pub fn skipped(gate_id: GateId, summary: String) -> Self {
        Self {
            gate_id,
            status: GateStatus::Skipped,
            passed: false,
            score: 0.0,
            summary,
            violations: Vec::new(),
            execution_time_ms: 0,
        }
    }

    /// Skipped gates don't fail a stage; failed ones do.
    pub fn is_blocking(&self) -> bool {
        self.status == GateStatus::Failed
    }
}

/// Read-only input shared by all gates. The graph is constructed once per
/// build and never mutated afterwards, so sharing references is safe.
#[derive(Clone, Copy)]
pub struct GateInput<'a> {
    pub graph: &'a ModuleGraph,
    pub config: &'a StrataConfig,
    pub coverage: Option<&'a CoverageReport>,
}

/// A quality gate: a named, self-describing check over the gate input.
pub trait QualityGate {
    fn id(&self) -> GateId;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;

    /// Gates that must have passed before this one is meaningful.
    fn dependencies(&self) -> Vec<GateId> {
        Vec::new()
    }

    fn evaluate(&self, input: &GateInput<'_>) -> GateResult;
}
