//! Quality gates — the hard checks a build must clear before packaging.

pub mod boundary_gate;
pub mod coverage_gate;
pub mod dependency_policy;
pub mod orchestrator;
pub mod types;

pub use boundary_gate::BoundariesGate;
pub use coverage_gate::CoverageGate;
pub use dependency_policy::DependencyPolicyGate;
pub use orchestrator::GateOrchestrator;
pub use types::{GateId, GateInput, GateResult, GateStatus, QualityGate, Severity, Violation};
