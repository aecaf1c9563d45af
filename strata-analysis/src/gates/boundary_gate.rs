//! Gate 2: Boundaries — does every edge respect the layering direction?

use super::types::*;
use crate::boundaries::{BoundaryValidator, RuleTable};

/// Wraps the boundary validator. Depends on the dependency policy gate:
/// a dependency set that already breaks policy makes edge analysis noise.
pub struct BoundariesGate;

impl QualityGate for BoundariesGate {
    fn id(&self) -> GateId {
        GateId::Boundaries
    }

    fn name(&self) -> &'static str {
        "Architecture Boundaries"
    }

    fn description(&self) -> &'static str {
        "Verifies that module dependencies follow the one-directional layering"
    }

    fn dependencies(&self) -> Vec<GateId> {
        vec![GateId::DependencyPolicy]
    }

    fn evaluate(&self, input: &GateInput<'_>) -> GateResult {
        let validator = BoundaryValidator::new(
            RuleTable::layered(),
            input.config.policy.transitive(),
        );
        let boundary_violations = validator.validate(input.graph);

        let violations: Vec<Violation> = boundary_violations
            .iter()
            .map(|v| Violation {
                rule_id: format!("boundary/{}-to-{}", v.rule.from, v.rule.to),
                module: v.edge.from.clone(),
                severity: Severity::Error,
                message: v.to_string(),
            })
            .collect();

        let edge_count = input.graph.edge_count();
        let score = if edge_count == 0 {
            100.0
        } else {
            let clean = edge_count.saturating_sub(violations.len());
            (clean as f64 / edge_count as f64) * 100.0
        };

        if violations.is_empty() {
            GateResult::pass(
                GateId::Boundaries,
                100.0,
                format!("{edge_count} edge(s), all within layering rules"),
            )
        } else {
            GateResult::fail(
                GateId::Boundaries,
                score,
                format!("{} boundary violation(s)", violations.len()),
                violations,
            )
        }
    }
}
