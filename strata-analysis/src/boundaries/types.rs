//! Boundary violation record.

use serde::Serialize;

use strata_core::manifest::ModuleRole;

use super::rules::ForbiddenEdgeRule;
use crate::graph::DependencyEdge;

/// A dependency edge that matched a forbidden-pair rule. Carries the
/// offending edge, the rule, and what the source role is permitted to
/// depend on, so the report can be actionable.
#[derive(Debug, Clone, Serialize)]
pub struct BoundaryViolation {
    pub edge: DependencyEdge,
    pub rule: ForbiddenEdgeRule,
    pub permitted: Vec<ModuleRole>,
    /// True when the edge was found via reachability rather than a direct
    /// declaration (transitive mode only).
    pub transitive: bool,
}

impl std::fmt::Display for BoundaryViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let permitted = if self.permitted.is_empty() {
            "nothing".to_string()
        } else {
            self.permitted
                .iter()
                .map(|r| r.tag())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let kind = if self.transitive { "transitively " } else { "" };
        write!(
            f,
            "{}: {} module {}depends on {} module (permitted dependencies: {})",
            self.edge, self.rule.from, kind, self.rule.to, permitted
        )
    }
}
