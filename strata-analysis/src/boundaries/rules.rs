//! Forbidden-edge rule table.

use serde::Serialize;

use strata_core::manifest::ModuleRole;

/// An ordered role pair that must never appear as a dependency edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForbiddenEdgeRule {
    pub from: ModuleRole,
    pub to: ModuleRole,
}

impl std::fmt::Display for ForbiddenEdgeRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// The rule table the validator scans edges against. Small and fixed for
/// a build invocation, so the scan is O(edges).
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<ForbiddenEdgeRule>,
}

impl RuleTable {
    /// The hexagonal layering table, derived from each role's permitted
    /// targets: every role pair outside a permitted set is forbidden.
    pub fn layered() -> Self {
        let mut rules = Vec::new();
        for &from in ModuleRole::all() {
            for &to in ModuleRole::all() {
                if !from.permits(to) {
                    rules.push(ForbiddenEdgeRule { from, to });
                }
            }
        }
        Self { rules }
    }

    /// A custom table (for tests and future policy extensions).
    pub fn with_rules(rules: Vec<ForbiddenEdgeRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ForbiddenEdgeRule] {
        &self.rules
    }

    /// The rule forbidding `from -> to`, if any.
    pub fn forbids(&self, from: ModuleRole, to: ModuleRole) -> Option<&ForbiddenEdgeRule> {
        self.rules.iter().find(|r| r.from == from && r.to == to)
    }
}
