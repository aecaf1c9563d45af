//! Boundary validator — linear scan of the edge set against the rule table.

use strata_core::errors::BoundaryError;

use super::rules::RuleTable;
use super::types::BoundaryViolation;
use crate::graph::{DependencyEdge, ModuleGraph, Visibility};

pub struct BoundaryValidator {
    table: RuleTable,
    transitive: bool,
}

impl BoundaryValidator {
    pub fn new(table: RuleTable, transitive: bool) -> Self {
        Self { table, transitive }
    }

    /// The standard layered validator over direct edges.
    pub fn layered() -> Self {
        Self::new(RuleTable::layered(), false)
    }

    /// Scan every edge and collect all violations in one pass.
    /// Violations come back in edge-declaration order; transitive findings
    /// (if enabled) follow the direct ones.
    pub fn validate(&self, graph: &ModuleGraph) -> Vec<BoundaryViolation> {
        let mut violations: Vec<BoundaryViolation> = graph
            .edges()
            .iter()
            .filter_map(|edge| self.check_edge(edge, false))
            .collect();

        if self.transitive {
            violations.extend(self.scan_reachability(graph));
        }

        for violation in &violations {
            tracing::error!(%violation, "boundary violation");
        }
        violations
    }

    /// Validate and fail closed: any violation is fatal.
    pub fn verify(&self, graph: &ModuleGraph) -> Result<(), BoundaryError> {
        let violations = self.validate(graph);
        match violations.first() {
            None => Ok(()),
            Some(first) => Err(BoundaryError::Violations {
                count: violations.len(),
                first: first.to_string(),
            }),
        }
    }

    fn check_edge(&self, edge: &DependencyEdge, transitive: bool) -> Option<BoundaryViolation> {
        self.table
            .forbids(edge.from_role, edge.to_role)
            .map(|rule| BoundaryViolation {
                edge: edge.clone(),
                rule: *rule,
                permitted: edge.from_role.permitted_targets().to_vec(),
                transitive,
            })
    }

    /// Check reachability pairs that are not direct edges. With the
    /// built-in layered table this finds nothing new (the permitted sets
    /// are transitively closed), but custom tables may differ.
    fn scan_reachability(&self, graph: &ModuleGraph) -> Vec<BoundaryViolation> {
        let mut extra = Vec::new();
        let mut order = graph.edge_count();
        for module in graph.modules() {
            let direct: Vec<&str> = graph
                .dependencies_of(&module.name)
                .iter()
                .map(|m| m.name.as_str())
                .collect();
            for target in graph.reachable_from(&module.name) {
                if direct.contains(&target.name.as_str()) {
                    continue;
                }
                let edge = DependencyEdge {
                    from: module.name.clone(),
                    to: target.name.clone(),
                    from_role: module.role,
                    to_role: target.role,
                    visibility: Visibility::Private,
                    order,
                };
                order += 1;
                if let Some(violation) = self.check_edge(&edge, true) {
                    extra.push(violation);
                }
            }
        }
        extra
    }
}
