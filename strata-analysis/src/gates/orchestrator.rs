//! Gate orchestrator — topological sort execution.

use std::collections::{HashMap, VecDeque};

use strata_core::errors::GateError;

use super::types::*;

/// Executes gates in dependency order. A gate whose prerequisite failed is
/// skipped, not evaluated; a prerequisite that is not registered at all is
/// treated as satisfied so subsets of gates can run in isolation
/// (`verify-boundaries`).
pub struct GateOrchestrator {
    gates: Vec<Box<dyn QualityGate>>,
}

impl GateOrchestrator {
    /// Orchestrator with all three default gates.
    pub fn new() -> Self {
        Self::with_gates(vec![
            Box::new(super::DependencyPolicyGate),
            Box::new(super::BoundariesGate),
            Box::new(super::CoverageGate),
        ])
    }

    /// Orchestrator with custom gates.
    pub fn with_gates(gates: Vec<Box<dyn QualityGate>>) -> Self {
        Self { gates }
    }

    /// Execute all gates in dependency order, returning results in that
    /// order.
    pub fn execute(&self, input: &GateInput<'_>) -> Result<Vec<GateResult>, GateError> {
        let order = self.topological_sort()?;
        let mut results: HashMap<GateId, GateResult> = HashMap::new();
        let mut output = Vec::new();

        for gate_id in &order {
            let gate = match self.gates.iter().find(|g| g.id() == *gate_id) {
                Some(g) => g,
                None => continue,
            };

            let registered = |dep: &GateId| self.gates.iter().any(|g| g.id() == *dep);
            let failed_deps: Vec<String> = gate
                .dependencies()
                .iter()
                .filter(|dep| {
                    registered(dep) && !results.get(dep).is_some_and(|r| !r.is_blocking())
                })
                .map(|d| d.to_string())
                .collect();

            let result = if !failed_deps.is_empty() {
                GateResult::skipped(
                    *gate_id,
                    format!("Skipped: dependencies not met ({})", failed_deps.join(", ")),
                )
            } else {
                let start = std::time::Instant::now();
                let mut result = gate.evaluate(input);
                result.execution_time_ms = start.elapsed().as_millis() as u64;
                tracing::debug!(
                    gate = %gate_id,
                    status = ?result.status,
                    score = result.score,
                    elapsed_ms = result.execution_time_ms,
                    "gate evaluated"
                );
                result
            };

            results.insert(*gate_id, result.clone());
            output.push(result);
        }

        Ok(output)
    }

    /// Kahn's algorithm over gate dependencies.
    fn topological_sort(&self) -> Result<Vec<GateId>, GateError> {
        let mut in_degree: HashMap<GateId, usize> = HashMap::new();
        let mut adj: HashMap<GateId, Vec<GateId>> = HashMap::new();

        for gate in &self.gates {
            in_degree.entry(gate.id()).or_insert(0);
            adj.entry(gate.id()).or_default();
        }

        for gate in &self.gates {
            for dep in gate.dependencies() {
                if !adj.contains_key(&dep) {
                    continue; // unregistered prerequisite, nothing to order
                }
                adj.entry(dep).or_default().push(gate.id());
                *in_degree.entry(gate.id()).or_insert(0) += 1;
            }
        }

        let mut queue: VecDeque<GateId> = self
            .gates
            .iter()
            .map(|g| g.id())
            .filter(|id| in_degree[id] == 0)
            .collect();

        let mut sorted = Vec::new();
        while let Some(node) = queue.pop_front() {
            sorted.push(node);
            if let Some(neighbors) = adj.get(&node) {
                for &neighbor in neighbors {
                    if let Some(deg) = in_degree.get_mut(&neighbor) {
                        *deg -= 1;
                        if *deg == 0 {
                            queue.push_back(neighbor);
                        }
                    }
                }
            }
        }

        if sorted.len() != self.gates.len() {
            return Err(GateError::CircularGateDependencies);
        }

        Ok(sorted)
    }

    /// Detect circular gate dependencies without executing.
    pub fn validate_dependencies(&self) -> Result<(), GateError> {
        self.topological_sort().map(|_| ())
    }
}

impl Default for GateOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
