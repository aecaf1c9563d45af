//! Gate 1: Dependency Policy — are banned third-party dependencies absent?

use super::types::*;

/// Checks every module's external dependency set against the configured
/// banned coordinate list.
pub struct DependencyPolicyGate;

impl QualityGate for DependencyPolicyGate {
    fn id(&self) -> GateId {
        GateId::DependencyPolicy
    }

    fn name(&self) -> &'static str {
        "Dependency Policy"
    }

    fn description(&self) -> &'static str {
        "Verifies that no module declares a banned third-party dependency"
    }

    fn evaluate(&self, input: &GateInput<'_>) -> GateResult {
        let policy = &input.config.policy;
        let mut violations = Vec::new();
        let mut external_count = 0usize;

        for module in input.graph.modules() {
            for external in &module.externals {
                external_count += 1;
                if let Some(entry) = policy.is_banned(external) {
                    violations.push(Violation {
                        rule_id: "policy/banned-dependency".to_string(),
                        module: module.name.clone(),
                        severity: Severity::Error,
                        message: format!(
                            "disallowed dependency {external} (banned entry: {entry}); \
                             remove it from module {}",
                            module.name
                        ),
                    });
                }
            }
        }

        let score = if external_count == 0 {
            100.0
        } else {
            let clean = external_count - violations.len();
            (clean as f64 / external_count as f64) * 100.0
        };

        if violations.is_empty() {
            GateResult::pass(
                GateId::DependencyPolicy,
                100.0,
                "No banned dependencies".to_string(),
            )
        } else {
            GateResult::fail(
                GateId::DependencyPolicy,
                score,
                format!("{} banned dependency declaration(s)", violations.len()),
                violations,
            )
        }
    }
}
