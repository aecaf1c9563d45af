//! Gate 3: Coverage — is every thresholded module covered enough?

use super::types::*;

/// Compares measured per-module line coverage against the configured
/// minimums. The gate compares, it does not measure: without a report it
/// reports Skipped. With a report, a thresholded module missing from it
/// fails closed.
pub struct CoverageGate;

impl QualityGate for CoverageGate {
    fn id(&self) -> GateId {
        GateId::Coverage
    }

    fn name(&self) -> &'static str {
        "Test Coverage"
    }

    fn description(&self) -> &'static str {
        "Verifies per-module line coverage against role thresholds"
    }

    fn evaluate(&self, input: &GateInput<'_>) -> GateResult {
        let Some(report) = input.coverage else {
            return GateResult::skipped(
                GateId::Coverage,
                "No coverage report supplied".to_string(),
            );
        };

        let mut violations = Vec::new();
        let mut checked = 0usize;
        let mut coverage_sum = 0.0f64;

        for module in input.graph.modules() {
            let required = module
                .coverage_override
                .or_else(|| input.config.coverage.threshold_for(module.role));
            let Some(required) = required else {
                continue; // role is exempt
            };
            checked += 1;

            match report.line(&module.name) {
                None => violations.push(Violation {
                    rule_id: "coverage/missing-data".to_string(),
                    module: module.name.clone(),
                    severity: Severity::Error,
                    message: format!(
                        "no coverage data for module {} (required {:.2})",
                        module.name, required
                    ),
                }),
                Some(actual) => {
                    coverage_sum += actual;
                    if actual < required {
                        violations.push(Violation {
                            rule_id: "coverage/below-threshold".to_string(),
                            module: module.name.clone(),
                            severity: Severity::Error,
                            message: format!(
                                "coverage for {} below threshold: required {:.2}, actual {:.2}",
                                module.name, required, actual
                            ),
                        });
                    }
                }
            }
        }

        // Report entries naming no declared module are advisory: usually a
        // renamed or deleted module left behind in stale instrumentation.
        let mut stale: Vec<Violation> = report
            .modules
            .keys()
            .filter(|name| input.graph.module(name).is_none())
            .map(|name| Violation {
                rule_id: "coverage/stale-entry".to_string(),
                module: name.clone(),
                severity: Severity::Warning,
                message: format!("report entry {name} does not match any declared module"),
            })
            .collect();
        stale.sort_by(|a, b| a.module.cmp(&b.module));

        let score = if checked == 0 {
            100.0
        } else {
            (coverage_sum / checked as f64) * 100.0
        };

        if !violations.is_empty() {
            let summary = format!("{} coverage shortfall(s)", violations.len());
            violations.extend(stale);
            GateResult::fail(GateId::Coverage, score, summary, violations)
        } else if !stale.is_empty() {
            GateResult::warn(
                GateId::Coverage,
                score,
                format!("{} stale coverage report entries", stale.len()),
                stale,
            )
        } else {
            GateResult::pass(
                GateId::Coverage,
                score,
                format!("{checked} module(s) meet their coverage thresholds"),
            )
        }
    }
}
