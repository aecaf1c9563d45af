//! GitHub reporter — workflow command annotations.
//!
//! Emits `::error`/`::warning` lines that GitHub Actions renders inline,
//! plus a closing `::notice` summary.

use super::Reporter;
use crate::gates::Severity;
use crate::pipeline::PipelineReport;

pub struct GitHubReporter;

impl Reporter for GitHubReporter {
    fn name(&self) -> &'static str {
        "github"
    }

    fn generate(&self, report: &PipelineReport) -> String {
        let mut output = String::new();

        for outcome in &report.outcomes {
            for gate in &outcome.gate_results {
                for violation in &gate.violations {
                    let command = match violation.severity {
                        Severity::Error => "error",
                        Severity::Warning => "warning",
                    };
                    output.push_str(&format!(
                        "::{command} title={}::{}: {}\n",
                        violation.rule_id, violation.module, violation.message
                    ));
                }
            }
        }

        if report.passed {
            output.push_str("::notice::Strata: all stages passed\n");
        } else {
            let stage = report
                .halted_at
                .map(|s| s.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            output.push_str(&format!(
                "::error::Strata: pipeline halted at {stage} with {} violation(s)\n",
                report.violation_count()
            ));
        }

        output
    }
}
