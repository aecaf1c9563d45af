//! Console reporter — human-readable output with color codes.

use super::Reporter;
use crate::gates::Severity;
use crate::pipeline::{PipelineReport, StageStatus};

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn status_symbol(&self, status: StageStatus) -> &'static str {
        match status {
            StageStatus::Passed => "✓",
            StageStatus::Failed => "✗",
            StageStatus::Skipped => "⊘",
        }
    }

    fn severity_prefix(&self, severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }

    fn color_start(&self, severity: Severity) -> &'static str {
        if !self.use_color {
            return "";
        }
        match severity {
            Severity::Error => "\x1b[31m",   // red
            Severity::Warning => "\x1b[33m", // yellow
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &PipelineReport) -> String {
        let mut output = String::new();

        output.push_str("╔══════════════════════════════════════════╗\n");
        output.push_str("║        Strata Architecture Report        ║\n");
        output.push_str("╚══════════════════════════════════════════╝\n\n");

        for outcome in &report.outcomes {
            let symbol = self.status_symbol(outcome.status);
            output.push_str(&format!(
                "{} {} — {}\n",
                symbol, outcome.stage, outcome.detail
            ));

            for gate in &outcome.gate_results {
                for violation in &gate.violations {
                    let prefix = self.severity_prefix(violation.severity);
                    let cs = self.color_start(violation.severity);
                    let ce = self.color_end();
                    output.push_str(&format!(
                        "  {}{}{}: [{}] {}\n",
                        cs, prefix, ce, violation.rule_id, violation.message
                    ));
                }
            }
        }

        let total_violations = report.violation_count();
        let passed = report
            .outcomes
            .iter()
            .filter(|o| o.status == StageStatus::Passed)
            .count();
        let total = report.outcomes.len();

        output.push_str(&format!(
            "\n─── Summary: {passed}/{total} stages passed, {total_violations} violation(s) ───\n"
        ));

        if report.passed {
            output.push_str("Result: PASSED ✓\n");
        } else {
            match report.halted_at {
                Some(stage) => {
                    output.push_str(&format!("Result: FAILED ✗ (halted at {stage})\n"))
                }
                None => output.push_str("Result: FAILED ✗\n"),
            }
        }

        output
    }
}
