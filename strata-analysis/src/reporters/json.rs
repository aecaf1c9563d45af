//! JSON reporter — the full run record, machine-readable.

use super::Reporter;
use crate::pipeline::PipelineReport;

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &PipelineReport) -> String {
        // PipelineReport is fully Serialize; failure here would mean a
        // non-serializable field slipped into the model.
        serde_json::to_string_pretty(report)
            .unwrap_or_else(|e| format!("{{\"error\":\"serialization failed: {e}\"}}"))
    }
}
