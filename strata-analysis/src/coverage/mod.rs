//! Coverage report interface.
//!
//! Measurement is an external collaborator; this module only parses the
//! per-module percentages it emits. Format: JSON with line (and optional
//! branch) fractions in 0.0..=1.0:
//!
//! ```json
//! { "modules": { "application": { "line": 0.83, "branch": 0.71 } } }
//! ```

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use strata_core::errors::GateError;

/// Measured coverage for one module.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModuleCoverage {
    pub line: f64,
    #[serde(default)]
    pub branch: Option<f64>,
}

/// A parsed coverage report.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CoverageReport {
    #[serde(default)]
    pub modules: FxHashMap<String, ModuleCoverage>,
}

impl CoverageReport {
    /// Load a report from disk.
    pub fn load(path: &Path) -> Result<Self, GateError> {
        let content = std::fs::read_to_string(path).map_err(|_| GateError::ReportNotFound {
            path: path.display().to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| GateError::ReportParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Parse a report from a JSON string (for testing).
    pub fn from_json(json: &str) -> Result<Self, GateError> {
        serde_json::from_str(json).map_err(|e| GateError::ReportParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Measured line coverage for a module, if present.
    pub fn line(&self, module: &str) -> Option<f64> {
        self.modules.get(module).map(|c| c.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_line_and_optional_branch() {
        let report = CoverageReport::from_json(
            r#"{ "modules": { "application": { "line": 0.83, "branch": 0.71 },
                              "domain": { "line": 0.95 } } }"#,
        )
        .unwrap();
        assert_eq!(report.line("application"), Some(0.83));
        assert_eq!(report.modules["domain"].branch, None);
        assert_eq!(report.line("rest-api"), None);
    }

    #[test]
    fn malformed_report_is_a_parse_error() {
        let err = CoverageReport::from_json("{ not json").unwrap_err();
        assert!(matches!(err, GateError::ReportParseError { .. }));
    }
}
