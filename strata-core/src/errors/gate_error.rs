//! Quality gate errors.

use super::error_code::{self, StrataErrorCode};

/// Errors that can occur while evaluating quality gates. Threshold
/// shortfalls and banned dependencies are findings, not errors: they
/// travel as `Violation` records inside gate results.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("Coverage report not found: {path}")]
    ReportNotFound { path: String },

    #[error("Failed to parse coverage report {path}: {message}")]
    ReportParseError { path: String, message: String },

    #[error("Hook command failed: {command} ({message})")]
    HookFailed { command: String, message: String },

    #[error("Circular dependency among gates")]
    CircularGateDependencies,
}

impl StrataErrorCode for GateError {
    fn error_code(&self) -> &'static str {
        error_code::GATE_ERROR
    }
}
