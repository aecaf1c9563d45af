//! Dependency graph construction errors.

use super::error_code::{self, StrataErrorCode};

/// Errors that can occur while building the module dependency graph.
/// Construction fails before any validation runs.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Module {module} depends on undeclared module {dependency}")]
    UnresolvedModule { module: String, dependency: String },

    #[error("Dependency cycle detected: {}", path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}

impl StrataErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        error_code::GRAPH_ERROR
    }
}
