//! Pipeline errors.

use super::error_code::{self, StrataErrorCode};
use super::{BoundaryError, ConfigError, GateError, GraphError, ManifestError};

/// Errors that can occur during a pipeline run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Boundary error: {0}")]
    Boundary(#[from] BoundaryError),

    #[error("Gate error: {0}")]
    Gate(#[from] GateError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pipeline halted at stage {stage}")]
    Halted { stage: String },
}

impl StrataErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Manifest(e) => e.error_code(),
            Self::Graph(e) => e.error_code(),
            Self::Boundary(e) => e.error_code(),
            Self::Gate(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Halted { .. } => error_code::HALTED,
        }
    }
}
