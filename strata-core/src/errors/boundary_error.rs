//! Boundary validation errors.

use super::error_code::{self, StrataErrorCode};

/// Fatal outcome of boundary validation. Violations are aggregated in a
/// single pass before this is raised; the full list travels in the gate
/// result, the error carries the count and the first offending edge.
#[derive(Debug, thiserror::Error)]
pub enum BoundaryError {
    #[error("{count} boundary violation(s) detected, first: {first}")]
    Violations { count: usize, first: String },
}

impl StrataErrorCode for BoundaryError {
    fn error_code(&self) -> &'static str {
        error_code::BOUNDARY_ERROR
    }
}
