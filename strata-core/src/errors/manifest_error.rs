//! Manifest loading and validation errors.

use super::error_code::{self, StrataErrorCode};

/// Errors that can occur while loading the module manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Manifest not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Duplicate module name: {0}")]
    DuplicateModule(String),

    #[error("Module {0} declares itself as a dependency")]
    SelfDependency(String),

    #[error("Manifest declares no modules")]
    Empty,
}

impl StrataErrorCode for ManifestError {
    fn error_code(&self) -> &'static str {
        error_code::MANIFEST_ERROR
    }
}
