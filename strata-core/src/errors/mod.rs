//! Error handling for Strata.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod boundary_error;
pub mod config_error;
pub mod error_code;
pub mod gate_error;
pub mod graph_error;
pub mod manifest_error;
pub mod pipeline_error;

pub use boundary_error::BoundaryError;
pub use config_error::ConfigError;
pub use error_code::StrataErrorCode;
pub use gate_error::GateError;
pub use graph_error::GraphError;
pub use manifest_error::ManifestError;
pub use pipeline_error::PipelineError;
