//! Configuration system for Strata.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod coverage_config;
pub mod pipeline_config;
pub mod policy_config;
pub mod strata_config;

pub use coverage_config::CoverageConfig;
pub use pipeline_config::PipelineConfig;
pub use policy_config::PolicyConfig;
pub use strata_config::{CliOverrides, StrataConfig};
