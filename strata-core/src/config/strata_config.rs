//! Top-level Strata configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CoverageConfig, PipelineConfig, PolicyConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs. Lives in the same
/// `strata.toml` as the module declarations; the module tables are ignored
/// here and parsed by the manifest loader.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `CliOverrides`)
/// 2. Environment variables (`STRATA_*`)
/// 3. Project config (`strata.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StrataConfig {
    pub policy: PolicyConfig,
    pub coverage: CoverageConfig,
    pub pipeline: PipelineConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub transitive: Option<bool>,
    pub skip_hooks: Option<bool>,
}

impl StrataConfig {
    /// Load configuration with layered resolution.
    pub fn load(path: &Path, cli: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if path.exists() {
            Self::merge_toml_file(&mut config, path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Parse a config from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: StrataConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the final configuration values.
    pub fn validate(config: &StrataConfig) -> Result<(), ConfigError> {
        for (field, value) in config.coverage.fields() {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0.0 and 1.0".to_string(),
                    });
                }
            }
        }
        if config.policy.banned.iter().any(|b| b.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "policy.banned".to_string(),
                message: "entries must be non-empty coordinates".to_string(),
            });
        }
        Ok(())
    }

    fn merge_toml_file(config: &mut StrataConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: StrataConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a set value.
    fn merge(base: &mut StrataConfig, other: &StrataConfig) {
        // Policy
        if other.policy.banned != PolicyConfig::default().banned {
            base.policy.banned = other.policy.banned.clone();
        }
        if other.policy.transitive.is_some() {
            base.policy.transitive = other.policy.transitive;
        }

        // Coverage
        if other.coverage.domain.is_some() {
            base.coverage.domain = other.coverage.domain;
        }
        if other.coverage.application.is_some() {
            base.coverage.application = other.coverage.application;
        }
        if other.coverage.adapter_in.is_some() {
            base.coverage.adapter_in = other.coverage.adapter_in;
        }
        if other.coverage.adapter_out.is_some() {
            base.coverage.adapter_out = other.coverage.adapter_out;
        }
        if other.coverage.bootstrap.is_some() {
            base.coverage.bootstrap = other.coverage.bootstrap;
        }

        // Pipeline
        if other.pipeline.compile.is_some() {
            base.pipeline.compile = other.pipeline.compile.clone();
        }
        if other.pipeline.test.is_some() {
            base.pipeline.test = other.pipeline.test.clone();
        }
        if other.pipeline.package.is_some() {
            base.pipeline.package = other.pipeline.package.clone();
        }
        if other.pipeline.skip_hooks.is_some() {
            base.pipeline.skip_hooks = other.pipeline.skip_hooks;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `STRATA_POLICY_TRANSITIVE`, `STRATA_COVERAGE_APPLICATION`, etc.
    fn apply_env_overrides(config: &mut StrataConfig) {
        if let Ok(val) = std::env::var("STRATA_POLICY_TRANSITIVE") {
            if let Ok(v) = val.parse::<bool>() {
                config.policy.transitive = Some(v);
            }
        }
        if let Ok(val) = std::env::var("STRATA_COVERAGE_DOMAIN") {
            if let Ok(v) = val.parse::<f64>() {
                config.coverage.domain = Some(v);
            }
        }
        if let Ok(val) = std::env::var("STRATA_COVERAGE_APPLICATION") {
            if let Ok(v) = val.parse::<f64>() {
                config.coverage.application = Some(v);
            }
        }
        if let Ok(val) = std::env::var("STRATA_COVERAGE_ADAPTER_IN") {
            if let Ok(v) = val.parse::<f64>() {
                config.coverage.adapter_in = Some(v);
            }
        }
        if let Ok(val) = std::env::var("STRATA_COVERAGE_ADAPTER_OUT") {
            if let Ok(v) = val.parse::<f64>() {
                config.coverage.adapter_out = Some(v);
            }
        }
        if let Ok(val) = std::env::var("STRATA_PIPELINE_SKIP_HOOKS") {
            if let Ok(v) = val.parse::<bool>() {
                config.pipeline.skip_hooks = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut StrataConfig, cli: &CliOverrides) {
        if let Some(v) = cli.transitive {
            config.policy.transitive = Some(v);
        }
        if let Some(v) = cli.skip_hooks {
            config.pipeline.skip_hooks = Some(v);
        }
    }
}
