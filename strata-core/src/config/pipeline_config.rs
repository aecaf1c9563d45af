//! Pipeline stage hook configuration.

use serde::{Deserialize, Serialize};

/// `[pipeline]` table: external commands run by the compile, test, and
/// package stages. Unset hooks make the stage a no-op (reported skipped).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    pub compile: Option<String>,
    pub test: Option<String>,
    pub package: Option<String>,
    /// Skip all hooks regardless of configuration (fast verification runs).
    pub skip_hooks: Option<bool>,
}

impl PipelineConfig {
    pub fn skip_hooks(&self) -> bool {
        self.skip_hooks.unwrap_or(false)
    }
}
