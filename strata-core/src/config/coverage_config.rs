//! Coverage threshold configuration.

use serde::{Deserialize, Serialize};

use crate::manifest::ModuleRole;

/// Compiled role defaults. Bootstrap is wiring-only and exempt.
pub const DEFAULT_DOMAIN: f64 = 0.90;
pub const DEFAULT_APPLICATION: f64 = 0.80;
pub const DEFAULT_ADAPTER: f64 = 0.70;

/// `[coverage]` table: minimum line-coverage fractions per role.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CoverageConfig {
    pub domain: Option<f64>,
    pub application: Option<f64>,
    pub adapter_in: Option<f64>,
    pub adapter_out: Option<f64>,
    pub bootstrap: Option<f64>,
}

impl CoverageConfig {
    /// Effective threshold for a role: configured value, else the compiled
    /// default. `None` means the role is exempt from the coverage gate.
    pub fn threshold_for(&self, role: ModuleRole) -> Option<f64> {
        match role {
            ModuleRole::Domain => self.domain.or(Some(DEFAULT_DOMAIN)),
            ModuleRole::Application => self.application.or(Some(DEFAULT_APPLICATION)),
            ModuleRole::AdapterIn => self.adapter_in.or(Some(DEFAULT_ADAPTER)),
            ModuleRole::AdapterOut => self.adapter_out.or(Some(DEFAULT_ADAPTER)),
            ModuleRole::Bootstrap => self.bootstrap,
        }
    }

    /// All configured or defaulted fields, for validation.
    pub(crate) fn fields(&self) -> [(&'static str, Option<f64>); 5] {
        [
            ("coverage.domain", self.domain),
            ("coverage.application", self.application),
            ("coverage.adapter_in", self.adapter_in),
            ("coverage.adapter_out", self.adapter_out),
            ("coverage.bootstrap", self.bootstrap),
        ]
    }
}
