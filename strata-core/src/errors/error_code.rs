//! Stable error codes for machine-readable output.

pub const MANIFEST_ERROR: &str = "STRATA-1001";
pub const GRAPH_ERROR: &str = "STRATA-1002";
pub const BOUNDARY_ERROR: &str = "STRATA-1003";
pub const GATE_ERROR: &str = "STRATA-1004";
pub const CONFIG_ERROR: &str = "STRATA-1005";
pub const HALTED: &str = "STRATA-1100";

/// Every Strata error maps to a stable code that survives message rewording.
pub trait StrataErrorCode {
    fn error_code(&self) -> &'static str;
}
