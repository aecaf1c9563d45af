//! Analysis engine for Strata: module dependency graph, boundary
//! validation, quality gates, the build pipeline, and reporters.

pub mod boundaries;
pub mod coverage;
pub mod gates;
pub mod graph;
pub mod pipeline;
pub mod reporters;
