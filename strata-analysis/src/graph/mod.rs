//! Module dependency graph — petgraph StableDiGraph with a name index.
//!
//! Built once per invocation from the manifest, read-only afterwards.

pub mod builder;
pub mod types;

pub use builder::GraphBuilder;
pub use types::{DependencyEdge, ModuleGraph, ModuleNode, Visibility};
