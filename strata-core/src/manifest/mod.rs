//! Module manifest: the declarative input describing modules, roles, and
//! dependency sets. Immutable for the duration of a build invocation.

pub mod loader;
pub mod role;
pub mod types;

pub use role::ModuleRole;
pub use types::{DependencyDecl, Manifest, ModuleDecl, ProjectDecl};
