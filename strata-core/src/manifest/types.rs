//! Manifest data model.

use serde::{Deserialize, Serialize};

use super::role::ModuleRole;

/// Top-level project metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectDecl {
    pub name: Option<String>,
}

/// A dependency on another declared module. The short form is a plain
/// string; the long form adds visibility:
///
/// ```toml
/// dependencies = ["domain", { name = "application", exported = true }]
/// ```
///
/// `exported` marks the dependency as part of the module's own API surface
/// (the build tool's `api` vs `implementation` distinction). Plain strings
/// are implementation-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependencyDecl {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        exported: bool,
    },
}

impl DependencyDecl {
    pub fn name(&self) -> &str {
        match self {
            DependencyDecl::Name(name) => name,
            DependencyDecl::Detailed { name, .. } => name,
        }
    }

    pub fn exported(&self) -> bool {
        match self {
            DependencyDecl::Name(_) => false,
            DependencyDecl::Detailed { exported, .. } => *exported,
        }
    }
}

/// One module declaration: identifier, role tag, dependencies on other
/// declared modules, and external third-party coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleDecl {
    pub name: String,
    pub role: ModuleRole,
    #[serde(default)]
    pub dependencies: Vec<DependencyDecl>,
    /// Third-party coordinates resolved by the enclosing build tool,
    /// e.g. `org.springframework:spring-context`. Only inspected by the
    /// dependency policy gate.
    #[serde(default)]
    pub externals: Vec<String>,
    /// Per-module minimum line coverage, overriding the role default.
    #[serde(default)]
    pub coverage: Option<f64>,
}

/// The full module manifest, parsed from `strata.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub project: ProjectDecl,
    #[serde(rename = "module", default)]
    pub modules: Vec<ModuleDecl>,
}

impl Manifest {
    /// Look up a module declaration by name.
    pub fn module(&self, name: &str) -> Option<&ModuleDecl> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// All modules of a given role, in declaration order.
    pub fn modules_with_role(&self, role: ModuleRole) -> impl Iterator<Item = &ModuleDecl> {
        self.modules.iter().filter(move |m| m.role == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependency_decl_short_and_long_forms() {
        let toml_str = r#"
            name = "rest-api"
            role = "adapter-in"
            dependencies = ["domain", { name = "application", exported = true }]
        "#;
        let decl: ModuleDecl = toml::from_str(toml_str).unwrap();
        assert_eq!(decl.dependencies.len(), 2);
        assert_eq!(decl.dependencies[0].name(), "domain");
        assert!(!decl.dependencies[0].exported());
        assert_eq!(decl.dependencies[1].name(), "application");
        assert!(decl.dependencies[1].exported());
    }

    #[test]
    fn unknown_role_tag_is_rejected() {
        let toml_str = r#"
            name = "web"
            role = "controller"
        "#;
        assert!(toml::from_str::<ModuleDecl>(toml_str).is_err());
    }
}
