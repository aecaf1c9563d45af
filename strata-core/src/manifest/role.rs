//! Layer roles of a hexagonal module graph.

use serde::{Deserialize, Serialize};

/// The five layer roles. Dependency flow is one-directional:
/// domain <- application <- adapters <- bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleRole {
    /// Leaf of the graph. Depends on nothing.
    Domain,
    /// Use-case orchestration. Depends only on domain (and sibling
    /// application modules).
    Application,
    /// Driving adapter (REST, CLI, consumers). Translates external input
    /// into use-case invocations.
    AdapterIn,
    /// Driven adapter (persistence, object storage, queue clients).
    /// Implements ports declared by application/domain.
    AdapterOut,
    /// Composition root. The only module allowed to see everything, and
    /// the unique sink: nothing may depend on it.
    Bootstrap,
}

impl ModuleRole {
    /// All roles, in layering order.
    pub fn all() -> &'static [ModuleRole] {
        &[
            ModuleRole::Domain,
            ModuleRole::Application,
            ModuleRole::AdapterIn,
            ModuleRole::AdapterOut,
            ModuleRole::Bootstrap,
        ]
    }

    /// Roles a module of this role is permitted to depend on directly.
    ///
    /// Domain is a strict leaf. Application and the adapters may be split
    /// into sibling modules of the same role, so same-role edges are
    /// permitted there. Bootstrap never appears in any permitted set.
    pub fn permitted_targets(self) -> &'static [ModuleRole] {
        match self {
            ModuleRole::Domain => &[],
            ModuleRole::Application => &[ModuleRole::Domain, ModuleRole::Application],
            ModuleRole::AdapterIn => &[
                ModuleRole::Domain,
                ModuleRole::Application,
                ModuleRole::AdapterIn,
            ],
            ModuleRole::AdapterOut => &[
                ModuleRole::Domain,
                ModuleRole::Application,
                ModuleRole::AdapterOut,
            ],
            ModuleRole::Bootstrap => &[
                ModuleRole::Domain,
                ModuleRole::Application,
                ModuleRole::AdapterIn,
                ModuleRole::AdapterOut,
            ],
        }
    }

    /// Whether this role permits a direct dependency on `target`.
    pub fn permits(self, target: ModuleRole) -> bool {
        self.permitted_targets().contains(&target)
    }

    pub fn is_adapter(self) -> bool {
        matches!(self, ModuleRole::AdapterIn | ModuleRole::AdapterOut)
    }

    /// The kebab-case tag used in manifests and reports.
    pub fn tag(self) -> &'static str {
        match self {
            ModuleRole::Domain => "domain",
            ModuleRole::Application => "application",
            ModuleRole::AdapterIn => "adapter-in",
            ModuleRole::AdapterOut => "adapter-out",
            ModuleRole::Bootstrap => "bootstrap",
        }
    }
}

impl std::fmt::Display for ModuleRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
