//! Graph data model.

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::Bfs;
use rustc_hash::FxHashMap;
use serde::Serialize;

use strata_core::manifest::ModuleRole;

/// One module in the graph.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleNode {
    pub name: String,
    pub role: ModuleRole,
    pub externals: Vec<String>,
    pub coverage_override: Option<f64>,
}

/// Dependency visibility: whether the edge is re-exported to the module's
/// own consumers or implementation-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    Exported,
    Private,
}

/// A directed dependency edge, annotated with both endpoints' roles so the
/// boundary validator needs no graph lookups. `order` is the position in
/// manifest declaration order; reports are sorted by it.
#[derive(Debug, Clone, Serialize)]
pub struct DependencyEdge {
    pub from: String,
    pub to: String,
    pub from_role: ModuleRole,
    pub to_role: ModuleRole,
    pub visibility: Visibility,
    pub order: usize,
}

impl std::fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Immutable module dependency graph.
#[derive(Debug)]
pub struct ModuleGraph {
    pub(super) graph: StableDiGraph<ModuleNode, Visibility>,
    pub(super) index: FxHashMap<String, NodeIndex>,
    pub(super) edges: Vec<DependencyEdge>,
}

impl ModuleGraph {
    pub fn module_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges in manifest declaration order.
    pub fn edges(&self) -> &[DependencyEdge] {
        &self.edges
    }

    /// All modules in manifest declaration order.
    pub fn modules(&self) -> impl Iterator<Item = &ModuleNode> {
        self.graph.node_weights()
    }

    pub fn module(&self, name: &str) -> Option<&ModuleNode> {
        self.index.get(name).map(|&ix| &self.graph[ix])
    }

    /// Direct dependencies of a module (neighbor lookup).
    pub fn dependencies_of(&self, name: &str) -> Vec<&ModuleNode> {
        self.neighbors(name, petgraph::Direction::Outgoing)
    }

    /// Direct dependents of a module (reverse-neighbor lookup).
    pub fn dependents_of(&self, name: &str) -> Vec<&ModuleNode> {
        self.neighbors(name, petgraph::Direction::Incoming)
    }

    fn neighbors(&self, name: &str, dir: petgraph::Direction) -> Vec<&ModuleNode> {
        let Some(&ix) = self.index.get(name) else {
            return Vec::new();
        };
        self.graph
            .neighbors_directed(ix, dir)
            .map(|n| &self.graph[n])
            .collect()
    }

    /// Modules transitively reachable from `name`, excluding `name` itself,
    /// in BFS order. Used by the transitive boundary mode.
    pub fn reachable_from(&self, name: &str) -> Vec<&ModuleNode> {
        let Some(&start) = self.index.get(name) else {
            return Vec::new();
        };
        let mut bfs = Bfs::new(&self.graph, start);
        let mut reachable = Vec::new();
        while let Some(ix) = bfs.next(&self.graph) {
            if ix != start {
                reachable.push(&self.graph[ix]);
            }
        }
        reachable
    }
}
