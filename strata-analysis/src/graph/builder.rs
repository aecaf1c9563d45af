//! Graph construction from the manifest. Pure: no side effects beyond the
//! returned graph.

use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::StableDiGraph;
use rustc_hash::FxHashMap;

use strata_core::errors::GraphError;
use strata_core::manifest::Manifest;

use super::types::{DependencyEdge, ModuleGraph, ModuleNode, Visibility};

pub struct GraphBuilder;

impl GraphBuilder {
    /// Build the dependency graph from a validated manifest.
    ///
    /// Every referenced dependency name must resolve to a declared module;
    /// the first unresolved reference fails construction before any
    /// boundary validation can run. The finished graph is checked for
    /// cycles.
    pub fn build(manifest: &Manifest) -> Result<ModuleGraph, GraphError> {
        let mut graph = StableDiGraph::new();
        let mut index = FxHashMap::default();

        for decl in &manifest.modules {
            let ix = graph.add_node(ModuleNode {
                name: decl.name.clone(),
                role: decl.role,
                externals: decl.externals.clone(),
                coverage_override: decl.coverage,
            });
            index.insert(decl.name.clone(), ix);
        }

        let mut edges = Vec::new();
        let mut order = 0usize;
        for decl in &manifest.modules {
            let from_ix = index[decl.name.as_str()];
            for dep in &decl.dependencies {
                let Some(&to_ix) = index.get(dep.name()) else {
                    return Err(GraphError::UnresolvedModule {
                        module: decl.name.clone(),
                        dependency: dep.name().to_string(),
                    });
                };
                let visibility = if dep.exported() {
                    Visibility::Exported
                } else {
                    Visibility::Private
                };
                graph.add_edge(from_ix, to_ix, visibility);
                edges.push(DependencyEdge {
                    from: decl.name.clone(),
                    to: dep.name().to_string(),
                    from_role: decl.role,
                    to_role: graph[to_ix].role,
                    visibility,
                    order,
                });
                order += 1;
            }
        }

        Self::check_acyclic(&graph)?;

        tracing::debug!(
            modules = graph.node_count(),
            edges = edges.len(),
            "module graph built"
        );

        Ok(ModuleGraph {
            graph,
            index,
            edges,
        })
    }

    /// Reject cyclic graphs. Tarjan SCC: any component with more than one
    /// node is a cycle (self-loops are already rejected by the manifest).
    fn check_acyclic(
        graph: &StableDiGraph<ModuleNode, Visibility>,
    ) -> Result<(), GraphError> {
        for scc in tarjan_scc(graph) {
            if scc.len() > 1 {
                let mut path: Vec<String> =
                    scc.iter().map(|&ix| graph[ix].name.clone()).collect();
                // Close the loop for readability.
                path.push(path[0].clone());
                return Err(GraphError::CycleDetected { path });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::manifest::Manifest;

    fn manifest(toml_str: &str) -> Manifest {
        Manifest::from_toml(toml_str).unwrap()
    }

    #[test]
    fn builds_nodes_and_edges_in_declaration_order() {
        let graph = GraphBuilder::build(&manifest(
            r#"
            [[module]]
            name = "domain"
            role = "domain"

            [[module]]
            name = "application"
            role = "application"
            dependencies = ["domain"]

            [[module]]
            name = "rest-api"
            role = "adapter-in"
            dependencies = ["application", "domain"]
            "#,
        ))
        .unwrap();

        assert_eq!(graph.module_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        let edges: Vec<String> = graph.edges().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            edges,
            vec![
                "application -> domain",
                "rest-api -> application",
                "rest-api -> domain",
            ]
        );
    }

    #[test]
    fn unresolved_dependency_names_the_missing_identifier() {
        let err = GraphBuilder::build(&manifest(
            r#"
            [[module]]
            name = "application"
            role = "application"
            dependencies = ["repository-utils"]
            "#,
        ))
        .unwrap_err();

        match err {
            GraphError::UnresolvedModule { module, dependency } => {
                assert_eq!(module, "application");
                assert_eq!(dependency, "repository-utils");
            }
            other => panic!("expected UnresolvedModule, got {other:?}"),
        }
    }

    #[test]
    fn cycles_are_rejected() {
        let err = GraphBuilder::build(&manifest(
            r#"
            [[module]]
            name = "app-commands"
            role = "application"
            dependencies = ["app-queries"]

            [[module]]
            name = "app-queries"
            role = "application"
            dependencies = ["app-commands"]
            "#,
        ))
        .unwrap_err();

        match err {
            GraphError::CycleDetected { path } => {
                assert!(path.len() >= 3);
                assert_eq!(path.first(), path.last());
            }
            other => panic!("expected CycleDetected, got {other:?}"),
        }
    }

    #[test]
    fn neighbor_and_reverse_neighbor_lookup() {
        let graph = GraphBuilder::build(&manifest(
            r#"
            [[module]]
            name = "domain"
            role = "domain"

            [[module]]
            name = "application"
            role = "application"
            dependencies = ["domain"]

            [[module]]
            name = "persistence"
            role = "adapter-out"
            dependencies = ["application"]
            "#,
        ))
        .unwrap();

        let deps: Vec<&str> = graph
            .dependencies_of("application")
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(deps, vec!["domain"]);

        let dependents: Vec<&str> = graph
            .dependents_of("application")
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(dependents, vec!["persistence"]);
    }

    #[test]
    fn reachability_excludes_the_start_module() {
        let graph = GraphBuilder::build(&manifest(
            r#"
            [[module]]
            name = "domain"
            role = "domain"

            [[module]]
            name = "application"
            role = "application"
            dependencies = ["domain"]

            [[module]]
            name = "rest-api"
            role = "adapter-in"
            dependencies = ["application"]
            "#,
        ))
        .unwrap();

        let reachable: Vec<&str> = graph
            .reachable_from("rest-api")
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(reachable, vec!["application", "domain"]);
    }
}
