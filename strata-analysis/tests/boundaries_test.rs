//! Boundary validator tests: layering rules over module graphs.

use proptest::prelude::*;

use strata_analysis::boundaries::{BoundaryValidator, ForbiddenEdgeRule, RuleTable};
use strata_analysis::graph::{GraphBuilder, ModuleGraph};
use strata_core::manifest::{Manifest, ModuleRole};

fn graph(toml_str: &str) -> ModuleGraph {
    GraphBuilder::build(&Manifest::from_toml(toml_str).unwrap()).unwrap()
}

#[test]
fn clean_two_module_graph_has_zero_violations() {
    let graph = graph(
        r#"
        [[module]]
        name = "domain"
        role = "domain"

        [[module]]
        name = "application"
        role = "application"
        dependencies = ["domain"]
        "#,
    );
    assert!(BoundaryValidator::layered().validate(&graph).is_empty());
}

#[test]
fn full_hexagonal_graph_is_clean() {
    let graph = graph(
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

        [[module]]
        name = "persistence-mysql"
        role = "adapter-out"
        dependencies = ["application", "domain"]

        [[module]]
        name = "bootstrap-web"
        role = "bootstrap"
        dependencies = ["domain", "application", "rest-api", "persistence-mysql"]
        "#,
    );
    assert!(BoundaryValidator::layered().validate(&graph).is_empty());
}

#[test]
fn application_to_adapter_out_is_exactly_one_violation() {
    let graph = graph(
        r#"
        [[module]]
        name = "domain"
        role = "domain"

        [[module]]
        name = "persistence"
        role = "adapter-out"

        [[module]]
        name = "application"
        role = "application"
        dependencies = ["domain", "persistence"]
        "#,
    );
    let violations = BoundaryValidator::layered().validate(&graph);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].edge.from, "application");
    assert_eq!(violations[0].edge.to, "persistence");
    assert_eq!(violations[0].rule.from, ModuleRole::Application);
    assert_eq!(violations[0].rule.to, ModuleRole::AdapterOut);
}

#[test]
fn domain_to_anything_is_a_violation() {
    let graph = graph(
        r#"
        [[module]]
        name = "application"
        role = "application"

        [[module]]
        name = "domain"
        role = "domain"
        dependencies = ["application"]
        "#,
    );
    let violations = BoundaryValidator::layered().validate(&graph);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule.from, ModuleRole::Domain);
    // Domain is a leaf: the actionable message says nothing is permitted.
    assert!(violations[0].to_string().contains("permitted dependencies: nothing"));
}

#[test]
fn nothing_may_depend_on_bootstrap() {
    let graph = graph(
        r#"
        [[module]]
        name = "bootstrap-web"
        role = "bootstrap"

        [[module]]
        name = "rest-api"
        role = "adapter-in"
        dependencies = ["bootstrap-web"]
        "#,
    );
    let violations = BoundaryValidator::layered().validate(&graph);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule.to, ModuleRole::Bootstrap);
}

#[test]
fn violations_come_back_in_edge_declaration_order() {
    let graph = graph(
        r#"
        [[module]]
        name = "rest-api"
        role = "adapter-in"

        [[module]]
        name = "persistence"
        role = "adapter-out"

        [[module]]
        name = "application"
        role = "application"
        dependencies = ["rest-api", "persistence"]
        "#,
    );
    let violations = BoundaryValidator::layered().validate(&graph);
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0].edge.to, "rest-api");
    assert_eq!(violations[1].edge.to, "persistence");
    assert!(violations[0].edge.order < violations[1].edge.order);
}

#[test]
fn role_matching_ignores_suspicious_module_names() {
    // A module legitimately named after an adapter must not false-positive:
    // matching is by declared role, never by name substring.
    let graph = graph(
        r#"
        [[module]]
        name = "commons-adapter-out-kit"
        role = "application"

        [[module]]
        name = "application"
        role = "application"
        dependencies = ["commons-adapter-out-kit"]
        "#,
    );
    assert!(BoundaryValidator::layered().validate(&graph).is_empty());
}

#[test]
fn transitive_mode_finds_reachability_violations_for_custom_rules() {
    // adapter-in -> application -> domain: both direct edges are legal,
    // but a custom table forbidding adapter-in -> domain only trips in
    // transitive mode.
    let toml_str = r#"
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
    "#;
    let graph = graph(toml_str);
    let table = RuleTable::with_rules(vec![ForbiddenEdgeRule {
        from: ModuleRole::AdapterIn,
        to: ModuleRole::Domain,
    }]);

    let direct_only = BoundaryValidator::new(table.clone(), false).validate(&graph);
    assert!(direct_only.is_empty());

    let transitive = BoundaryValidator::new(table, true).validate(&graph);
    assert_eq!(transitive.len(), 1);
    assert!(transitive[0].transitive);
    assert_eq!(transitive[0].edge.from, "rest-api");
    assert_eq!(transitive[0].edge.to, "domain");
}

#[test]
fn verify_aggregates_before_failing() {
    let graph = graph(
        r#"
        [[module]]
        name = "rest-api"
        role = "adapter-in"

        [[module]]
        name = "persistence"
        role = "adapter-out"

        [[module]]
        name = "application"
        role = "application"
        dependencies = ["rest-api", "persistence"]
        "#,
    );
    let err = BoundaryValidator::layered().verify(&graph).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("2 boundary violation(s)"));
    assert!(message.contains("application -> rest-api"));
}

fn any_role() -> impl Strategy<Value = ModuleRole> {
    prop_oneof![
        Just(ModuleRole::Domain),
        Just(ModuleRole::Application),
        Just(ModuleRole::AdapterIn),
        Just(ModuleRole::AdapterOut),
        Just(ModuleRole::Bootstrap),
    ]
}

proptest! {
    /// An edge is flagged exactly when the source role does not permit the
    /// target role.
    #[test]
    fn single_edge_verdict_matches_permitted_sets(from in any_role(), to in any_role()) {
        let toml_str = format!(
            r#"
            [[module]]
            name = "target"
            role = "{}"

            [[module]]
            name = "source"
            role = "{}"
            dependencies = ["target"]
            "#,
            to.tag(),
            from.tag(),
        );
        let graph = GraphBuilder::build(&Manifest::from_toml(&toml_str).unwrap()).unwrap();
        let violations = BoundaryValidator::layered().validate(&graph);
        if from.permits(to) {
            prop_assert!(violations.is_empty());
        } else {
            prop_assert_eq!(violations.len(), 1);
            prop_assert_eq!(&violations[0].edge.from, "source");
        }
    }
}
