//! Binding validation integration tests.

use pretty_assertions::assert_eq;
use std::collections::HashSet;
use tql_tests::prelude::*;

mod constraint_graph {
    use super::*;

    pub fn scenario() -> Scenario {
        // $m (husband: $h, wife: $w) isa marriage; $h has name $n;
        Scenario::new("constraint_graph")
            .pattern(conj(vec![
                Pattern::Variable(
                    var("m")
                        .rel(RolePlayer::with_role(
                            Variable::scoped_label("marriage", "husband"),
                            var("h"),
                        ))
                        .rel(RolePlayer::with_role(
                            Variable::scoped_label("marriage", "wife"),
                            var("w"),
                        ))
                        .isa(Variable::label("marriage")),
                ),
                Pattern::Variable(var("h").has("name", var("n"))),
            ]))
            .step("render", |a| {
                a.renders(
                    "{ $m (marriage:husband: $h, marriage:wife: $w) isa marriage; \
                     $h has name $n; }",
                )
            })
            .step("scope", |a| a.scope(&["m", "h", "w", "n"]))
            .step("fully_bound", |a| a.bound_by(&["m", "h", "w", "n"]))
            .step("player_unbound", |a| a.unbound(&["m", "h", "n"], "w"))
    }

    #[test]
    fn test_constraint_variables_are_checked() {
        scenario().run().unwrap();
    }
}

mod nested_scopes {
    use super::*;

    pub fn scenario() -> Scenario {
        // $x; { $y; } or { $x; }; not { $z; };
        Scenario::new("nested_scopes")
            .pattern(conj(vec![
                p("x"),
                disj(vec![p("y"), p("x")]),
                not(p("z")),
            ]))
            .step("outer_scope_only", |a| a.scope(&["x"]))
            .step("disjunct_unbound", |a| a.unbound(&["x"], "y"))
            .step("negation_unbound", |a| a.unbound(&["x", "y"], "z"))
            .step("all_bound", |a| a.bound_by(&["x", "y", "z"]))
    }

    #[test]
    fn test_nested_patterns_do_not_bind_outward() {
        scenario().run().unwrap();
    }
}

#[test]
fn test_deep_constraint_chain_is_validated_iteratively() {
    init_logging();

    // $v0 isa $v1, $v1 isa $v2, ... built inside-out
    let depth = 50_000;
    let mut chain = var(&format!("v{}", depth));
    for i in (0..depth).rev() {
        chain = var(&format!("v{}", i)).isa(chain);
    }
    let pattern = Pattern::Variable(chain);

    let mut bounds: HashSet<Reference> = (0..depth).map(|i| reference(&format!("v{}", i))).collect();
    assert_eq!(
        pattern.validate_is_bound_by(&bounds),
        Err(PatternError::unbound_variable_reference(reference(&format!("v{}", depth))))
    );

    bounds.insert(reference(&format!("v{}", depth)));
    assert_eq!(pattern.validate_is_bound_by(&bounds), Ok(()));
}

#[test]
fn test_missing_scenario_pattern_is_an_error() {
    let err = Scenario::new("empty").step("noop", |a| a).run().unwrap_err();
    assert!(matches!(err, ScenarioError::MissingPattern { .. }));
}
