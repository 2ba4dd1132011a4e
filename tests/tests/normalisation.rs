//! Normalisation integration tests.

use pretty_assertions::assert_eq;
use std::sync::Arc;
use tql_tests::prelude::*;

mod flattening {
    use super::*;

    pub fn scenario() -> Scenario {
        // (A or B) or (C or D)
        Scenario::new("flattening")
            .pattern(disj(vec![disj(vec![p("a"), p("b")]), disj(vec![p("c"), p("d")])]))
            .step("render_nested", |a| {
                a.renders("{ { $a; } or { $b; }; } or { { $c; } or { $d; }; }")
            })
            .step("flatten_in_order", |a| {
                a.disjuncts(4)
                    .normalises_to("{ $a; } or { $b; } or { $c; } or { $d; }")
            })
    }

    #[test]
    fn test_disjunction_of_disjunctions() {
        scenario().run().unwrap();
    }
}

mod distribution {
    use super::*;

    pub fn scenario() -> Scenario {
        // $x isa person; { $x has name $n; } or { $x has email $e; }; not { $x has age $g; };
        let x = || var("x");
        Scenario::new("distribution")
            .pattern(conj(vec![
                Pattern::Variable(x().isa(Variable::label("person"))),
                disj(vec![
                    Pattern::Variable(x().has("name", var("n"))),
                    Pattern::Variable(x().has("email", var("e"))),
                ]),
                not(Pattern::Variable(x().has("age", var("g")))),
            ]))
            .step("two_disjuncts", |a| a.disjuncts(2))
            .step("negation_kept_in_each", |a| {
                a.normalises_to(
                    "{ $x isa person; $x has name $n; not { $x has age $g; }; } \
                     or { $x isa person; $x has email $e; not { $x has age $g; }; }",
                )
            })
    }

    #[test]
    fn test_conjunction_distributes_over_disjunction() {
        scenario().run().unwrap();
    }
}

#[test]
fn test_cartesian_product_size() {
    init_logging();

    // three binary disjunctions conjoined: 2 * 2 * 2 disjuncts
    let pattern = conj(
        ["a", "b", "c"]
            .iter()
            .map(|prefix| disj(vec![p(&format!("{}1", prefix)), p(&format!("{}2", prefix))]))
            .collect(),
    );

    let normalised = pattern.normalise();

    assert_eq!(normalised.len(), 8);
    assert_eq!(
        normalised.patterns()[0].to_string(),
        "{ $a1; $b1; $c1; }"
    );
    assert_eq!(
        normalised.patterns()[7].to_string(),
        "{ $a2; $b2; $c2; }"
    );
}

#[test]
fn test_normalised_form_is_shared() {
    init_logging();

    let pattern = conj(vec![p("x"), disj(vec![p("a"), p("b")])]);
    let first = pattern.normalise();
    let second = pattern.normalise();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(*first.normalise(), *first);
}
