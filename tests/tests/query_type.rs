//! Query classification integration tests.

use pretty_assertions::assert_eq;
use tql_tests::prelude::*;

#[test]
fn test_query_type_ids_are_stable() {
    assert_eq!(QueryType::of(0), Some(QueryType::Read));
    assert_eq!(QueryType::of(1), Some(QueryType::Write));
    assert_eq!(QueryType::of(2), None);
    assert!(QueryType::Read.is_read());
    assert!(QueryType::Write.is_write());
    for query_type in QueryType::ALL {
        assert_ne!(query_type.is_read(), query_type.is_write());
    }
}

#[test]
fn test_match_query_is_read() {
    init_logging();

    let pattern = Conjunction::new(vec![
        Pattern::Variable(var("x").isa(Variable::label("person")).has("name", var("n"))),
        disj(vec![
            Pattern::Variable(var("x").has("age", var("a"))),
            Pattern::Variable(var("x").has("email", var("e"))),
        ]),
    ]);
    let query = MatchQuery::new(pattern)
        .unwrap()
        .get(vec![reference("x"), reference("n")])
        .unwrap()
        .sort(vec![(reference("n"), Order::Asc)])
        .unwrap()
        .limit(10);

    assert_eq!(query.normalised().len(), 2);
    assert_eq!(
        query.to_string(),
        "match\n\
         $x isa person, has name $n;\n\
         { $x has age $a; } or { $x has email $e; };\n\
         get $x, $n;\n\
         sort $n asc;\n\
         limit 10;"
    );

    let query = Query::from(query);
    assert_eq!(query.query_type(), QueryType::Read);
}

#[test]
fn test_match_query_filter_outside_scope() {
    let pattern = Conjunction::new(vec![p("x"), not(p("y"))]);
    let query = MatchQuery::new(pattern).unwrap();

    assert_eq!(
        query.get(vec![reference("y")]).unwrap_err(),
        QueryError::variable_out_of_scope(reference("y"))
    );
}
