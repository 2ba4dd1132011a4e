//! Define and undefine query integration tests.

use pretty_assertions::assert_eq;
use tql_tests::prelude::*;

fn label(name: &str) -> Variable {
    Variable::label(name)
}

fn marriage_schema() -> Vec<Definable> {
    vec![
        label("person")
            .sub(label("entity"))
            .owns_key(label("email"))
            .plays(Variable::scoped_label("marriage", "husband"))
            .into(),
        label("marriage")
            .sub(label("relation"))
            .relates(label("husband"))
            .relates(label("wife"))
            .into(),
        label("email").sub(label("attribute")).value(tql_core::ValueType::String).into(),
    ]
}

#[test]
fn test_define_schema_renders_one_definable_per_line() {
    init_logging();

    let query = DefinableQuery::define(marriage_schema()).unwrap();

    assert_eq!(
        query.to_string(),
        "define\n\
         person sub entity, owns email @key, plays marriage:husband;\n\
         marriage sub relation, relates husband, relates wife;\n\
         email sub attribute, value string;"
    );
    assert_eq!(query.query_type(), QueryType::Write);
    assert_eq!(query.variables().count(), 3);
    assert_eq!(query.rules().count(), 0);
}

#[test]
fn test_define_with_rule() {
    init_logging();

    // rule married-people-are-friends: when { $m (husband: $h, wife: $w) isa marriage; }
    //   then { (friend: $h, friend: $w) isa friendship; }
    let when = Conjunction::new(vec![Pattern::Variable(
        var("m")
            .rel(RolePlayer::with_role(label("husband"), var("h")))
            .rel(RolePlayer::with_role(label("wife"), var("w")))
            .isa(label("marriage")),
    )]);
    let then = Variable::anonymous()
        .rel(RolePlayer::with_role(label("friend"), var("h")))
        .rel(RolePlayer::with_role(label("friend"), var("w")))
        .isa(label("friendship"));
    let rule = Rule::new("married-people-are-friends", when, then).unwrap();

    let mut definables = marriage_schema();
    definables.insert(1, rule.clone().into());
    let query = DefinableQuery::define(definables).unwrap();

    let rules: Vec<&Rule> = query.rules().collect();
    assert_eq!(rules, vec![&rule]);
    let variables: Vec<String> = query.variables().map(Variable::head).collect();
    assert_eq!(variables, vec!["person", "marriage", "email"]);
}

#[test]
fn test_rule_conclusion_must_be_bound() {
    let when = Conjunction::new(vec![Pattern::Variable(var("x").isa(label("person")))]);
    let then = var("x").has("nickname", var("nick"));

    assert_eq!(
        Rule::new("nicknames", when, then).unwrap_err(),
        QueryError::invalid_rule_then_variables("nicknames", reference("nick"))
    );
}

#[test]
fn test_unlabelled_variable_deep_in_constraints_is_rejected() {
    init_logging();

    // person sub entity, plays $role; the unlabelled $role is only reachable through plays
    let role = var("role");
    let definables = vec![
        label("animal").sub(label("entity")).into(),
        label("person").sub(label("entity")).plays(role).into(),
    ];

    assert_eq!(
        DefinableQuery::define(definables).unwrap_err(),
        QueryError::invalid_define_query_variable(reference("role"))
    );
}

#[test]
fn test_undefine_requires_definables() {
    assert_eq!(
        DefinableQuery::undefine(Vec::new()).unwrap_err(),
        QueryError::MissingDefinables
    );

    let query = DefinableQuery::undefine(vec![Rule::label_only("obsolete").into()]).unwrap();
    assert_eq!(query.to_string(), "undefine rule obsolete;");
    assert_eq!(query.command(), SchemaCommand::Undefine);
    assert!(Query::from(query).query_type().is_write());
}
