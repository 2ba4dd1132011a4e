//! Inference rules.

use crate::{QueryError, QueryResult};
use std::fmt;
use tql_core::token;
use tql_pattern::{Conjunction, Pattern, PatternError, PatternNode, Variable};

/// A rule: `rule label: when { ... } then { ...; }`.
///
/// Undefine queries only name the rule, so the body is optional.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    label: String,
    body: Option<RuleBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RuleBody {
    when: Conjunction<Pattern>,
    then: Variable,
}

impl Rule {
    /// A rule referenced by label only.
    pub fn label_only(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: None,
        }
    }

    /// A complete rule. `then` must conclude exactly one `has` or relation
    /// constraint, and every named variable in it must be bound by `when`.
    pub fn new(
        label: impl Into<String>,
        when: Conjunction<Pattern>,
        then: Variable,
    ) -> QueryResult<Self> {
        let label = label.into();

        let conclusions = then
            .constraints()
            .iter()
            .filter(|c| c.is_has() || c.is_relation())
            .count();
        if conclusions != 1 {
            return Err(QueryError::invalid_rule_then(label));
        }

        match then.validate_is_bound_by(&when.named_references()) {
            Ok(()) => {}
            Err(PatternError::UnboundVariableReference { reference }) => {
                return Err(QueryError::invalid_rule_then_variables(label, reference));
            }
            Err(e) => return Err(e.into()),
        }

        Ok(Self {
            label,
            body: Some(RuleBody { when, then }),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn when(&self) -> Option<&Conjunction<Pattern>> {
        self.body.as_ref().map(|body| &body.when)
    }

    pub fn then(&self) -> Option<&Variable> {
        self.body.as_ref().map(|body| &body.then)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", token::RULE, self.label)?;
        if let Some(body) = &self.body {
            write!(
                f,
                "{} {} {} {} {}{}{}{}{}{}",
                token::COLON,
                token::WHEN,
                body.when,
                token::THEN,
                token::CURLY_OPEN,
                token::SPACE,
                body.then,
                token::SEMICOLON,
                token::SPACE,
                token::CURLY_CLOSE
            )?;
        }
        Ok(())
    }
}
