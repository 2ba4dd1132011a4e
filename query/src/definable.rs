//! Schema elements usable in define and undefine queries.

use crate::Rule;
use std::fmt;
use tql_pattern::Variable;

/// A type-variable definition or a rule definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Definable {
    TypeVariable(Variable),
    Rule(Rule),
}

impl Definable {
    pub fn is_type_variable(&self) -> bool {
        matches!(self, Definable::TypeVariable(_))
    }

    pub fn is_rule(&self) -> bool {
        matches!(self, Definable::Rule(_))
    }

    pub fn as_type_variable(&self) -> Option<&Variable> {
        match self {
            Definable::TypeVariable(variable) => Some(variable),
            _ => None,
        }
    }

    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Definable::Rule(rule) => Some(rule),
            _ => None,
        }
    }
}

impl fmt::Display for Definable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Definable::TypeVariable(variable) => variable.fmt(f),
            Definable::Rule(rule) => rule.fmt(f),
        }
    }
}

impl From<Variable> for Definable {
    fn from(variable: Variable) -> Self {
        Definable::TypeVariable(variable)
    }
}

impl From<Rule> for Definable {
    fn from(rule: Rule) -> Self {
        Definable::Rule(rule)
    }
}
