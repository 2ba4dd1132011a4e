//! Shorthand constructors for building patterns in tests.

use tql_core::Reference;
use tql_pattern::{Conjunction, Disjunction, Negation, Pattern, Variable};

/// `$name`. Panics on an invalid name.
pub fn var(name: &str) -> Variable {
    Variable::named(name).unwrap_or_else(|e| panic!("invalid fixture variable: {}", e))
}

/// A reference `$name`. Panics on an invalid name.
pub fn reference(name: &str) -> Reference {
    Reference::named(name).unwrap_or_else(|e| panic!("invalid fixture reference: {}", e))
}

/// `$name` as a pattern.
pub fn p(name: &str) -> Pattern {
    Pattern::Variable(var(name))
}

pub fn conj(patterns: Vec<Pattern>) -> Pattern {
    Pattern::Conjunction(Conjunction::new(patterns))
}

/// Panics on an empty list.
pub fn disj(patterns: Vec<Pattern>) -> Pattern {
    Pattern::Disjunction(
        Disjunction::new(patterns).unwrap_or_else(|e| panic!("invalid fixture disjunction: {}", e)),
    )
}

/// Panics when `pattern` is itself a negation.
pub fn not(pattern: Pattern) -> Pattern {
    Pattern::Negation(
        Negation::new(pattern).unwrap_or_else(|e| panic!("invalid fixture negation: {}", e)),
    )
}
