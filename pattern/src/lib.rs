//! TQL Pattern
//!
//! Logical query patterns and the passes that run over them.
//!
//! Responsibilities:
//! - Represent variables and their constraints
//! - Represent conjunctions, disjunctions and negations of patterns
//! - Normalise any pattern into a disjunction of conjunctions
//! - Validate that every variable a pattern uses is bound
//! - Render patterns as canonical text

mod binding;
mod conjunction;
mod constraint;
mod disjunction;
mod error;
mod negation;
mod normalise;
mod pattern;
mod variable;

pub use binding::{named_references, validate_is_bound_by};
pub use conjunction::Conjunction;
pub use constraint::{
    Comparator, Constraint, ConstraintScope, Predicate, PredicateValue, RolePlayer,
};
pub use disjunction::Disjunction;
pub use error::{PatternError, PatternResult};
pub use negation::Negation;
pub use pattern::{Conjunctable, Normalised, Pattern, PatternNode};
pub use variable::{Reachable, Variable};
