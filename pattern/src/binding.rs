//! Variable binding validation.
//!
//! A pattern is bound by a set of references when every named variable it
//! uses, including those reached through constraints, is in that set. Label
//! and anonymous references declare themselves and are always bound.

use crate::{PatternError, PatternNode, PatternResult, Reachable, Variable};
use std::collections::HashSet;
use tql_core::Reference;

/// Fail with the first named reference used in `pattern` that is not in `bounds`.
///
/// Variables the pattern declares itself count as bound only when the caller
/// includes them in `bounds`, typically from [`named_references`].
pub fn validate_is_bound_by<P: PatternNode>(
    pattern: &P,
    bounds: &HashSet<Reference>,
) -> PatternResult<()> {
    for variable in Reachable::new(pattern.all_variables()) {
        let reference = variable.reference();
        if reference.is_name() && !bounds.contains(reference) {
            log::debug!("unbound variable reference {} in {}", reference, pattern);
            return Err(PatternError::unbound_variable_reference(reference.clone()));
        }
    }
    Ok(())
}

/// Named references `pattern` binds for its enclosing scope.
pub fn named_references<P: PatternNode>(pattern: &P) -> HashSet<Reference> {
    let mut scoped = Vec::new();
    pattern.collect_scoped_variables(&mut scoped);
    Reachable::new(scoped)
        .map(Variable::reference)
        .filter(|reference| reference.is_name())
        .cloned()
        .collect()
}
