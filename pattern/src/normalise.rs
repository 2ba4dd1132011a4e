//! Rewriting patterns into disjunctive normal form.
//!
//! The result is always a disjunction whose disjuncts are conjunctions of
//! variables and negations. Disjunctions are flattened; a disjunction nested
//! in a conjunction is distributed over its siblings.

use crate::{Conjunctable, Conjunction, Disjunction, Normalised, PatternNode};

/// `[[leaf]]`
pub(crate) fn leaf(conjunctable: Conjunctable) -> Normalised {
    Disjunction::from_disjuncts(vec![Conjunction::new(vec![conjunctable])])
}

/// Cartesian product over the children's disjuncts, in child order. Each
/// combination concatenates the chosen conjunctions into one.
pub(crate) fn conjunction<T: PatternNode>(patterns: &[T]) -> Normalised {
    let mut combinations: Vec<Vec<Conjunctable>> = vec![Vec::new()];
    for pattern in patterns {
        let normalised = pattern.normalise();
        let mut next = Vec::with_capacity(combinations.len() * normalised.len());
        for prefix in &combinations {
            for disjunct in normalised.patterns() {
                let mut combination = prefix.clone();
                combination.extend(disjunct.patterns().iter().cloned());
                next.push(combination);
            }
        }
        combinations = next;
    }
    log::debug!(
        "normalised conjunction of {} patterns into {} disjuncts",
        patterns.len(),
        combinations.len()
    );
    Disjunction::from_disjuncts(combinations.into_iter().map(Conjunction::new).collect())
}

/// Flat union of the children's disjuncts, in child order.
pub(crate) fn disjunction<T: PatternNode>(patterns: &[T]) -> Normalised {
    let disjuncts: Vec<Conjunction<Conjunctable>> = patterns
        .iter()
        .flat_map(|pattern| pattern.normalise().patterns().to_vec())
        .collect();
    log::debug!(
        "normalised disjunction of {} patterns into {} disjuncts",
        patterns.len(),
        disjuncts.len()
    );
    Disjunction::from_disjuncts(disjuncts)
}
