//! Negation: "not" of exactly one sub-pattern.

use crate::pattern::structural_hash;
use crate::{
    normalise, Conjunctable, Normalised, PatternError, PatternNode, PatternResult, Variable,
};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};
use tql_core::token;

/// Wraps one sub-pattern that must not hold.
#[derive(Clone)]
pub struct Negation<T> {
    pattern: Box<T>,
    hash: u64,
    normalised: OnceLock<Arc<Normalised>>,
}

impl<T: PatternNode> Negation<T> {
    pub fn new(pattern: T) -> PatternResult<Self> {
        if pattern.is_negation() {
            return Err(PatternError::RedundantNestedNegation);
        }
        Ok(Self::wrap(pattern))
    }
}

impl<T: Hash> Negation<T> {
    fn wrap(pattern: T) -> Self {
        let hash = structural_hash(&pattern);
        Self {
            pattern: Box::new(pattern),
            hash,
            normalised: OnceLock::new(),
        }
    }
}

impl<T> Negation<T> {
    pub fn pattern(&self) -> &T {
        &self.pattern
    }
}

impl<T: PatternNode> PatternNode for Negation<T> {
    /// The interior is normalised; the negation itself stays an opaque leaf.
    fn normalise(&self) -> Arc<Normalised> {
        Arc::clone(self.normalised.get_or_init(|| {
            let inner = self.pattern.normalise();
            let negation = Negation::wrap(inner.as_ref().clone());
            Arc::new(normalise::leaf(Conjunctable::Negation(negation)))
        }))
    }

    fn collect_variables<'a>(&'a self, out: &mut Vec<&'a Variable>) {
        self.pattern.collect_variables(out);
    }

    fn is_negation(&self) -> bool {
        true
    }
}

impl<T: PatternNode> fmt::Display for Negation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{}", token::NOT, token::CURLY_OPEN, token::SPACE)?;
        self.pattern.fmt_negated_body(f)?;
        f.write_str(token::CURLY_CLOSE)
    }
}

impl<T: fmt::Debug> fmt::Debug for Negation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Negation").field(&self.pattern).finish()
    }
}

impl<T: PartialEq> PartialEq for Negation<T> {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.pattern == other.pattern
    }
}

impl<T: Eq> Eq for Negation<T> {}

impl<T> Hash for Negation<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}
