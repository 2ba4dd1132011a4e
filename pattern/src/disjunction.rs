//! Disjunction: an ordered, non-empty "or" of sub-patterns.

use crate::pattern::structural_hash;
use crate::{normalise, Normalised, PatternError, PatternNode, PatternResult, Variable};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};
use tql_core::token;

/// Ordered sequence of alternatives; at least one is required.
#[derive(Clone)]
pub struct Disjunction<T> {
    patterns: Vec<T>,
    hash: u64,
    normalised: OnceLock<Arc<Normalised>>,
}

impl<T: Hash> Disjunction<T> {
    pub fn new(patterns: Vec<T>) -> PatternResult<Self> {
        if patterns.is_empty() {
            return Err(PatternError::EmptyDisjunction);
        }
        Ok(Self::from_disjuncts(patterns))
    }

    /// Callers guarantee `patterns` is non-empty.
    pub(crate) fn from_disjuncts(patterns: Vec<T>) -> Self {
        debug_assert!(!patterns.is_empty());
        let hash = structural_hash(&patterns);
        Self {
            patterns,
            hash,
            normalised: OnceLock::new(),
        }
    }
}

impl<T> Disjunction<T> {
    pub fn patterns(&self) -> &[T] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}

impl<T: PatternNode> PatternNode for Disjunction<T> {
    fn normalise(&self) -> Arc<Normalised> {
        Arc::clone(
            self.normalised
                .get_or_init(|| Arc::new(normalise::disjunction(&self.patterns))),
        )
    }

    fn collect_variables<'a>(&'a self, out: &mut Vec<&'a Variable>) {
        for pattern in &self.patterns {
            pattern.collect_variables(out);
        }
    }

    /// A negated single alternative is written without braces of its own.
    fn fmt_negated_body(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patterns.as_slice() {
            [only] => only.fmt_block_body(f),
            _ => self.fmt_block_body(f),
        }
    }
}

impl<T: PatternNode> fmt::Display for Disjunction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i > 0 {
                write!(f, "{}{}{}", token::SPACE, token::OR, token::SPACE)?;
            }
            write!(f, "{}{}", token::CURLY_OPEN, token::SPACE)?;
            pattern.fmt_block_body(f)?;
            f.write_str(token::CURLY_CLOSE)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for Disjunction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Disjunction").field(&self.patterns).finish()
    }
}

impl<T: PartialEq> PartialEq for Disjunction<T> {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.patterns == other.patterns
    }
}

impl<T: Eq> Eq for Disjunction<T> {}

impl<T> Hash for Disjunction<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}
