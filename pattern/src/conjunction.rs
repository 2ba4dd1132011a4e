//! Conjunction: an ordered "and" of sub-patterns.

use crate::pattern::structural_hash;
use crate::{normalise, Normalised, PatternNode, Variable};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};
use tql_core::token;

/// Ordered sequence of sub-patterns that must all hold. May be empty.
///
/// Child order is part of structural identity and of the rendered text.
#[derive(Clone)]
pub struct Conjunction<T> {
    patterns: Vec<T>,
    hash: u64,
    normalised: OnceLock<Arc<Normalised>>,
}

impl<T: Hash> Conjunction<T> {
    pub fn new(patterns: Vec<T>) -> Self {
        let hash = structural_hash(&patterns);
        Self {
            patterns,
            hash,
            normalised: OnceLock::new(),
        }
    }
}

impl<T> Conjunction<T> {
    pub fn patterns(&self) -> &[T] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl<T: PatternNode> PatternNode for Conjunction<T> {
    fn normalise(&self) -> Arc<Normalised> {
        Arc::clone(
            self.normalised
                .get_or_init(|| Arc::new(normalise::conjunction(&self.patterns))),
        )
    }

    fn collect_variables<'a>(&'a self, out: &mut Vec<&'a Variable>) {
        for pattern in &self.patterns {
            pattern.collect_variables(out);
        }
    }

    fn collect_scoped_variables<'a>(&'a self, out: &mut Vec<&'a Variable>) {
        for pattern in &self.patterns {
            pattern.collect_scoped_variables(out);
        }
    }

    /// A conjunction inside a block contributes its children directly. An
    /// empty one still writes its terminator, giving `{ ; }`.
    fn fmt_block_body(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.patterns.is_empty() {
            return write!(f, "{}{}", token::SEMICOLON, token::SPACE);
        }
        for pattern in &self.patterns {
            write!(f, "{}{}{}", pattern, token::SEMICOLON, token::SPACE)?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Conjunction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", token::CURLY_OPEN, token::SPACE)?;
        for pattern in &self.patterns {
            write!(f, "{}{}{}", pattern, token::SEMICOLON, token::SPACE)?;
        }
        f.write_str(token::CURLY_CLOSE)
    }
}

impl<T: fmt::Debug> fmt::Debug for Conjunction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Conjunction").field(&self.patterns).finish()
    }
}

impl<T: PartialEq> PartialEq for Conjunction<T> {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.patterns == other.patterns
    }
}

impl<T: Eq> Eq for Conjunction<T> {}

impl<T> Hash for Conjunction<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: Hash> FromIterator<T> for Conjunction<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
