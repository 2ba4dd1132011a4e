//! Match queries: a pattern plus optional answer modifiers.

use crate::{QueryError, QueryResult};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tql_core::{token, Order, QueryType, Reference};
use tql_pattern::{Conjunction, Normalised, Pattern, PatternNode};

/// `match <pattern>; get ...; sort ...; offset n; limit n;`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchQuery {
    pattern: Conjunction<Pattern>,
    filter: Vec<Reference>,
    sorting: Vec<(Reference, Order)>,
    offset: Option<u64>,
    limit: Option<u64>,
}

impl MatchQuery {
    /// The pattern must bind at least one named variable.
    pub fn new(pattern: Conjunction<Pattern>) -> QueryResult<Self> {
        if pattern.named_references().is_empty() {
            return Err(QueryError::MatchHasNoNamedVariable);
        }
        Ok(Self {
            pattern,
            filter: Vec::new(),
            sorting: Vec::new(),
            offset: None,
            limit: None,
        })
    }

    /// Restrict answers to `references`, each of which must be bound by the pattern.
    pub fn get(mut self, references: Vec<Reference>) -> QueryResult<Self> {
        self.check_in_scope(&references)?;
        self.filter = references;
        Ok(self)
    }

    /// Sort answers by `keys`, each of which must be bound by the pattern.
    pub fn sort(mut self, keys: Vec<(Reference, Order)>) -> QueryResult<Self> {
        self.check_in_scope(keys.iter().map(|(reference, _)| reference))?;
        self.sorting = keys;
        Ok(self)
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    fn check_in_scope<'a>(
        &self,
        references: impl IntoIterator<Item = &'a Reference>,
    ) -> QueryResult<()> {
        let scope: HashSet<Reference> = self.pattern.named_references();
        for reference in references {
            if !scope.contains(reference) {
                log::debug!("{} is not bound by {}", reference, self.pattern);
                return Err(QueryError::variable_out_of_scope(reference.clone()));
            }
        }
        Ok(())
    }

    pub fn pattern(&self) -> &Conjunction<Pattern> {
        &self.pattern
    }

    pub fn filter(&self) -> &[Reference] {
        &self.filter
    }

    pub fn sorting(&self) -> &[(Reference, Order)] {
        &self.sorting
    }

    pub fn offset_value(&self) -> Option<u64> {
        self.offset
    }

    pub fn limit_value(&self) -> Option<u64> {
        self.limit
    }

    /// The pattern in disjunctive normal form, computed once.
    pub fn normalised(&self) -> Arc<Normalised> {
        self.pattern.normalise()
    }

    pub fn query_type(&self) -> QueryType {
        QueryType::Read
    }
}

impl fmt::Display for MatchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(token::MATCH)?;
        for pattern in self.pattern.patterns() {
            write!(f, "{}{}{}", token::NEW_LINE, pattern, token::SEMICOLON)?;
        }
        if !self.filter.is_empty() {
            write!(f, "{}{} ", token::NEW_LINE, token::GET)?;
            for (i, reference) in self.filter.iter().enumerate() {
                if i > 0 {
                    write!(f, "{}{}", token::COMMA, token::SPACE)?;
                }
                write!(f, "{}", reference)?;
            }
            f.write_str(token::SEMICOLON)?;
        }
        if !self.sorting.is_empty() {
            write!(f, "{}{} ", token::NEW_LINE, token::SORT)?;
            for (i, (reference, order)) in self.sorting.iter().enumerate() {
                if i > 0 {
                    write!(f, "{}{}", token::COMMA, token::SPACE)?;
                }
                write!(f, "{} {}", reference, order)?;
            }
            f.write_str(token::SEMICOLON)?;
        }
        if let Some(offset) = self.offset {
            write!(f, "{}{} {}{}", token::NEW_LINE, token::OFFSET, offset, token::SEMICOLON)?;
        }
        if let Some(limit) = self.limit {
            write!(f, "{}{} {}{}", token::NEW_LINE, token::LIMIT, limit, token::SEMICOLON)?;
        }
        Ok(())
    }
}
