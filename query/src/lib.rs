//! TQL Query
//!
//! Top-level queries built from validated patterns.
//!
//! Responsibilities:
//! - Classify queries as read or write
//! - Validate define and undefine queries over type variables and rules
//! - Validate match queries and their answer modifiers
//! - Render queries as canonical text

mod definable;
mod error;
mod match_query;
mod rule;
mod schema;

pub use definable::Definable;
pub use error::{QueryError, QueryResult};
pub use match_query::MatchQuery;
pub use rule::Rule;
pub use schema::{DefinableQuery, SchemaCommand};

use std::fmt;
use tql_core::QueryType;

/// Any query the language supports.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Query {
    Match(MatchQuery),
    Define(DefinableQuery),
    Undefine(DefinableQuery),
}

impl Query {
    pub fn query_type(&self) -> QueryType {
        match self {
            Query::Match(query) => query.query_type(),
            Query::Define(query) | Query::Undefine(query) => query.query_type(),
        }
    }

    pub fn as_match(&self) -> Option<&MatchQuery> {
        match self {
            Query::Match(query) => Some(query),
            _ => None,
        }
    }

    pub fn as_definable(&self) -> Option<&DefinableQuery> {
        match self {
            Query::Define(query) | Query::Undefine(query) => Some(query),
            Query::Match(_) => None,
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Match(query) => query.fmt(f),
            Query::Define(query) | Query::Undefine(query) => query.fmt(f),
        }
    }
}

impl From<MatchQuery> for Query {
    fn from(query: MatchQuery) -> Self {
        Query::Match(query)
    }
}

impl From<DefinableQuery> for Query {
    fn from(query: DefinableQuery) -> Self {
        match query.command() {
            SchemaCommand::Define => Query::Define(query),
            SchemaCommand::Undefine => Query::Undefine(query),
        }
    }
}
