//! TQL Tests
//!
//! Integration test framework for TQL.
//!
//! Responsibilities:
//! - Build patterns concisely through fixtures
//! - Describe scenarios as ordered, named assertion steps
//! - Install a test logger for scenario runs

mod assertion;
mod error;
mod fixture;
mod scenario;

pub use assertion::Assertion;
pub use error::{ScenarioError, ScenarioResult};
pub use fixture::{conj, disj, not, p, reference, var};
pub use scenario::Scenario;

/// Install `env_logger` in test mode. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub mod prelude {
    pub use crate::{
        conj, disj, init_logging, not, p, reference, var, Assertion, Scenario, ScenarioError,
    };
    pub use tql_core::{Order, QueryType, Reference};
    pub use tql_pattern::{
        Conjunction, Disjunction, Negation, Pattern, PatternError, PatternNode, RolePlayer,
        Variable,
    };
    pub use tql_query::{
        Definable, DefinableQuery, MatchQuery, Query, QueryError, Rule, SchemaCommand,
    };
}
