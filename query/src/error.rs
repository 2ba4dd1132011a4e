//! Query error types.

use thiserror::Error;
use tql_core::Reference;
use tql_pattern::PatternError;

/// Result type for query construction.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur while building a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Define and undefine queries require at least one definable")]
    MissingDefinables,

    #[error("Variable '{reference}' in a define or undefine query must be labelled")]
    InvalidDefineQueryVariable { reference: Reference },

    #[error("Rule '{label}' must conclude a single 'has' or relation constraint")]
    InvalidRuleThen { label: String },

    #[error("Rule '{label}' concludes '{reference}', which its 'when' does not bind")]
    InvalidRuleThenVariables { label: String, reference: Reference },

    #[error("Match query pattern must bind at least one named variable")]
    MatchHasNoNamedVariable,

    #[error("Variable '{reference}' is out of scope of the match pattern")]
    VariableOutOfScope { reference: Reference },

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

impl QueryError {
    pub fn invalid_define_query_variable(reference: Reference) -> Self {
        Self::InvalidDefineQueryVariable { reference }
    }

    pub fn invalid_rule_then(label: impl Into<String>) -> Self {
        Self::InvalidRuleThen {
            label: label.into(),
        }
    }

    pub fn invalid_rule_then_variables(label: impl Into<String>, reference: Reference) -> Self {
        Self::InvalidRuleThenVariables {
            label: label.into(),
            reference,
        }
    }

    pub fn variable_out_of_scope(reference: Reference) -> Self {
        Self::VariableOutOfScope { reference }
    }
}
