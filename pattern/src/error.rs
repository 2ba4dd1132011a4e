//! Pattern error types.

use thiserror::Error;
use tql_core::{CoreError, Reference};

/// Errors that can occur while building or validating patterns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A disjunction needs at least one disjunct.
    #[error("Disjunction must have at least one pattern")]
    EmptyDisjunction,

    /// `not { not { ... } }` adds nothing over the inner pattern.
    #[error("Redundant nested negation")]
    RedundantNestedNegation,

    /// A variable is used but is neither declared locally nor bound outside.
    #[error("Unbound variable reference '{reference}'")]
    UnboundVariableReference { reference: Reference },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PatternError {
    pub fn unbound_variable_reference(reference: Reference) -> Self {
        Self::UnboundVariableReference { reference }
    }
}

/// Result type for pattern operations.
pub type PatternResult<T> = Result<T, PatternError>;
