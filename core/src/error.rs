//! Core error types.

use thiserror::Error;

/// Errors raised while building references and arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Variable name does not match the identifier grammar.
    #[error("Invalid variable name '{name}': must match '{pattern}'")]
    InvalidIdentifier { name: String, pattern: String },

    /// Narrowing accessor called on the wrong variant.
    #[error("Invalid cast from {from} to {to}")]
    InvalidCast {
        from: &'static str,
        to: &'static str,
    },

    /// Wire id that does not map to any query type.
    #[error("Unknown query type id {id}")]
    UnknownQueryType { id: u8 },
}

impl CoreError {
    pub fn invalid_identifier(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    pub fn invalid_cast(from: &'static str, to: &'static str) -> Self {
        Self::InvalidCast { from, to }
    }

    pub fn unknown_query_type(id: u8) -> Self {
        Self::UnknownQueryType { id }
    }
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
