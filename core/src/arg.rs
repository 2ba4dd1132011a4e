//! Small argument enumerations shared by patterns and queries.

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a query only reads or also writes.
///
/// The numeric ids are part of the wire format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum QueryType {
    Read,
    Write,
}

impl QueryType {
    pub const ALL: [QueryType; 2] = [QueryType::Read, QueryType::Write];

    pub fn id(&self) -> u8 {
        match self {
            QueryType::Read => 0,
            QueryType::Write => 1,
        }
    }

    /// Look up a query type by wire id.
    pub fn of(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    pub fn is_read(&self) -> bool {
        !self.is_write()
    }

    pub fn is_write(&self) -> bool {
        matches!(self, QueryType::Write)
    }
}

impl From<QueryType> for u8 {
    fn from(t: QueryType) -> Self {
        t.id()
    }
}

impl TryFrom<u8> for QueryType {
    type Error = CoreError;

    fn try_from(id: u8) -> CoreResult<Self> {
        Self::of(id).ok_or_else(|| CoreError::unknown_query_type(id))
    }
}

/// Value type of an attribute type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Boolean,
    DateTime,
    Double,
    Long,
    String,
}

impl ValueType {
    pub const ALL: [ValueType; 5] = [
        ValueType::Boolean,
        ValueType::DateTime,
        ValueType::Double,
        ValueType::Long,
        ValueType::String,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Boolean => "boolean",
            ValueType::DateTime => "datetime",
            ValueType::Double => "double",
            ValueType::Long => "long",
            ValueType::String => "string",
        }
    }

    pub fn of(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }

    pub fn of(value: &str) -> Option<Self> {
        [Order::Asc, Order::Desc]
            .into_iter()
            .find(|o| o.as_str() == value)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
