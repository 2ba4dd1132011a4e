//! Define and undefine queries.

use crate::{Definable, QueryError, QueryResult, Rule};
use std::collections::VecDeque;
use std::fmt;
use tql_core::{token, QueryType};
use tql_pattern::Variable;

/// Which schema operation a definable query performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaCommand {
    Define,
    Undefine,
}

impl SchemaCommand {
    pub fn keyword(&self) -> &'static str {
        match self {
            SchemaCommand::Define => token::DEFINE,
            SchemaCommand::Undefine => token::UNDEFINE,
        }
    }
}

impl fmt::Display for SchemaCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A `define` or `undefine` query over an ordered list of definables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DefinableQuery {
    command: SchemaCommand,
    definables: Vec<Definable>,
}

impl DefinableQuery {
    pub fn define(definables: Vec<Definable>) -> QueryResult<Self> {
        Self::new(SchemaCommand::Define, definables)
    }

    pub fn undefine(definables: Vec<Definable>) -> QueryResult<Self> {
        Self::new(SchemaCommand::Undefine, definables)
    }

    pub fn new(command: SchemaCommand, definables: Vec<Definable>) -> QueryResult<Self> {
        if definables.is_empty() {
            return Err(QueryError::MissingDefinables);
        }
        let query = Self {
            command,
            definables,
        };
        query.validate_type_variables()?;
        Ok(query)
    }

    /// Every type variable, and every variable its constraints reach, must
    /// be labelled.
    fn validate_type_variables(&self) -> QueryResult<()> {
        let mut queue: VecDeque<&Variable> = self.variables().collect();
        while let Some(variable) = queue.pop_front() {
            if !variable.is_labelled() {
                log::debug!(
                    "{} query rejects unlabelled variable {}",
                    self.command,
                    variable.reference()
                );
                return Err(QueryError::invalid_define_query_variable(
                    variable.reference().clone(),
                ));
            }
            queue.extend(variable.variables());
        }
        Ok(())
    }

    pub fn command(&self) -> SchemaCommand {
        self.command
    }

    pub fn definables(&self) -> &[Definable] {
        &self.definables
    }

    /// Type-variable definitions, in encounter order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.definables.iter().filter_map(Definable::as_type_variable)
    }

    /// Rule definitions, in encounter order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.definables.iter().filter_map(Definable::as_rule)
    }

    pub fn query_type(&self) -> QueryType {
        QueryType::Write
    }
}

impl fmt::Display for DefinableQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command.keyword())?;
        if self.definables.len() > 1 {
            f.write_str(token::NEW_LINE)?;
        } else {
            f.write_str(token::SPACE)?;
        }
        for (i, definable) in self.definables.iter().enumerate() {
            if i > 0 {
                write!(f, "{}{}", token::SEMICOLON, token::NEW_LINE)?;
            }
            write!(f, "{}", definable)?;
        }
        f.write_str(token::SEMICOLON)
    }
}
