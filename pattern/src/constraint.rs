//! Constraints attached to variables.
//!
//! The pattern algebra only relies on one property of a constraint: the set
//! of other variables it mentions. Everything else is carried for rendering.

use crate::Variable;
use std::fmt;
use tql_core::{token, Value, ValueType};

/// A single constraint on a variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constraint {
    // Concept constraints
    /// `is $y`
    Is(Box<Variable>),

    // Type constraints
    /// `type person` / `type marriage:husband`
    Label { scope: Option<String>, label: String },
    /// `sub entity`
    Sub(Box<Variable>),
    /// `abstract`
    Abstract,
    /// `owns name` / `owns email @key`
    Owns {
        attribute_type: Box<Variable>,
        is_key: bool,
    },
    /// `plays marriage:husband`
    Plays(Box<Variable>),
    /// `relates husband`
    Relates(Box<Variable>),
    /// `value string`
    ValueType(ValueType),
    /// `regex "..."`
    Regex(String),

    // Thing constraints
    /// `isa person` / `isa! person`
    Isa { type_: Box<Variable>, explicit: bool },
    /// `has name $n` / `has $n`
    Has {
        type_label: Option<String>,
        attribute: Box<Variable>,
    },
    /// `(employee: $x, $y)`
    Relation(Vec<RolePlayer>),
    /// `iid 0x...`
    Iid(String),
    /// `> 10`, `= $y`, `contains "a"`
    Value(Predicate),
}

/// Which family of variable a constraint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintScope {
    Concept,
    Type,
    Thing,
}

impl Constraint {
    pub fn scope(&self) -> ConstraintScope {
        match self {
            Constraint::Is(_) => ConstraintScope::Concept,
            Constraint::Label { .. }
            | Constraint::Sub(_)
            | Constraint::Abstract
            | Constraint::Owns { .. }
            | Constraint::Plays(_)
            | Constraint::Relates(_)
            | Constraint::ValueType(_)
            | Constraint::Regex(_) => ConstraintScope::Type,
            Constraint::Isa { .. }
            | Constraint::Has { .. }
            | Constraint::Relation(_)
            | Constraint::Iid(_)
            | Constraint::Value(_) => ConstraintScope::Thing,
        }
    }

    pub fn is_label(&self) -> bool {
        matches!(self, Constraint::Label { .. })
    }

    pub fn is_relation(&self) -> bool {
        matches!(self, Constraint::Relation(_))
    }

    pub fn is_has(&self) -> bool {
        matches!(self, Constraint::Has { .. })
    }

    /// The variables this constraint mentions, in declaration order.
    pub fn variables(&self) -> Vec<&Variable> {
        match self {
            Constraint::Is(var)
            | Constraint::Sub(var)
            | Constraint::Plays(var)
            | Constraint::Relates(var) => vec![var.as_ref()],
            Constraint::Owns { attribute_type, .. } => vec![attribute_type.as_ref()],
            Constraint::Isa { type_, .. } => vec![type_.as_ref()],
            Constraint::Has { attribute, .. } => vec![attribute.as_ref()],
            Constraint::Relation(players) => players.iter().flat_map(RolePlayer::variables).collect(),
            Constraint::Value(predicate) => predicate.variable().into_iter().collect(),
            Constraint::Label { .. }
            | Constraint::Abstract
            | Constraint::ValueType(_)
            | Constraint::Regex(_)
            | Constraint::Iid(_) => Vec::new(),
        }
    }

    /// Mutable view of `variables()`, in the same order.
    pub(crate) fn variables_mut(&mut self) -> Vec<&mut Variable> {
        match self {
            Constraint::Is(var)
            | Constraint::Sub(var)
            | Constraint::Plays(var)
            | Constraint::Relates(var) => vec![var.as_mut()],
            Constraint::Owns { attribute_type, .. } => vec![attribute_type.as_mut()],
            Constraint::Isa { type_, .. } => vec![type_.as_mut()],
            Constraint::Has { attribute, .. } => vec![attribute.as_mut()],
            Constraint::Relation(players) => players
                .iter_mut()
                .flat_map(|RolePlayer { role_type, player }| {
                    role_type
                        .as_deref_mut()
                        .into_iter()
                        .chain(Some(player.as_mut()))
                })
                .collect(),
            Constraint::Value(predicate) => match &mut predicate.value {
                PredicateValue::Variable(var) => vec![var.as_mut()],
                PredicateValue::Value(_) => Vec::new(),
            },
            Constraint::Label { .. }
            | Constraint::Abstract
            | Constraint::ValueType(_)
            | Constraint::Regex(_)
            | Constraint::Iid(_) => Vec::new(),
        }
    }

    /// Take ownership of the mentioned variables, in `variables()` order.
    pub(crate) fn into_variables(self) -> Vec<Variable> {
        match self {
            Constraint::Is(var)
            | Constraint::Sub(var)
            | Constraint::Plays(var)
            | Constraint::Relates(var) => vec![*var],
            Constraint::Owns { attribute_type, .. } => vec![*attribute_type],
            Constraint::Isa { type_, .. } => vec![*type_],
            Constraint::Has { attribute, .. } => vec![*attribute],
            Constraint::Relation(players) => players
                .into_iter()
                .flat_map(|player| {
                    player
                        .role_type
                        .map(|role_type| *role_type)
                        .into_iter()
                        .chain(Some(*player.player))
                })
                .collect(),
            Constraint::Value(predicate) => match predicate.value {
                PredicateValue::Variable(var) => vec![*var],
                PredicateValue::Value(_) => Vec::new(),
            },
            Constraint::Label { .. }
            | Constraint::Abstract
            | Constraint::ValueType(_)
            | Constraint::Regex(_)
            | Constraint::Iid(_) => Vec::new(),
        }
    }

    /// A copy of this constraint whose mentioned variables are bare
    /// placeholders carrying only their reference.
    pub(crate) fn shallow_clone(&self) -> Constraint {
        match self {
            Constraint::Is(var) => Constraint::Is(placeholder(var)),
            Constraint::Label { scope, label } => Constraint::Label {
                scope: scope.clone(),
                label: label.clone(),
            },
            Constraint::Sub(var) => Constraint::Sub(placeholder(var)),
            Constraint::Abstract => Constraint::Abstract,
            Constraint::Owns {
                attribute_type,
                is_key,
            } => Constraint::Owns {
                attribute_type: placeholder(attribute_type),
                is_key: *is_key,
            },
            Constraint::Plays(var) => Constraint::Plays(placeholder(var)),
            Constraint::Relates(var) => Constraint::Relates(placeholder(var)),
            Constraint::ValueType(value_type) => Constraint::ValueType(*value_type),
            Constraint::Regex(regex) => Constraint::Regex(regex.clone()),
            Constraint::Isa { type_, explicit } => Constraint::Isa {
                type_: placeholder(type_),
                explicit: *explicit,
            },
            Constraint::Has {
                type_label,
                attribute,
            } => Constraint::Has {
                type_label: type_label.clone(),
                attribute: placeholder(attribute),
            },
            Constraint::Relation(players) => Constraint::Relation(
                players
                    .iter()
                    .map(|player| RolePlayer {
                        role_type: player.role_type.as_deref().map(placeholder),
                        player: placeholder(&player.player),
                    })
                    .collect(),
            ),
            Constraint::Iid(iid) => Constraint::Iid(iid.clone()),
            Constraint::Value(predicate) => Constraint::Value(Predicate {
                comparator: predicate.comparator,
                value: match &predicate.value {
                    PredicateValue::Value(value) => PredicateValue::Value(value.clone()),
                    PredicateValue::Variable(var) => PredicateValue::Variable(placeholder(var)),
                },
            }),
        }
    }

    /// Equality of everything except the mentioned variables. When this
    /// holds, both sides mention the same number of variables.
    pub(crate) fn shallow_eq(&self, other: &Constraint) -> bool {
        match (self, other) {
            (Constraint::Is(_), Constraint::Is(_))
            | (Constraint::Sub(_), Constraint::Sub(_))
            | (Constraint::Abstract, Constraint::Abstract)
            | (Constraint::Plays(_), Constraint::Plays(_))
            | (Constraint::Relates(_), Constraint::Relates(_)) => true,
            (
                Constraint::Label { scope, label },
                Constraint::Label {
                    scope: other_scope,
                    label: other_label,
                },
            ) => scope == other_scope && label == other_label,
            (Constraint::Owns { is_key, .. }, Constraint::Owns { is_key: other, .. }) => {
                is_key == other
            }
            (Constraint::ValueType(a), Constraint::ValueType(b)) => a == b,
            (Constraint::Regex(a), Constraint::Regex(b)) => a == b,
            (Constraint::Isa { explicit, .. }, Constraint::Isa { explicit: other, .. }) => {
                explicit == other
            }
            (Constraint::Has { type_label, .. }, Constraint::Has { type_label: other, .. }) => {
                type_label == other
            }
            (Constraint::Relation(a), Constraint::Relation(b)) => {
                a.len() == b.len()
                    && a
                        .iter()
                        .zip(b)
                        .all(|(x, y)| x.role_type.is_some() == y.role_type.is_some())
            }
            (Constraint::Iid(a), Constraint::Iid(b)) => a == b,
            (Constraint::Value(a), Constraint::Value(b)) => {
                a.comparator == b.comparator
                    && match (&a.value, &b.value) {
                        (PredicateValue::Value(x), PredicateValue::Value(y)) => x == y,
                        (PredicateValue::Variable(_), PredicateValue::Variable(_)) => true,
                        _ => false,
                    }
            }
            _ => false,
        }
    }
}

fn placeholder(var: &Variable) -> Box<Variable> {
    Box::new(Variable::new(var.reference().clone()))
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Is(var) => write!(f, "{} {}", token::IS, var.head()),
            Constraint::Label { scope, label } => match scope {
                Some(scope) => write!(f, "{} {}{}{}", token::TYPE, scope, token::COLON, label),
                None => write!(f, "{} {}", token::TYPE, label),
            },
            Constraint::Sub(var) => write!(f, "{} {}", token::SUB, var.head()),
            Constraint::Abstract => f.write_str(token::ABSTRACT),
            Constraint::Owns {
                attribute_type,
                is_key,
            } => {
                write!(f, "{} {}", token::OWNS, attribute_type.head())?;
                if *is_key {
                    write!(f, " {}", token::ANNOTATION_KEY)?;
                }
                Ok(())
            }
            Constraint::Plays(var) => write!(f, "{} {}", token::PLAYS, var.head()),
            Constraint::Relates(var) => write!(f, "{} {}", token::RELATES, var.head()),
            Constraint::ValueType(value_type) => write!(f, "{} {}", token::VALUE, value_type),
            Constraint::Regex(regex) => {
                write!(f, "{} {}", token::REGEX, Value::from(regex.as_str()))
            }
            Constraint::Isa { type_, explicit } => {
                let keyword = if *explicit { token::ISAX } else { token::ISA };
                write!(f, "{} {}", keyword, type_.head())
            }
            Constraint::Has {
                type_label,
                attribute,
            } => match type_label {
                Some(label) => write!(f, "{} {} {}", token::HAS, label, attribute.head()),
                None => write!(f, "{} {}", token::HAS, attribute.head()),
            },
            Constraint::Relation(players) => {
                f.write_str(token::PARAN_OPEN)?;
                for (i, player) in players.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{} ", token::COMMA)?;
                    }
                    write!(f, "{}", player)?;
                }
                f.write_str(token::PARAN_CLOSE)
            }
            Constraint::Iid(iid) => write!(f, "{} {}", token::IID, iid),
            Constraint::Value(predicate) => write!(f, "{}", predicate),
        }
    }
}

/// A player in a relation constraint, optionally with its role type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RolePlayer {
    pub role_type: Option<Box<Variable>>,
    pub player: Box<Variable>,
}

impl RolePlayer {
    pub fn new(player: Variable) -> Self {
        Self {
            role_type: None,
            player: Box::new(player),
        }
    }

    pub fn with_role(role_type: Variable, player: Variable) -> Self {
        Self {
            role_type: Some(Box::new(role_type)),
            player: Box::new(player),
        }
    }

    pub fn variables(&self) -> Vec<&Variable> {
        let mut vars: Vec<&Variable> = self.role_type.iter().map(|r| r.as_ref()).collect();
        vars.push(self.player.as_ref());
        vars
    }
}

impl fmt::Display for RolePlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(role_type) = &self.role_type {
            write!(f, "{}{} ", role_type.head(), token::COLON)?;
        }
        write!(f, "{}", self.player.head())
    }
}

/// Comparison operator of a value predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Contains,
    Like,
}

impl Comparator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Eq => "=",
            Comparator::Neq => "!=",
            Comparator::Gt => ">",
            Comparator::Gte => ">=",
            Comparator::Lt => "<",
            Comparator::Lte => "<=",
            Comparator::Contains => "contains",
            Comparator::Like => "like",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Right-hand side of a value predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PredicateValue {
    Value(Value),
    Variable(Box<Variable>),
}

/// A value comparison such as `> 10` or `= $y`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Predicate {
    pub comparator: Comparator,
    pub value: PredicateValue,
}

impl Predicate {
    pub fn new(comparator: Comparator, value: impl Into<Value>) -> Self {
        Self {
            comparator,
            value: PredicateValue::Value(value.into()),
        }
    }

    pub fn variable(&self) -> Option<&Variable> {
        match &self.value {
            PredicateValue::Variable(var) => Some(var),
            PredicateValue::Value(_) => None,
        }
    }

    pub fn against(comparator: Comparator, var: Variable) -> Self {
        Self {
            comparator,
            value: PredicateValue::Variable(Box::new(var)),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            PredicateValue::Value(value) => write!(f, "{} {}", self.comparator, value),
            PredicateValue::Variable(var) => write!(f, "{} {}", self.comparator, var.head()),
        }
    }
}
