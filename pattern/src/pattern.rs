//! The pattern sum type and the behaviour shared by every pattern node.

use crate::{binding, normalise, Conjunction, Disjunction, Negation, PatternResult, Variable};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tql_core::{token, Reference};

/// The canonical shape every pattern normalises to: a disjunction of
/// conjunctions of conjunctable leaves.
pub type Normalised = Disjunction<Conjunction<Conjunctable>>;

/// Behaviour shared by every node of a pattern tree.
pub trait PatternNode: fmt::Display + fmt::Debug + Clone + Eq + Hash {
    /// Rewrite this pattern into its canonical disjunctive form.
    fn normalise(&self) -> Arc<Normalised>;

    /// Push every variable occurring anywhere in this pattern, in order.
    fn collect_variables<'a>(&'a self, out: &mut Vec<&'a Variable>);

    /// Push the variables this pattern binds for its enclosing scope.
    /// Disjunction and negation bodies bind nothing outward.
    fn collect_scoped_variables<'a>(&'a self, _out: &mut Vec<&'a Variable>) {}

    fn is_negation(&self) -> bool {
        false
    }

    /// Write this pattern as it appears inside a `{ ... }` block.
    fn fmt_block_body(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self, token::SEMICOLON, token::SPACE)
    }

    /// Write this pattern as the body of a `not { ... }` block.
    fn fmt_negated_body(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_block_body(f)
    }

    fn all_variables(&self) -> Vec<&Variable> {
        let mut out = Vec::new();
        self.collect_variables(&mut out);
        out
    }

    /// Check that every named variable used in this pattern is in `bounds`.
    fn validate_is_bound_by(&self, bounds: &HashSet<Reference>) -> PatternResult<()> {
        binding::validate_is_bound_by(self, bounds)
    }

    /// Named references this pattern binds for its enclosing scope.
    fn named_references(&self) -> HashSet<Reference> {
        binding::named_references(self)
    }
}

pub(crate) fn structural_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Any pattern, as produced by a parser or builder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    Conjunction(Conjunction<Pattern>),
    Disjunction(Disjunction<Pattern>),
    Negation(Negation<Pattern>),
    Variable(Variable),
}

impl Pattern {
    pub fn is_conjunction(&self) -> bool {
        matches!(self, Pattern::Conjunction(_))
    }

    pub fn is_disjunction(&self) -> bool {
        matches!(self, Pattern::Disjunction(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Pattern::Variable(_))
    }

    pub fn as_conjunction(&self) -> Option<&Conjunction<Pattern>> {
        match self {
            Pattern::Conjunction(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_disjunction(&self) -> Option<&Disjunction<Pattern>> {
        match self {
            Pattern::Disjunction(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_negation(&self) -> Option<&Negation<Pattern>> {
        match self {
            Pattern::Negation(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Pattern::Variable(v) => Some(v),
            _ => None,
        }
    }
}

impl PatternNode for Pattern {
    fn normalise(&self) -> Arc<Normalised> {
        match self {
            Pattern::Conjunction(c) => c.normalise(),
            Pattern::Disjunction(d) => d.normalise(),
            Pattern::Negation(n) => n.normalise(),
            Pattern::Variable(v) => v.normalise(),
        }
    }

    fn collect_variables<'a>(&'a self, out: &mut Vec<&'a Variable>) {
        match self {
            Pattern::Conjunction(c) => c.collect_variables(out),
            Pattern::Disjunction(d) => d.collect_variables(out),
            Pattern::Negation(n) => n.collect_variables(out),
            Pattern::Variable(v) => v.collect_variables(out),
        }
    }

    fn collect_scoped_variables<'a>(&'a self, out: &mut Vec<&'a Variable>) {
        match self {
            Pattern::Conjunction(c) => c.collect_scoped_variables(out),
            Pattern::Disjunction(d) => d.collect_scoped_variables(out),
            Pattern::Negation(n) => n.collect_scoped_variables(out),
            Pattern::Variable(v) => v.collect_scoped_variables(out),
        }
    }

    fn is_negation(&self) -> bool {
        matches!(self, Pattern::Negation(_))
    }

    fn fmt_block_body(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Conjunction(c) => c.fmt_block_body(f),
            Pattern::Disjunction(d) => d.fmt_block_body(f),
            Pattern::Negation(n) => n.fmt_block_body(f),
            Pattern::Variable(v) => v.fmt_block_body(f),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Conjunction(c) => write!(f, "{}", c),
            Pattern::Disjunction(d) => write!(f, "{}", d),
            Pattern::Negation(n) => write!(f, "{}", n),
            Pattern::Variable(v) => write!(f, "{}", v),
        }
    }
}

impl From<Variable> for Pattern {
    fn from(v: Variable) -> Self {
        Pattern::Variable(v)
    }
}

impl From<Conjunction<Pattern>> for Pattern {
    fn from(c: Conjunction<Pattern>) -> Self {
        Pattern::Conjunction(c)
    }
}

impl From<Disjunction<Pattern>> for Pattern {
    fn from(d: Disjunction<Pattern>) -> Self {
        Pattern::Disjunction(d)
    }
}

impl From<Negation<Pattern>> for Pattern {
    fn from(n: Negation<Pattern>) -> Self {
        Pattern::Negation(n)
    }
}

/// A leaf allowed directly inside a normalised conjunction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Conjunctable {
    Variable(Variable),
    Negation(Negation<Normalised>),
    Conjunction(Conjunction<Conjunctable>),
}

impl Conjunctable {
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Conjunctable::Variable(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_negation(&self) -> Option<&Negation<Normalised>> {
        match self {
            Conjunctable::Negation(n) => Some(n),
            _ => None,
        }
    }
}

impl PatternNode for Conjunctable {
    fn normalise(&self) -> Arc<Normalised> {
        match self {
            Conjunctable::Variable(v) => v.normalise(),
            Conjunctable::Negation(n) => n.normalise(),
            Conjunctable::Conjunction(c) => c.normalise(),
        }
    }

    fn collect_variables<'a>(&'a self, out: &mut Vec<&'a Variable>) {
        match self {
            Conjunctable::Variable(v) => v.collect_variables(out),
            Conjunctable::Negation(n) => n.collect_variables(out),
            Conjunctable::Conjunction(c) => c.collect_variables(out),
        }
    }

    fn collect_scoped_variables<'a>(&'a self, out: &mut Vec<&'a Variable>) {
        match self {
            Conjunctable::Variable(v) => v.collect_scoped_variables(out),
            Conjunctable::Negation(n) => n.collect_scoped_variables(out),
            Conjunctable::Conjunction(c) => c.collect_scoped_variables(out),
        }
    }

    fn is_negation(&self) -> bool {
        matches!(self, Conjunctable::Negation(_))
    }

    fn fmt_block_body(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conjunctable::Variable(v) => v.fmt_block_body(f),
            Conjunctable::Negation(n) => n.fmt_block_body(f),
            Conjunctable::Conjunction(c) => c.fmt_block_body(f),
        }
    }
}

impl fmt::Display for Conjunctable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conjunctable::Variable(v) => write!(f, "{}", v),
            Conjunctable::Negation(n) => write!(f, "{}", n),
            Conjunctable::Conjunction(c) => write!(f, "{}", c),
        }
    }
}

impl From<Variable> for Conjunctable {
    fn from(v: Variable) -> Self {
        Conjunctable::Variable(v)
    }
}

impl PatternNode for Variable {
    fn normalise(&self) -> Arc<Normalised> {
        Arc::new(normalise::leaf(Conjunctable::Variable(self.clone())))
    }

    fn collect_variables<'a>(&'a self, out: &mut Vec<&'a Variable>) {
        out.push(self);
    }

    fn collect_scoped_variables<'a>(&'a self, out: &mut Vec<&'a Variable>) {
        out.push(self);
    }
}
