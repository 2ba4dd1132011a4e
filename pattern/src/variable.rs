//! Variables: a reference plus an ordered list of constraints.

use crate::pattern::structural_hash;
use crate::{Comparator, Constraint, Predicate, RolePlayer};
use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};
use tql_core::{token, CoreResult, Reference, Value, ValueType};

/// A variable occurrence in a pattern.
///
/// Variables are immutable once built; the builder methods consume `self`
/// and return the extended variable.
///
/// Constraint chains can be arbitrarily deep, so cloning, comparing and
/// dropping walk them with explicit work lists. The structural hash is
/// computed as each constraint is added.
pub struct Variable {
    reference: Reference,
    constraints: Vec<Constraint>,
    hash: u64,
}

impl Variable {
    pub fn new(reference: Reference) -> Self {
        let mut variable = Self {
            reference,
            constraints: Vec::new(),
            hash: 0,
        };
        variable.rehash();
        variable
    }

    /// Mentioned variables contribute their own cached hash.
    fn rehash(&mut self) {
        self.hash = structural_hash(&(&self.reference, &self.constraints));
    }

    /// A variable with a validated name, e.g. `$x`.
    pub fn named(name: impl Into<String>) -> CoreResult<Self> {
        Reference::named(name).map(Self::new)
    }

    /// A visible anonymous variable `$_`.
    pub fn anonymous() -> Self {
        Self::new(Reference::anonymous(true))
    }

    /// An invisible anonymous variable distinguished by `id`.
    pub fn hidden(id: u32) -> Self {
        Self::new(Reference::anonymous_with_id(false, id))
    }

    /// A labelled type variable, e.g. `person`.
    pub fn label(label: impl Into<String>) -> Self {
        let label = label.into();
        Self::new(Reference::label(label.clone())).constrain(Constraint::Label {
            scope: None,
            label,
        })
    }

    /// A labelled type variable with a scope, e.g. `marriage:husband`.
    pub fn scoped_label(scope: impl Into<String>, label: impl Into<String>) -> Self {
        let scope = scope.into();
        let label = label.into();
        Self::new(Reference::label(format!("{}{}{}", scope, token::COLON, label))).constrain(
            Constraint::Label {
                scope: Some(scope),
                label,
            },
        )
    }

    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Whether this variable is bound to a fixed type label.
    pub fn is_labelled(&self) -> bool {
        self.reference.is_label()
    }

    pub fn is_named(&self) -> bool {
        self.reference.is_name()
    }

    /// Append a constraint.
    pub fn constrain(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self.rehash();
        self
    }

    pub fn isa(self, type_: Variable) -> Self {
        self.constrain(Constraint::Isa {
            type_: Box::new(type_),
            explicit: false,
        })
    }

    pub fn isa_explicit(self, type_: Variable) -> Self {
        self.constrain(Constraint::Isa {
            type_: Box::new(type_),
            explicit: true,
        })
    }

    pub fn has(self, type_label: impl Into<String>, attribute: Variable) -> Self {
        self.constrain(Constraint::Has {
            type_label: Some(type_label.into()),
            attribute: Box::new(attribute),
        })
    }

    pub fn rel(self, player: RolePlayer) -> Self {
        let position = self.constraints.iter().position(Constraint::is_relation);
        match position {
            Some(index) => {
                let mut var = self;
                if let Constraint::Relation(players) = &mut var.constraints[index] {
                    players.push(player);
                }
                var.rehash();
                var
            }
            None => self.constrain(Constraint::Relation(vec![player])),
        }
    }

    pub fn compare(self, comparator: Comparator, value: impl Into<Value>) -> Self {
        self.constrain(Constraint::Value(Predicate::new(comparator, value)))
    }

    pub fn is(self, other: Variable) -> Self {
        self.constrain(Constraint::Is(Box::new(other)))
    }

    pub fn sub(self, supertype: Variable) -> Self {
        self.constrain(Constraint::Sub(Box::new(supertype)))
    }

    pub fn owns(self, attribute_type: Variable) -> Self {
        self.constrain(Constraint::Owns {
            attribute_type: Box::new(attribute_type),
            is_key: false,
        })
    }

    pub fn owns_key(self, attribute_type: Variable) -> Self {
        self.constrain(Constraint::Owns {
            attribute_type: Box::new(attribute_type),
            is_key: true,
        })
    }

    pub fn plays(self, role_type: Variable) -> Self {
        self.constrain(Constraint::Plays(Box::new(role_type)))
    }

    pub fn relates(self, role_type: Variable) -> Self {
        self.constrain(Constraint::Relates(Box::new(role_type)))
    }

    pub fn value(self, value_type: ValueType) -> Self {
        self.constrain(Constraint::ValueType(value_type))
    }

    pub fn abstract_(self) -> Self {
        self.constrain(Constraint::Abstract)
    }

    /// Variables mentioned directly by this variable's constraints.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.constraints.iter().flat_map(Constraint::variables)
    }

    /// Breadth-first walk over this variable and every variable its
    /// constraints mention, transitively.
    pub fn reachable(&self) -> Reachable<'_> {
        Reachable::new([self])
    }

    /// The text identifying this variable inside another constraint:
    /// the label of a labelled variable, the reference syntax otherwise.
    pub fn head(&self) -> String {
        match &self.reference {
            Reference::Label(label) => label.clone(),
            reference => reference.syntax(),
        }
    }
}

impl Variable {
    /// Copy of this variable alone, taking its mentioned variables from
    /// `children` in `variables()` order.
    fn copy_with_children(&self, children: &mut [Option<Variable>]) -> Variable {
        let mut constraints: Vec<Constraint> =
            self.constraints.iter().map(Constraint::shallow_clone).collect();
        let slots = constraints.iter_mut().flat_map(Constraint::variables_mut);
        for (slot, child) in slots.zip(children.iter_mut()) {
            if let Some(child) = child.take() {
                *slot = child;
            }
        }
        Variable {
            reference: self.reference.clone(),
            constraints,
            hash: self.hash,
        }
    }
}

impl Clone for Variable {
    fn clone(&self) -> Self {
        let nodes: Vec<&Variable> = self.reachable().collect();

        // Breadth-first order keeps each node's children contiguous.
        let mut first_child = Vec::with_capacity(nodes.len());
        let mut next = 1;
        for node in &nodes {
            first_child.push(next);
            next += node.variables().count();
        }

        let mut copies: Vec<Option<Variable>> = nodes.iter().map(|_| None).collect();
        for index in (1..nodes.len()).rev() {
            let copy = nodes[index].copy_with_children(&mut copies[first_child[index]..]);
            copies[index] = Some(copy);
        }
        self.copy_with_children(&mut copies[1..])
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if std::ptr::eq(left, right) {
                continue;
            }
            if left.hash != right.hash
                || left.reference != right.reference
                || left.constraints.len() != right.constraints.len()
            {
                return false;
            }
            for (a, b) in left.constraints.iter().zip(&right.constraints) {
                if !a.shallow_eq(b) {
                    return false;
                }
                pending.extend(a.variables().into_iter().zip(b.variables()));
            }
        }
        true
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Drop for Variable {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.constraints);
        while let Some(constraint) = pending.pop() {
            for mut variable in constraint.into_variables() {
                pending.append(&mut variable.constraints);
            }
        }
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variable")
            .field("reference", &self.reference)
            .field("constraints", &self.constraints)
            .finish()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.head())?;
        let labelled = self.is_labelled();
        let mut previous: Option<&Constraint> = None;
        // A labelled head already states its label constraint.
        for constraint in self.constraints.iter().filter(|c| !(labelled && c.is_label())) {
            match previous {
                None => f.write_str(token::SPACE)?,
                Some(prev) if prev.is_relation() => f.write_str(token::SPACE)?,
                Some(_) => write!(f, "{}{}", token::COMMA, token::SPACE)?,
            }
            write!(f, "{}", constraint)?;
            previous = Some(constraint);
        }
        Ok(())
    }
}

/// Breadth-first iterator over variables reachable through constraints.
///
/// Uses an explicit FIFO queue so arbitrarily deep constraint chains never
/// grow the call stack.
pub struct Reachable<'a> {
    queue: VecDeque<&'a Variable>,
}

impl<'a> Reachable<'a> {
    pub fn new(roots: impl IntoIterator<Item = &'a Variable>) -> Self {
        Self {
            queue: roots.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for Reachable<'a> {
    type Item = &'a Variable;

    fn next(&mut self) -> Option<Self::Item> {
        let var = self.queue.pop_front()?;
        self.queue.extend(var.variables());
        log::trace!("visiting {}, {} queued", var.head(), self.queue.len());
        Some(var)
    }
}
