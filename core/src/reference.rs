//! Variable references.
//!
//! A reference is the denotation of a variable occurrence: a user-chosen name,
//! a type label, or an anonymous placeholder. References are immutable and
//! compare structurally.

use crate::{token, CoreError, CoreResult};
use regex_lite::Regex;
use std::fmt;
use std::sync::OnceLock;

fn name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(&format!("^(?:{})$", token::NAME_PATTERN))
            .expect("variable name grammar is a valid regex")
    })
}

/// A validated variable name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Validate `name` against the identifier grammar.
    pub fn new(name: impl Into<String>) -> CoreResult<Self> {
        let name = name.into();
        if !name_regex().is_match(&name) {
            return Err(CoreError::invalid_identifier(name, token::NAME_PATTERN));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The kind of a reference, ignoring its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Name,
    Label,
    Anonymous,
}

impl ReferenceKind {
    pub fn name(&self) -> &'static str {
        match self {
            ReferenceKind::Name => "Name",
            ReferenceKind::Label => "Label",
            ReferenceKind::Anonymous => "Anonymous",
        }
    }
}

/// How a variable is denoted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    /// A user-chosen, always visible name.
    Name(Name),
    /// A type label; never visible as a bound variable.
    Label(String),
    /// An anonymous placeholder.
    Anonymous { visible: bool },
    /// An anonymous placeholder told apart from its siblings by `id`.
    AnonymousWithId { visible: bool, id: u32 },
}

impl Reference {
    /// Create a named reference, validating the identifier grammar.
    pub fn named(name: impl Into<String>) -> CoreResult<Self> {
        Name::new(name).map(Reference::Name)
    }

    pub fn label(label: impl Into<String>) -> Self {
        Reference::Label(label.into())
    }

    pub fn anonymous(visible: bool) -> Self {
        Reference::Anonymous { visible }
    }

    pub fn anonymous_with_id(visible: bool, id: u32) -> Self {
        Reference::AnonymousWithId { visible, id }
    }

    pub fn kind(&self) -> ReferenceKind {
        match self {
            Reference::Name(_) => ReferenceKind::Name,
            Reference::Label(_) => ReferenceKind::Label,
            Reference::Anonymous { .. } | Reference::AnonymousWithId { .. } => {
                ReferenceKind::Anonymous
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Reference::Name(_) => true,
            Reference::Label(_) => false,
            Reference::Anonymous { visible } | Reference::AnonymousWithId { visible, .. } => {
                *visible
            }
        }
    }

    pub fn is_name(&self) -> bool {
        matches!(self, Reference::Name(_))
    }

    pub fn is_label(&self) -> bool {
        matches!(self, Reference::Label(_))
    }

    pub fn is_anonymous(&self) -> bool {
        self.kind() == ReferenceKind::Anonymous
    }

    pub fn is_with_id(&self) -> bool {
        matches!(self, Reference::AnonymousWithId { .. })
    }

    /// Text of this reference as written in a query.
    pub fn syntax(&self) -> String {
        match self {
            Reference::Name(name) => format!("{}{}", token::VAR, name),
            Reference::Label(label) => format!("{}{}", token::VAR_ANONYMOUS, label),
            Reference::Anonymous { .. } | Reference::AnonymousWithId { .. } => {
                token::VAR_ANONYMOUS.to_string()
            }
        }
    }

    /// Key used to tell references apart. Only differs from `syntax` for
    /// anonymous references carrying an id.
    pub fn identifier(&self) -> String {
        match self {
            Reference::AnonymousWithId { id, .. } => format!("{}{}", self.syntax(), id),
            _ => self.syntax(),
        }
    }

    pub fn as_name(&self) -> CoreResult<&Name> {
        match self {
            Reference::Name(name) => Ok(name),
            _ => Err(self.invalid_cast(ReferenceKind::Name.name())),
        }
    }

    pub fn as_label(&self) -> CoreResult<&str> {
        match self {
            Reference::Label(label) => Ok(label),
            _ => Err(self.invalid_cast(ReferenceKind::Label.name())),
        }
    }

    pub fn as_anonymous_id(&self) -> CoreResult<u32> {
        match self {
            Reference::AnonymousWithId { id, .. } => Ok(*id),
            _ => Err(self.invalid_cast("AnonymousWithId")),
        }
    }

    fn invalid_cast(&self, to: &'static str) -> CoreError {
        let from = match self {
            Reference::AnonymousWithId { .. } => "AnonymousWithId",
            _ => self.kind().name(),
        };
        CoreError::invalid_cast(from, to)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.syntax())
    }
}

impl From<Name> for Reference {
    fn from(name: Name) -> Self {
        Reference::Name(name)
    }
}
