//! Tokens used when rendering patterns and queries back to text.
//!
//! These constants keep the canonical syntax identical between the pattern
//! and query crates.

/// Sigil of a named variable.
pub const VAR: &str = "$";

/// Sigil of an anonymous or label variable.
pub const VAR_ANONYMOUS: &str = "$_";

/// Grammar every variable name must match.
pub const NAME_PATTERN: &str = "[a-zA-Z0-9][a-zA-Z0-9_-]*";

pub const CURLY_OPEN: &str = "{";
pub const CURLY_CLOSE: &str = "}";
pub const PARAN_OPEN: &str = "(";
pub const PARAN_CLOSE: &str = ")";
pub const SEMICOLON: &str = ";";
pub const COLON: &str = ":";
pub const COMMA: &str = ",";
pub const SPACE: &str = " ";
pub const NEW_LINE: &str = "\n";

// Logic operators
pub const OR: &str = "or";
pub const NOT: &str = "not";

// Commands
pub const MATCH: &str = "match";
pub const DEFINE: &str = "define";
pub const UNDEFINE: &str = "undefine";

// Modifiers
pub const GET: &str = "get";
pub const SORT: &str = "sort";
pub const OFFSET: &str = "offset";
pub const LIMIT: &str = "limit";

// Schema
pub const RULE: &str = "rule";
pub const WHEN: &str = "when";
pub const THEN: &str = "then";

// Constraints
pub const IS: &str = "is";
pub const TYPE: &str = "type";
pub const SUB: &str = "sub";
pub const ABSTRACT: &str = "abstract";
pub const OWNS: &str = "owns";
pub const PLAYS: &str = "plays";
pub const RELATES: &str = "relates";
pub const VALUE: &str = "value";
pub const REGEX: &str = "regex";
pub const ISA: &str = "isa";
pub const ISAX: &str = "isa!";
pub const HAS: &str = "has";
pub const IID: &str = "iid";

/// Annotation marking an owned attribute as a key.
pub const ANNOTATION_KEY: &str = "@key";
