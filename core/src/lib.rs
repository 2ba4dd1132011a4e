//! TQL Core Types
//!
//! This crate provides the foundational types used throughout TQL:
//! - Variable references (named, label, anonymous)
//! - Query, value and sort arguments
//! - Literal values used by predicates
//! - Rendering tokens
//! - Common error types

mod arg;
mod error;
mod reference;
pub mod token;
mod value;

pub use arg::*;
pub use error::*;
pub use reference::*;
pub use value::*;
