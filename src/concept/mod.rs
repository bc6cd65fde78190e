//! Concept expressions of the description logic EL.
//!
//! The module holds the closed expression type, the validated identifiers it
//! is built from, and the textual syntax used to read expressions back in.
//! Nothing here knows about generalization; see [`crate::neighbors`].

pub mod expression;
pub mod syntax;
pub mod value_objects;

pub use expression::{Concept, CONJUNCTION_SEPARATOR, EXISTS_SYMBOL};
pub use syntax::{parse_concept, ParseError, ParseErrorKind, MAX_NESTING};
pub use value_objects::{ConceptError, ConceptName, NameKind, RoleName};
