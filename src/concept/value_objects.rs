use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which identifier slot a rejected value was meant for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NameKind {
    /// An atomic concept name.
    Concept,
    /// The role of an existential restriction.
    Role,
}

impl Display for NameKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concept => f.write_str("concept name"),
            Self::Role => f.write_str("role name"),
        }
    }
}

/// Errors produced when validating concept and role identifiers.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConceptError {
    /// The identifier was empty or only contained whitespace.
    #[error("{kind} must not be empty")]
    EmptyName { kind: NameKind },
}

fn validate(value: String, kind: NameKind) -> Result<String, ConceptError> {
    if value.trim().is_empty() {
        return Err(ConceptError::EmptyName { kind });
    }
    Ok(value)
}

/// Value object holding the identifier of an atomic concept.
///
/// Identifiers are opaque: any non-blank text is accepted and kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConceptName {
    value: String,
}

impl ConceptName {
    /// Validates and constructs a new [`ConceptName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConceptError> {
        let value = validate(value.into(), NameKind::Concept)?;
        Ok(Self { value })
    }

    /// Returns the underlying textual representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// Value object holding the identifier of a role.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoleName {
    value: String,
}

impl RoleName {
    /// Validates and constructs a new [`RoleName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConceptError> {
        let value = validate(value.into(), NameKind::Role)?;
        Ok(Self { value })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Display for ConceptName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Display for RoleName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for ConceptName {
    type Err = ConceptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl FromStr for RoleName {
    type Err = ConceptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for ConceptName {
    type Error = ConceptError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for RoleName {
    type Error = ConceptError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConceptName> for String {
    fn from(name: ConceptName) -> Self {
        name.value
    }
}

impl From<RoleName> for String {
    fn from(role: RoleName) -> Self {
        role.value
    }
}
