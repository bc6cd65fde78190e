use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::value_objects::{ConceptError, ConceptName, RoleName};

/// Separator placed between the conjuncts of a rendered conjunction.
pub const CONJUNCTION_SEPARATOR: &str = " ⊓ ";
/// Quantifier prefixed to a rendered existential restriction.
pub const EXISTS_SYMBOL: char = '∃';

/// Concept expression of the description logic EL.
///
/// Every node exclusively owns its children, so a value is always a finite
/// tree. Equality is structural: two conjunctions holding the same conjuncts
/// in a different order are different values.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Concept {
    /// Atomic concept.
    Name { name: ConceptName },
    /// Conjunction of zero or more conjuncts kept in insertion order.
    Conjunction { conjuncts: Vec<Concept> },
    /// Existential restriction `∃role.(filler)`.
    #[serde(rename = "exists")]
    Existential { role: RoleName, filler: Box<Concept> },
}

impl Concept {
    /// Builds an atomic concept, rejecting blank names.
    pub fn name(name: impl Into<String>) -> Result<Self, ConceptError> {
        Ok(Self::atomic(ConceptName::new(name)?))
    }

    /// Builds an atomic concept from an already validated name.
    #[must_use]
    pub fn atomic(name: ConceptName) -> Self {
        Self::Name { name }
    }

    /// Builds a conjunction; an empty iterator yields the empty conjunction.
    #[must_use]
    pub fn conjunction(conjuncts: impl IntoIterator<Item = Concept>) -> Self {
        Self::Conjunction {
            conjuncts: conjuncts.into_iter().collect(),
        }
    }

    /// Builds an existential restriction, rejecting blank role names.
    pub fn exists(role: impl Into<String>, filler: Concept) -> Result<Self, ConceptError> {
        Ok(Self::restriction(RoleName::new(role)?, filler))
    }

    /// Builds an existential restriction from an already validated role.
    #[must_use]
    pub fn restriction(role: RoleName, filler: Concept) -> Self {
        Self::Existential {
            role,
            filler: Box::new(filler),
        }
    }

    /// Returns the conjuncts when the concept is a conjunction.
    #[must_use]
    pub fn conjuncts(&self) -> Option<&[Concept]> {
        match self {
            Self::Conjunction { conjuncts } => Some(conjuncts),
            Self::Name { .. } | Self::Existential { .. } => None,
        }
    }

    /// Returns `true` for the conjunction without conjuncts.
    #[must_use]
    pub fn is_empty_conjunction(&self) -> bool {
        matches!(self, Self::Conjunction { conjuncts } if conjuncts.is_empty())
    }

    /// Total number of nodes in the expression tree.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Name { .. } => 1,
            Self::Conjunction { conjuncts } => 1 + conjuncts.iter().map(Self::size).sum::<usize>(),
            Self::Existential { filler, .. } => 1 + filler.size(),
        }
    }

    /// Length of the longest root-to-leaf path, counting nodes.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Name { .. } => 1,
            Self::Conjunction { conjuncts } => {
                1 + conjuncts.iter().map(Self::depth).max().unwrap_or(0)
            }
            Self::Existential { filler, .. } => 1 + filler.depth(),
        }
    }
}

impl From<ConceptName> for Concept {
    fn from(name: ConceptName) -> Self {
        Self::atomic(name)
    }
}

impl Display for Concept {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name { name } => write!(f, "{name}"),
            Self::Conjunction { conjuncts } => {
                for (index, conjunct) in conjuncts.iter().enumerate() {
                    if index > 0 {
                        f.write_str(CONJUNCTION_SEPARATOR)?;
                    }
                    write!(f, "{conjunct}")?;
                }
                Ok(())
            }
            Self::Existential { role, filler } => write!(f, "{EXISTS_SYMBOL}{role}.({filler})"),
        }
    }
}
