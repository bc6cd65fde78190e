//! Upper neighbors of concept expressions in the description logic EL.
//!
//! Build a [`Concept`] with its constructors or parse it from text, then ask
//! for its one-step structural generalizations:
//!
//! ```
//! use dl_neighbors::{upper_neighbors, Concept};
//!
//! let concept: Concept = "A ⊓ ∃r.(B ⊓ C)".parse().unwrap();
//! let neighbors: Vec<String> = upper_neighbors(&concept)
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(neighbors, ["∃r.(B ⊓ C)", "A ⊓ ∃r.(C) ⊓ ∃r.(B)"]);
//! ```

pub use self::errors::Error;

#[cfg(feature = "cli")]
pub mod cli;
pub mod concept;
pub mod config;
mod errors;
pub mod graph;
pub mod logger;
pub mod neighbors;

pub use concept::{Concept, ConceptError, ConceptName, ParseError, RoleName};
pub use graph::NeighborGraph;
pub use neighbors::{upper_neighbors, GeneralizationMode, UpperNeighbors};

/// Application results options list
pub type Result<T, E = Error> = std::result::Result<T, E>;
