//! # Error Handling
//!
//! Crate-wide error type. Concept construction and parsing keep their own
//! precise error types; this enum wraps them together with the failures of
//! the configuration and output layers.

use std::path::PathBuf;

use crate::concept::{ConceptError, ParseError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Concept(#[from] ConceptError),

    #[error("cannot parse concept: {0}")]
    Parse(#[from] ParseError),

    #[error("cannot read `{path}`: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),

    #[error(transparent)]
    JSON(#[from] serde_json::Error),

    #[error("cannot initialize logger: {0}")]
    Logger(String),
}

impl Error {
    #[must_use]
    pub fn string(message: &str) -> Self {
        Self::Message(message.to_string())
    }

    pub(crate) fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }
}
