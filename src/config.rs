//! # Configuration
//!
//! Settings are read from YAML. Every section is optional and falls back to
//! its default, so an empty document is a valid configuration:
//!
//! ```yaml
//! logger:
//!   enable: true
//!   level: info
//!   format: compact
//! engine:
//!   mode: folded
//! output:
//!   format: text
//!   graph: false
//! ```

use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    neighbors::{GeneralizationMode, UpperNeighbors},
    Error, Result,
};

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logger: Logger,
    #[serde(default)]
    pub engine: Engine,
    #[serde(default)]
    pub output: Output,
}

/// Logger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Logger {
    /// Enable or disable log output.
    #[serde(default = "default_true")]
    pub enable: bool,
    /// Verbosity; `RUST_LOG` takes precedence when set.
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            enable: true,
            level: LogLevel::default(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Off,
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self {
            Self::Off => "off",
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(level)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

/// Neighbor engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Engine {
    #[serde(default)]
    pub mode: GeneralizationMode,
}

/// How results are printed by the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Output {
    #[serde(default)]
    pub format: OutputFormat,
    /// Print the neighbor graph instead of the plain neighbor list.
    #[serde(default)]
    pub graph: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Loads the configuration stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or is not valid YAML for
    /// this schema.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|err| Error::read_file(path, err))?;
        tracing::debug!(path = %path.display(), "loading configuration");
        content.parse()
    }

    /// Builds the neighbor engine described by the `engine` section.
    #[must_use]
    pub fn upper_neighbors(&self) -> UpperNeighbors {
        UpperNeighbors::new(self.engine.mode)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(s)?)
    }
}
