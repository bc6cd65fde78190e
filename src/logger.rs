//! Tracing subscriber setup for the command line.

use tracing_subscriber::EnvFilter;

use crate::{
    config::{self, LogFormat},
    Error, Result,
};

/// Builds the event filter: `RUST_LOG` when set, else the configured level.
///
/// # Errors
///
/// Returns an error when the resulting directive cannot be parsed.
pub fn env_filter(config: &config::Logger) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.level.to_string()))
        .map_err(|err| Error::Logger(err.to_string()))
}

/// Installs the global subscriber. Does nothing when logging is disabled.
///
/// Events go to stderr so that command output on stdout stays machine
/// readable.
///
/// # Errors
///
/// Returns an error when the filter is invalid or a global subscriber is
/// already installed.
pub fn init(config: &config::Logger) -> Result<()> {
    if !config.enable {
        return Ok(());
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|err| Error::Logger(err.to_string()))
}
