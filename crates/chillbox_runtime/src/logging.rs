//! `tracing` subscriber setup.
//!
//! Library crates only emit events; the binary installs the subscriber once.
//! `RUST_LOG` takes precedence over the configured level.

use std::str::FromStr;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use chillbox_foundation::{Error, ErrorKind, Result};

/// Parses a level name (`trace`, `debug`, `info`, `warn`, `error`, `off`).
///
/// # Errors
///
/// Returns a configuration error for anything else.
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level.trim())
        .map_err(|_| Error::config(format!("unknown log level '{level}'")))
}

/// Installs a formatted subscriber writing to stderr.
///
/// # Errors
///
/// Returns a configuration error for a bad level, or an internal error if a
/// global subscriber is already installed.
pub fn init(level: &str) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(parse_level(level)?.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Internal(format!("logging already initialised: {e}"))))
}
