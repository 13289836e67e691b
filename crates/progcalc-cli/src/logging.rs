//! Log subscriber setup
//!
//! The terminal belongs to the calculator while it runs, so log lines go
//! to a file or nowhere. `RUST_LOG` takes precedence over `-v`/`-q`.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};

/// Builds the event filter: `RUST_LOG` if set and valid, else the verbosity
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.filter()))
}

/// Installs the global subscriber writing to `log_file`.
///
/// Without a file nothing is installed and events are dropped.
pub fn init(log_file: Option<&Path>, verbosity: Verbosity) -> CliResult<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = open_log(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}

fn open_log(path: &Path) -> CliResult<File> {
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}
