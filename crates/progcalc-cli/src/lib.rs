//! progcalc CLI library
//!
//! Argument parsing, configuration layering, log setup and the terminal
//! session for the `progcalc` binary.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

mod commands;
mod config;
mod error;
pub mod logging;
pub mod runner;

pub use commands::Cli;
pub use config::{build_config, Verbosity};
pub use error::{CliError, CliResult};
pub use runner::{clipboard_for, dispatch, run, BoxedClipboard};
