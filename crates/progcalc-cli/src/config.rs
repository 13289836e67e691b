//! CLI configuration
//!
//! Settings are layered: built-in defaults, then the config file, then
//! command-line flags. The merged result is validated once at the end.

use progcalc::config::ShellConfig;

use crate::commands::Cli;
use crate::error::CliResult;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - per-key transitions
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Derives the level from `-q` and the number of `-v` flags
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Debug,
        }
    }

    /// Default `tracing` filter directive for this level
    #[must_use]
    pub const fn filter(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "info",
            Self::Verbose => "debug",
            Self::Debug => "trace",
        }
    }
}

/// Builds the shell configuration from the config file and flags
pub fn build_config(cli: &Cli) -> CliResult<ShellConfig> {
    let base = match &cli.config {
        Some(path) => ShellConfig::load(path)?,
        None => ShellConfig::default(),
    };
    let config = apply_flags(base, cli);
    config.validate()?;
    Ok(config)
}

/// Overlays flags that were given; absent flags keep the file's values
fn apply_flags(mut config: ShellConfig, cli: &Cli) -> ShellConfig {
    if cli.programmer {
        config.show_programmer = true;
    }
    if cli.history {
        config.show_history = true;
    }
    if cli.no_animation {
        config.animate = false;
    }
    if cli.no_clipboard {
        config.clipboard = false;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_ms = tick_ms;
    }
    config
}
