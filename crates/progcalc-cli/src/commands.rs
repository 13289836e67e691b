//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// progcalc: keypad calculator with a live binary/hex readout
#[derive(Parser, Debug)]
#[command(name = "progcalc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start with the programmer (binary/hex) panel open
    #[arg(long)]
    pub programmer: bool,

    /// Start with the history panel open
    #[arg(long)]
    pub history: bool,

    /// Disable the animated backdrop
    #[arg(long)]
    pub no_animation: bool,

    /// Backdrop tick interval in milliseconds (minimum 10)
    #[arg(long, value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Keep copies in memory instead of using the system clipboard
    #[arg(long)]
    pub no_clipboard: bool,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE", env = "PROGCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (logs are discarded otherwise)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (log errors only)
    #[arg(short, long)]
    pub quiet: bool,
}
