//! progcalc: keypad calculator with a programmer-mode readout
//!
//! ## Usage
//!
//! ```bash
//! progcalc                            # Start the calculator
//! progcalc --programmer --history     # Start with both panels open
//! progcalc --config calc.toml -v --log-file calc.log
//! ```

use clap::Parser;
use progcalc_cli::{build_config, logging, run, Cli, CliResult, Verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> CliResult<()> {
    let cli = Cli::parse();

    // Configuration problems are reported before the terminal is touched
    let config = build_config(&cli)?;
    logging::init(
        cli.log_file.as_deref(),
        Verbosity::from_flags(cli.quiet, cli.verbose),
    )?;

    run(&config)
}
