//! appconf - Command-line inspection tool for configuration files.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load the configuration file and run the requested command.
//! - Report failures with structured exit codes.
//!
//! Does NOT handle:
//! - Parsing or tree logic (see `crates/config`).
//!
//! Invariants:
//! - Command output goes to stdout; logs and error messages go to stderr.
//! - Logging is off unless `RUST_LOG` enables it.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = {
        let mut stdout = std::io::stdout().lock();
        match run_command(&cli, &mut stdout) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                e.exit_code()
            }
        }
    };

    if exit_code != ExitCode::Success {
        tracing::debug!(code = exit_code.as_i32(), "Exiting with failure");
    }

    std::process::exit(exit_code.as_i32());
}
