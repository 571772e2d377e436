//! Command dispatch logic.
//!
//! Responsibilities:
//! - Load the configuration named by `--file` / `APPCONF_FILE`.
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Mapping errors to exit codes (see `error` module).

use anyhow::{Context, Result};
use appconf::{Config, FileParser};
use std::io::Write;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;

/// Loads the configuration file selected on the command line.
pub(crate) fn load_config(cli: &Cli) -> Result<Config> {
    let path = cli
        .file
        .as_deref()
        .context("No configuration file given. Pass --file or set APPCONF_FILE")?;

    let parser = match cli.input_format {
        Some(format) => FileParser::with_format(format),
        None => FileParser::new(),
    };

    let config = Config::load_with(path, &parser)?;
    Ok(config)
}

/// Dispatch CLI commands to their respective handlers, writing output to `out`.
pub(crate) fn run_command(cli: &Cli, out: &mut impl Write) -> Result<ExitCode> {
    let config = load_config(cli)?;
    tracing::debug!(
        path = %config.file_path().display(),
        command = ?cli.command,
        "Running command"
    );

    match &cli.command {
        Commands::Dump { path } => commands::dump::run(&config, path.as_deref(), cli.output, out)?,
        Commands::Get { path } => commands::get::run(&config, path, cli.output, out)?,
        Commands::Keys { path } => commands::keys::run(&config, path.as_deref(), out)?,
        Commands::Check { path, kind } => {
            if !commands::check::run(&config, path, *kind) {
                return Ok(ExitCode::GeneralError);
            }
        }
    }

    Ok(ExitCode::Success)
}
