//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and the `APPCONF_FILE` environment variable.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load configuration (see `dispatch::load_config`).

use appconf::{FieldKind, Format};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "appconf")]
#[command(about = "appconf - Inspect configuration files as a tree", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  appconf -f app.toml dump\n  appconf -f app.yaml get server.port\n  appconf -f app.json keys server\n  appconf -f app.json check server.port integer\n  APPCONF_FILE=app.yml appconf -o yaml dump server\n"
)]
pub struct Cli {
    /// Configuration file to load
    #[arg(short, long, global = true, env = "APPCONF_FILE", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Parse the file as this format instead of detecting it from the extension (json, toml, yaml)
    #[arg(long, global = true, value_name = "FORMAT")]
    pub input_format: Option<Format>,

    /// Output format for sections and lists (json, toml, yaml)
    #[arg(short, long, global = true, default_value = "json")]
    pub output: Format,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the whole configuration, or the section at PATH
    Dump {
        /// Dotted path of a section (e.g. 'server.tls')
        path: Option<String>,
    },

    /// Print a single field
    ///
    /// Strings print raw, other scalars print as JSON literals, and lists and
    /// sections are rendered in the output format.
    Get {
        /// Dotted path of the field (e.g. 'server.port')
        path: String,
    },

    /// List the fields of the root, or of the section at PATH, with their kinds
    Keys {
        /// Dotted path of a section
        path: Option<String>,
    },

    /// Exit 0 if the field at PATH has KIND, 1 otherwise
    Check {
        /// Dotted path of the field
        path: String,

        /// Expected kind (null, bool, integer, float, string, list, section)
        kind: FieldKind,
    },
}
