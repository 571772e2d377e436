//! Print a single field.

use anyhow::Result;
use appconf::{Config, Field, Format};
use std::io::Write;

pub fn run(config: &Config, path: &str, format: Format, out: &mut impl Write) -> Result<()> {
    match config.lookup(path)? {
        Field::Scalar(scalar) => writeln!(out, "{scalar}")?,
        field => writeln!(out, "{}", field.render(format)?.trim_end())?,
    }
    Ok(())
}
