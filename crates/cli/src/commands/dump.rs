//! Render the configuration, or one section of it.

use anyhow::Result;
use appconf::{Config, Format};
use std::io::Write;

use super::resolve_section;

pub fn run(
    config: &Config,
    path: Option<&str>,
    format: Format,
    out: &mut impl Write,
) -> Result<()> {
    let node = resolve_section(config, path)?;
    let text = node.render(format)?;
    writeln!(out, "{}", text.trim_end())?;
    Ok(())
}
