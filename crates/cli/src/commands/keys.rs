//! List the fields of a section with their kinds.

use anyhow::Result;
use appconf::Config;
use std::io::Write;

use super::resolve_section;

/// Writes one `name<TAB>kind` line per field, in file order.
pub fn run(config: &Config, path: Option<&str>, out: &mut impl Write) -> Result<()> {
    let node = resolve_section(config, path)?;
    for (name, field) in node.iter() {
        writeln!(out, "{name}\t{}", field.kind())?;
    }
    Ok(())
}
