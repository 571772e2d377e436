//! Kind assertion for scripts: does the field at a path have the expected kind?

use appconf::{Config, FieldKind};

/// Returns true if `path` resolves and has `kind`. A missing path is simply false.
pub fn run(config: &Config, path: &str, kind: FieldKind) -> bool {
    let matches = config.has_kind(path, kind);
    tracing::debug!(path, %kind, found = ?config.kind_at(path), matches, "Checked field kind");
    matches
}
