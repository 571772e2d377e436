//! Text export for configuration trees.
//!
//! Responsibilities:
//! - Render a node (or a single field) as JSON, YAML, or TOML text.
//! - Provide `to_text`, the canonical 4-space-indented JSON rendering.
//!
//! Does NOT handle:
//! - Writing files. Export only produces strings.
//!
//! Invariants:
//! - Output is deterministic: same tree, same key order, same bytes.
//! - `to_text` output re-parses with `Format::Json` into an equal mapping.
//!   JSON has no infinity or NaN, so a tree holding one fails to render as
//!   JSON instead of losing the value.

use serde::Serialize;
use std::fmt;

use crate::error::ConfigError;
use crate::node::{ConfigNode, Field};
use crate::parser::Format;
use crate::value::Scalar;

const INDENT: &[u8] = b"    ";

impl ConfigNode {
    /// Renders the tree as JSON indented with 4 spaces.
    ///
    /// # Errors
    /// `ConfigError::Serialize` if any float is infinite or NaN.
    pub fn to_text(&self) -> Result<String, ConfigError> {
        self.render(Format::Json)
    }

    /// Renders the tree in `format`.
    ///
    /// # Errors
    /// `ConfigError::Serialize` when the format cannot express the tree
    /// (TOML has no null, JSON has no infinity or NaN).
    pub fn render(&self, format: Format) -> Result<String, ConfigError> {
        if format == Format::Json {
            ensure_finite(self.non_finite_float(""))?;
        }
        render(self, format)
    }

    /// Dotted path of the first infinite or NaN float, if any.
    fn non_finite_float(&self, prefix: &str) -> Option<String> {
        self.iter().find_map(|(key, field)| {
            let path = if prefix.is_empty() {
                key.to_string()
            } else {
                format!("{prefix}.{key}")
            };
            field.non_finite_float(&path)
        })
    }
}

impl Field {
    /// Renders a single field in `format`. Bare scalars and lists are not valid
    /// TOML documents and fail for `Format::Toml`.
    pub fn render(&self, format: Format) -> Result<String, ConfigError> {
        if format == Format::Json {
            ensure_finite(self.non_finite_float("value"))?;
        }
        render(self, format)
    }

    fn non_finite_float(&self, path: &str) -> Option<String> {
        match self {
            Field::Scalar(scalar) => is_non_finite(scalar).then(|| path.to_string()),
            Field::List(items) => items
                .iter()
                .position(is_non_finite)
                .map(|index| format!("{path}[{index}]")),
            Field::Node(node) => node.non_finite_float(path),
        }
    }
}

fn is_non_finite(scalar: &Scalar) -> bool {
    matches!(scalar, Scalar::Float(x) if !x.is_finite())
}

fn ensure_finite(found: Option<String>) -> Result<(), ConfigError> {
    match found {
        Some(path) => Err(serialize_error(
            Format::Json,
            format!("'{path}' is not a finite number"),
        )),
        None => Ok(()),
    }
}

/// Fails with `fmt::Error` when `to_text` does; call `to_text` to see why.
impl fmt::Display for ConfigNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_text().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

fn render<T: Serialize + ?Sized>(value: &T, format: Format) -> Result<String, ConfigError> {
    match format {
        Format::Json => to_json_text(value),
        Format::Yaml => serde_yaml::to_string(value).map_err(|e| serialize_error(format, e)),
        Format::Toml => ::toml::to_string_pretty(value).map_err(|e| serialize_error(format, e)),
    }
}

fn to_json_text<T: Serialize + ?Sized>(value: &T) -> Result<String, ConfigError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| serialize_error(Format::Json, e))?;
    String::from_utf8(buf).map_err(|e| serialize_error(Format::Json, e))
}

fn serialize_error(format: Format, message: impl fmt::Display) -> ConfigError {
    ConfigError::Serialize {
        format: format.name(),
        message: message.to_string(),
    }
}
