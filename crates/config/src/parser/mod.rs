//! Parser adapters: file text in, ordered `Mapping` out.
//!
//! Responsibilities:
//! - Define the `ParseToMapping` seam that every parser adapter implements.
//! - Detect the file format from its extension (`Format::from_path`).
//! - Convert each format's native value tree into `Value`, deciding the
//!   scalar / list / section tag once, here.
//!
//! Does NOT handle:
//! - Building the tree (see `node`).
//! - Format-specific features beyond plain data (includes, macros, anchors are
//!   whatever the underlying crate does with them).
//!
//! Invariants:
//! - The top-level document must be a mapping.
//! - Lists only contain scalars; anything else is a `ConfigError::Construction`.
//! - Integers are `i64`. A larger integer literal is a `ConfigError::Construction`,
//!   never a float.
//! - Key order in the returned `Mapping` matches the order in the file.

mod json;
mod toml;
mod yaml;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::node::FieldKind;
use crate::value::Mapping;

pub use json::mapping_from_json;

/// Turns a file on disk into a nested mapping.
///
/// Implementations must either return the complete mapping or an error; a
/// partially parsed document is never returned.
pub trait ParseToMapping {
    fn parse_to_mapping(&self, path: &Path) -> Result<Mapping, ConfigError>;
}

impl<F> ParseToMapping for F
where
    F: Fn(&Path) -> Result<Mapping, ConfigError>,
{
    fn parse_to_mapping(&self, path: &Path) -> Result<Mapping, ConfigError> {
        self(path)
    }
}

/// Text formats with a bundled adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Toml,
    Yaml,
}

impl Format {
    /// Picks a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "toml" => Some(Format::Toml),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Toml => "toml",
            Format::Yaml => "yaml",
        }
    }

    /// Parses `text` in this format. `origin` names the source in error messages.
    pub fn parse_str(self, text: &str, origin: &str) -> Result<Mapping, ConfigError> {
        match self {
            Format::Json => json::parse(text, origin),
            Format::Toml => toml::parse(text, origin),
            Format::Yaml => yaml::parse(text, origin),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "toml" => Ok(Format::Toml),
            "yaml" | "yml" => Ok(Format::Yaml),
            other => Err(format!(
                "unknown format '{other}' (expected json, toml, or yaml)"
            )),
        }
    }
}

/// The default adapter: reads the file and dispatches on its format.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileParser {
    format: Option<Format>,
}

impl FileParser {
    /// Detects the format from each file's extension.
    pub fn new() -> Self {
        Self::default()
    }

    /// Always parses as `format`, regardless of extension.
    pub fn with_format(format: Format) -> Self {
        Self {
            format: Some(format),
        }
    }
}

impl ParseToMapping for FileParser {
    fn parse_to_mapping(&self, path: &Path) -> Result<Mapping, ConfigError> {
        // Read first so a missing file reports as such even with an odd extension.
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::from_io(path.to_path_buf(), e))?;

        let format = self
            .format
            .or_else(|| Format::from_path(path))
            .ok_or_else(|| ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;

        tracing::debug!(
            path = %path.display(),
            format = %format,
            bytes = content.len(),
            "Parsing config file"
        );

        format.parse_str(&content, &path.display().to_string())
    }
}

pub(crate) fn parse_error(origin: &str, message: impl fmt::Display) -> ConfigError {
    ConfigError::Parse {
        origin: origin.to_string(),
        message: message.to_string(),
    }
}

pub(crate) fn top_level_not_mapping(origin: &str, found: FieldKind) -> ConfigError {
    ConfigError::Construction(format!(
        "top-level document in {origin} must be a mapping, found {found}"
    ))
}

pub(crate) fn nested_in_list(key: &str, index: usize, found: FieldKind) -> ConfigError {
    ConfigError::Construction(format!(
        "element {index} of list '{key}' is a {found}; lists may only hold scalars"
    ))
}

/// Why a native value could not become a `Scalar`.
#[derive(Debug)]
pub(crate) enum NotScalar {
    Kind(FieldKind),
    /// An integer literal above `i64::MAX`.
    IntegerOverflow(u64),
}

impl NotScalar {
    pub(crate) fn for_key(self, key: &str) -> ConfigError {
        match self {
            NotScalar::Kind(found) => {
                ConfigError::Construction(format!("unexpected {found} for '{key}'"))
            }
            NotScalar::IntegerOverflow(value) => ConfigError::Construction(format!(
                "integer {value} for '{key}' does not fit in a signed 64-bit integer"
            )),
        }
    }

    pub(crate) fn in_list(self, key: &str, index: usize) -> ConfigError {
        match self {
            NotScalar::Kind(found) => nested_in_list(key, index, found),
            NotScalar::IntegerOverflow(value) => ConfigError::Construction(format!(
                "element {index} of list '{key}' is the integer {value}, which does not fit in a signed 64-bit integer"
            )),
        }
    }
}
