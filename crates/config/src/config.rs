//! The root configuration object.
//!
//! Responsibilities:
//! - Load a file through a `ParseToMapping` adapter and build the tree.
//! - Remember which file the tree came from.
//!
//! Does NOT handle:
//! - Reloading or watching the file. A `Config` is a snapshot.
//! - Writing back to the original file.
//!
//! Invariants:
//! - A `Config` is immutable once constructed and only hands out shared references.
//! - Construction either yields a complete tree or an error; nothing partial
//!   is observable.

use std::ops::Deref;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::node::ConfigNode;
use crate::parser::{FileParser, ParseToMapping};
use crate::value::Mapping;

/// A configuration tree plus the path it was loaded from.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    file_path: PathBuf,
    root: ConfigNode,
}

impl Config {
    /// Loads `path` with the bundled adapter for its extension.
    ///
    /// # Errors
    /// - `ConfigError::FileNotFound` if the file does not exist.
    /// - `ConfigError::UnsupportedFormat` for an unknown extension.
    /// - `ConfigError::Parse` / `ConfigError::Construction` for bad content.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, &FileParser::new())
    }

    /// Loads `path` through an explicit adapter.
    pub fn load_with<P>(path: impl AsRef<Path>, parser: &P) -> Result<Self, ConfigError>
    where
        P: ParseToMapping + ?Sized,
    {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading config");
        let mapping = parser.parse_to_mapping(path)?;
        Ok(Self::from_mapping(path, mapping))
    }

    /// Builds a config from an already parsed mapping.
    pub fn from_mapping(path: impl Into<PathBuf>, mapping: Mapping) -> Self {
        let file_path = path.into();
        let root = ConfigNode::build(mapping);
        tracing::debug!(
            path = %file_path.display(),
            fields = root.field_count(),
            depth = root.depth(),
            "Config loaded"
        );
        Self { file_path, root }
    }

    /// The file this config was loaded from.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn root(&self) -> &ConfigNode {
        &self.root
    }

    pub fn into_root(self) -> ConfigNode {
        self.root
    }
}

impl Deref for Config {
    type Target = ConfigNode;

    fn deref(&self) -> &ConfigNode {
        &self.root
    }
}

impl AsRef<ConfigNode> for Config {
    fn as_ref(&self) -> &ConfigNode {
        &self.root
    }
}
