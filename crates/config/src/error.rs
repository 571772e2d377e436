//! Error types for configuration loading and access.
//!
//! Responsibilities:
//! - Define error variants for every failure the config tree can surface.
//! - Keep enough context (paths, dotted field names, kinds) to debug a failure.
//!
//! Does NOT handle:
//! - Recovery or retries. Every error is returned to the caller as-is.
//! - Logging. Callers decide whether and how to report errors.
//!
//! Invariants:
//! - `FileNotFound` is only produced for `io::ErrorKind::NotFound`; every other
//!   read failure is `Io`.
//! - Parse messages come from the adapter and never include the full file body.

use std::path::PathBuf;
use thiserror::Error;

use crate::node::FieldKind;

/// Errors that can occur while loading, querying, or exporting a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("No parser available for {path} (expected .json, .toml, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Field not found: {field}")]
    FieldNotFound { field: String },

    #[error("Field '{field}' is {found}, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: FieldKind,
        found: FieldKind,
    },

    #[error("Field '{field}' holds {value}, which does not fit in {target}")]
    OutOfRange {
        field: String,
        value: String,
        target: &'static str,
    },

    /// The parser produced a shape the tree cannot hold (e.g. a non-string key).
    #[error("Invalid configuration structure: {0}")]
    Construction(String),

    #[error("Failed to render configuration as {format}: {message}")]
    Serialize {
        format: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Returns true for errors caused by a missing file or missing field.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::FileNotFound { .. } | ConfigError::FieldNotFound { .. }
        )
    }

    /// Maps an I/O error on `path` to `FileNotFound` or `Io`.
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound { path }
        } else {
            ConfigError::Io { path, source }
        }
    }

    /// Prefixes the field named by a field-scoped error with a parent path.
    pub(crate) fn within(self, parent: &str) -> Self {
        match self {
            ConfigError::FieldNotFound { field } => ConfigError::FieldNotFound {
                field: format!("{parent}.{field}"),
            },
            ConfigError::TypeMismatch {
                field,
                expected,
                found,
            } => ConfigError::TypeMismatch {
                field: format!("{parent}.{field}"),
                expected,
                found,
            },
            ConfigError::OutOfRange {
                field,
                value,
                target,
            } => ConfigError::OutOfRange {
                field: format!("{parent}.{field}"),
                value,
                target,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_from_io_not_found_maps_to_file_not_found() {
        let err = ConfigError::from_io(
            PathBuf::from("/nope.json"),
            Error::new(ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, ConfigError::FileNotFound { ref path } if path == &PathBuf::from("/nope.json")));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_other_kind_maps_to_io() {
        let err = ConfigError::from_io(
            PathBuf::from("/locked.json"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_within_prefixes_field() {
        let err = ConfigError::FieldNotFound {
            field: "port".to_string(),
        }
        .within("server");
        assert_eq!(err.to_string(), "Field not found: server.port");
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = ConfigError::TypeMismatch {
            field: "debug".to_string(),
            expected: FieldKind::Integer,
            found: FieldKind::Bool,
        };
        assert_eq!(err.to_string(), "Field 'debug' is bool, expected integer");
    }
}
