//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-5 are reserved for specific error categories.
//! - A failed `check` exits with `GeneralError` (1) and prints nothing.

use appconf::ConfigError;

/// Structured exit codes for appconf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled failure, or a `check` that did not match.
    GeneralError = 1,

    /// The configuration file does not exist.
    FileNotFound = 2,

    /// The file could not be parsed, or its format is not supported.
    ParseError = 3,

    /// The requested field path does not exist.
    FieldNotFound = 4,

    /// The requested field exists but has a different kind.
    TypeMismatch = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::FileNotFound { .. } => ExitCode::FileNotFound,

            ConfigError::Parse { .. }
            | ConfigError::UnsupportedFormat { .. }
            | ConfigError::Construction(_) => ExitCode::ParseError,

            ConfigError::FieldNotFound { .. } => ExitCode::FieldNotFound,

            ConfigError::TypeMismatch { .. } | ConfigError::OutOfRange { .. } => {
                ExitCode::TypeMismatch
            }

            ConfigError::Io { .. } | ConfigError::Serialize { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no `ConfigError` is found in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
