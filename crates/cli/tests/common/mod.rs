//! Shared test utilities for appconf CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//! - Write config fixtures to temporary files.
//!
//! Invariants / Assumptions:
//! - `APPCONF_FILE` and `RUST_LOG` from the host never leak into tests.
//! - Fixture files live as long as the returned `NamedTempFile`.

use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

/// Scenario document used across CLI tests.
pub const SAMPLE_JSON: &str =
    r#"{"server": {"port": 8080, "host": "localhost"}, "debug": true, "tags": ["a", "b"]}"#;

/// Returns a hermetic `appconf` command for integration testing.
pub fn appconf_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("appconf");
    cmd.env_remove("APPCONF_FILE").env_remove("RUST_LOG");
    cmd
}

/// Writes `content` to a temp file with the given suffix (e.g. ".json").
pub fn config_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("appconf-cli-")
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}
