//! Integration tests for structured exit codes.
//!
//! These tests verify that appconf returns the correct exit codes
//! for different error scenarios, enabling reliable shell scripting.

mod common;

use common::{SAMPLE_JSON, appconf_cmd, config_file};
use predicates::prelude::*;

#[test]
fn test_success_returns_exit_code_0() {
    let file = config_file(".json", SAMPLE_JSON);
    appconf_cmd()
        .arg("-f")
        .arg(file.path())
        .args(["get", "debug"])
        .assert()
        .code(0);
}

#[test]
fn test_missing_file_argument_returns_exit_code_1() {
    appconf_cmd()
        .arg("dump")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("APPCONF_FILE"));
}

#[test]
fn test_missing_file_returns_exit_code_2() {
    let dir = tempfile::tempdir().unwrap();
    appconf_cmd()
        .arg("-f")
        .arg(dir.path().join("absent.json"))
        .arg("dump")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_malformed_file_returns_exit_code_3() {
    let file = config_file(".json", "{\"server\": ");
    appconf_cmd()
        .arg("-f")
        .arg(file.path())
        .arg("dump")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn test_unsupported_extension_returns_exit_code_3() {
    let file = config_file(".ini", "a=1\n");
    appconf_cmd()
        .arg("-f")
        .arg(file.path())
        .arg("dump")
        .assert()
        .code(3);
}

#[test]
fn test_missing_field_returns_exit_code_4() {
    let file = config_file(".json", SAMPLE_JSON);
    appconf_cmd()
        .arg("-f")
        .arg(file.path())
        .args(["get", "server.user"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("server.user"));
}

#[test]
fn test_path_through_scalar_returns_exit_code_5() {
    let file = config_file(".json", SAMPLE_JSON);
    appconf_cmd()
        .arg("-f")
        .arg(file.path())
        .args(["dump", "debug"])
        .assert()
        .code(5);
}
