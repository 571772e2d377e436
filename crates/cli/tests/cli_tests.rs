//! Integration tests for the appconf commands.

mod common;

use common::{SAMPLE_JSON, appconf_cmd, config_file};
use predicates::prelude::*;

#[test]
fn test_dump_renders_four_space_json() {
    let file = config_file(".json", SAMPLE_JSON);
    let output = appconf_cmd()
        .arg("--file")
        .arg(file.path())
        .arg("dump")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("{\n    \"server\": {\n        \"port\": 8080,"));

    let reparsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let original: serde_json::Value = serde_json::from_str(SAMPLE_JSON).unwrap();
    assert_eq!(reparsed, original);
}

#[test]
fn test_dump_section_as_yaml() {
    let file = config_file(".json", SAMPLE_JSON);
    appconf_cmd()
        .args(["-o", "yaml", "dump", "server"])
        .arg("-f")
        .arg(file.path())
        .assert()
        .success()
        .stdout("port: 8080\nhost: localhost\n");
}

#[test]
fn test_get_reads_file_from_env() {
    let file = config_file(".yaml", "server:\n  host: example.org\n");
    appconf_cmd()
        .env("APPCONF_FILE", file.path())
        .args(["get", "server.host"])
        .assert()
        .success()
        .stdout("example.org\n");
}

#[test]
fn test_get_from_toml() {
    let file = config_file(".toml", "[server]\nport = 9000\n");
    appconf_cmd()
        .arg("-f")
        .arg(file.path())
        .args(["get", "server.port"])
        .assert()
        .success()
        .stdout("9000\n");
}

#[test]
fn test_input_format_overrides_extension() {
    let file = config_file(".conf", "debug: false\n");
    appconf_cmd()
        .arg("-f")
        .arg(file.path())
        .args(["--input-format", "yaml", "get", "debug"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_keys_lists_fields_in_file_order() {
    let file = config_file(".json", SAMPLE_JSON);
    appconf_cmd()
        .arg("-f")
        .arg(file.path())
        .arg("keys")
        .assert()
        .success()
        .stdout("server\tsection\ndebug\tbool\ntags\tlist\n");
}

#[test]
fn test_check_matches_and_mismatches() {
    let file = config_file(".json", SAMPLE_JSON);

    appconf_cmd()
        .arg("-f")
        .arg(file.path())
        .args(["check", "server.port", "integer"])
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());

    appconf_cmd()
        .arg("-f")
        .arg(file.path())
        .args(["check", "server.port", "string"])
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_help_lists_commands() {
    appconf_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dump"))
        .stdout(predicate::str::contains("check"));
}
