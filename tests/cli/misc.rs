use crate::cli::support::{perfindex, stderr_json};
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    perfindex()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: perfindex"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("features"))
        .stdout(predicate::str::contains("predict"))
        .stdout(predicate::str::contains("model"));
}

#[test]
fn test_version_flag() {
    perfindex()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("perfindex"));
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    perfindex().assert().code(2);
}

#[test]
fn test_unknown_command() {
    perfindex()
        .arg("train")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_unknown_format_json_envelope() {
    let output = perfindex()
        .args(["--format", "json", "bogus"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let err = stderr_json(&output);
    assert_eq!(err["error"]["code"], 2);
    assert_eq!(err["error"]["type"], "usage_error");
}

#[test]
fn test_uppercase_format_json_envelope() {
    let output = perfindex().args(["--format=JSON", "bogus"]).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr_json(&output)["error"]["type"], "usage_error");
}

#[test]
fn test_invalid_format_value() {
    perfindex()
        .args(["--format", "xml", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format: xml"));
}
