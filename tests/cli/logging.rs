use crate::cli::support::{perfindex, VALID_RECORD};
use predicates::prelude::*;

// ============================================================================
// Logging flags; all log output goes to stderr
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    perfindex()
        .args(["--log-level", "debug", "validate", "--data", VALID_RECORD])
        .assert()
        .success()
        .stdout("valid\n")
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    perfindex()
        .args(["--log-level", "warn", "validate", "--data", VALID_RECORD])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_default_is_quiet() {
    perfindex()
        .args(["validate", "--data", VALID_RECORD])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_verbose_shows_pipeline_stages() {
    perfindex()
        .args(["--verbose", "validate", "--data", VALID_RECORD])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("validate_input"));
}

#[test]
fn test_log_json_produces_valid_json() {
    let output = perfindex()
        .args([
            "--log-json",
            "--log-level",
            "debug",
            "validate",
            "--data",
            VALID_RECORD,
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert!(!lines.is_empty());
    for line in lines {
        let event: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(event.get("timestamp").is_some());
        assert!(event.get("level").is_some());
    }
}

#[test]
fn test_env_var_overrides_cli_level() {
    perfindex()
        .env("PERFINDEX_LOG", "perfindex=debug")
        .args(["--log-level", "warn", "validate", "--data", VALID_RECORD])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}
