use crate::cli::support::{
    perfindex, stderr_json, stdout_json, write_file, FOREST_MODEL, LINEAR_MODEL, VALID_RECORD,
};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_predict_with_linear_model() {
    let dir = tempdir().unwrap();
    let model = write_file(dir.path(), "model.json", LINEAR_MODEL);

    perfindex()
        .args(["predict", "--data", VALID_RECORD, "--model"])
        .arg(&model)
        .assert()
        .success()
        .stdout("Performance Index: 81.5\n");
}

#[test]
fn test_predict_with_forest_model() {
    let dir = tempdir().unwrap();
    let model = write_file(dir.path(), "forest.json", FOREST_MODEL);

    perfindex()
        .args(["predict", "--data", VALID_RECORD, "--model"])
        .arg(&model)
        .assert()
        .success()
        .stdout("Performance Index: 62.5\n");
}

#[test]
fn test_predict_json_output() {
    let dir = tempdir().unwrap();
    let model = write_file(dir.path(), "model.json", LINEAR_MODEL);

    let output = perfindex()
        .args(["--format", "json", "predict", "--data", VALID_RECORD, "--model"])
        .arg(&model)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        serde_json::json!({"performance_index": 81.5})
    );
}

#[test]
fn test_predict_rounds_to_two_decimals() {
    let dir = tempdir().unwrap();
    let model = write_file(
        dir.path(),
        "model.json",
        &LINEAR_MODEL.replace("-30.0", "-30.12345"),
    );

    perfindex()
        .args(["predict", "--data", VALID_RECORD, "--model"])
        .arg(&model)
        .assert()
        .success()
        .stdout("Performance Index: 81.38\n");
}

#[test]
fn test_predict_model_from_env() {
    let dir = tempdir().unwrap();
    let model = write_file(dir.path(), "model.json", LINEAR_MODEL);

    perfindex()
        .env("PERFINDEX_MODEL", &model)
        .args(["predict", "--data", VALID_RECORD])
        .assert()
        .success()
        .stdout(predicate::str::contains("81.5"));
}

// ============================================================================
// Rejection happens before the model is touched
// ============================================================================

#[test]
fn test_rejected_record_without_model_exits_3() {
    perfindex()
        .args(["predict", "--data", r#"{"hours_studied": 30}"#])
        .assert()
        .code(3)
        .stdout(predicate::str::contains(
            "hours_studied: Hours studied must be between 0 and 24.",
        ));
}

#[test]
fn test_rejected_record_with_broken_model_exits_3() {
    let dir = tempdir().unwrap();
    let model = write_file(dir.path(), "model.json", "not a model");

    perfindex()
        .args(["predict", "--data", "{}", "--model"])
        .arg(&model)
        .assert()
        .code(3);
}

// ============================================================================
// Inference unavailable (exit code 4)
// ============================================================================

#[test]
fn test_predict_without_model() {
    perfindex()
        .args(["predict", "--data", VALID_RECORD])
        .assert()
        .code(4)
        .stdout("")
        .stderr(predicate::str::contains(
            "inference unavailable: no model configured",
        ))
        .stderr(predicate::str::contains("hint: pass --model"));
}

#[test]
fn test_predict_missing_artifact() {
    let dir = tempdir().unwrap();

    let output = perfindex()
        .args(["--format", "json", "predict", "--data", VALID_RECORD, "--model"])
        .arg(dir.path().join("absent.json"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(4));
    let err = stderr_json(&output);
    assert_eq!(err["error"]["type"], "inference_unavailable");
    assert!(err["error"]["message"]
        .as_str()
        .unwrap()
        .contains("model artifact not found"));
}

#[test]
fn test_predict_rejects_mismatched_feature_layout() {
    let dir = tempdir().unwrap();
    let model = write_file(
        dir.path(),
        "model.json",
        &LINEAR_MODEL.replace("sleep_hours", "sleep"),
    );

    perfindex()
        .args(["predict", "--data", VALID_RECORD, "--model"])
        .arg(&model)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("feature_names"));
}

#[test]
fn test_predict_rejects_malformed_artifact() {
    let dir = tempdir().unwrap();
    let model = write_file(dir.path(), "model.json", "{\"format_version\": 1");

    perfindex()
        .args(["predict", "--data", VALID_RECORD, "--model"])
        .arg(&model)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid model artifact"));
}
