use crate::cli::support::{perfindex, stdout_json, write_file, FOREST_MODEL, LINEAR_MODEL};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_model_human_summary() {
    let dir = tempdir().unwrap();
    let model = write_file(dir.path(), "forest.json", FOREST_MODEL);

    perfindex()
        .arg("model")
        .arg("--model")
        .arg(&model)
        .assert()
        .success()
        .stdout(predicate::str::contains("kind: forest (2 trees)"))
        .stdout(predicate::str::contains("format_version: 1"))
        .stdout(predicate::str::contains(
            "features: hours_studied, previous_scores, extracurricular, sleep_hours, sample_papers",
        ))
        .stdout(predicate::str::contains("fingerprint: "));
}

#[test]
fn test_model_json_summary() {
    let dir = tempdir().unwrap();
    let model = write_file(dir.path(), "model.json", LINEAR_MODEL);

    let output = perfindex()
        .args(["--format", "json", "model", "--model"])
        .arg(&model)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["kind"], "linear");
    assert_eq!(json["format_version"], 1);
    assert_eq!(json["size"], 5);
    assert_eq!(json["feature_names"][0], "hours_studied");

    let fingerprint = json["fingerprint"].as_str().unwrap();
    assert_eq!(fingerprint.len(), 64);
    assert!(fingerprint.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_model_fingerprint_is_stable() {
    let dir = tempdir().unwrap();
    let a = write_file(dir.path(), "a.json", LINEAR_MODEL);
    let b = write_file(dir.path(), "b.json", LINEAR_MODEL);

    let fingerprint = |path: &std::path::Path| {
        let output = perfindex()
            .args(["--format", "json", "model", "--model"])
            .arg(path)
            .output()
            .unwrap();
        stdout_json(&output)["fingerprint"].clone()
    };

    assert_eq!(fingerprint(&a), fingerprint(&b));
}

#[test]
fn test_model_without_path() {
    perfindex()
        .arg("model")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("no model configured"));
}
