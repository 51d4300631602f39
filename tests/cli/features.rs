use crate::cli::support::{perfindex, VALID_RECORD};
use predicates::prelude::*;

#[test]
fn test_features_human_output() {
    perfindex()
        .args(["features", "--data", VALID_RECORD])
        .assert()
        .success()
        .stdout(
            "hours_studied: 7\n\
             previous_scores: 85\n\
             extracurricular: 1\n\
             sleep_hours: 8\n\
             sample_papers: 5\n",
        );
}

#[test]
fn test_features_json_is_ordered_array() {
    perfindex()
        .args(["--format", "json", "features", "--data", VALID_RECORD])
        .assert()
        .success()
        .stdout("[7.0,85.0,1.0,8.0,5.0]\n");
}

#[test]
fn test_features_false_flag_encodes_zero() {
    perfindex()
        .args([
            "--format",
            "json",
            "features",
            "--data",
            r#"{"hours_studied": "2.5", "previous_scores": "40", "extracurricular": "no",
                "sleep_hours": 9, "sample_papers": 0}"#,
        ])
        .assert()
        .success()
        .stdout("[2.5,40.0,0.0,9.0,0.0]\n");
}

#[test]
fn test_features_rejects_invalid_record() {
    perfindex()
        .args(["features", "--data", r#"{"hours_studied": 7}"#])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("previous_scores: This field cannot be null."));
}
