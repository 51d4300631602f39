use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// A record every validation stage accepts
pub const VALID_RECORD: &str = r#"{
    "hours_studied": 7,
    "previous_scores": 85,
    "extracurricular": "Yes",
    "sleep_hours": 8,
    "sample_papers": 5
}"#;

/// Linear artifact predicting 81.5 for [`VALID_RECORD`]
pub const LINEAR_MODEL: &str = r#"{
    "format_version": 1,
    "kind": "linear",
    "feature_names": ["hours_studied", "previous_scores", "extracurricular", "sleep_hours", "sample_papers"],
    "intercept": -30.0,
    "coefficients": [3.0, 1.0, 0.5, 0.5, 0.2]
}"#;

/// Two-tree forest predicting 62.5 for [`VALID_RECORD`]
pub const FOREST_MODEL: &str = r#"{
    "format_version": 1,
    "kind": "forest",
    "feature_names": ["hours_studied", "previous_scores", "extracurricular", "sleep_hours", "sample_papers"],
    "trees": [
        {"nodes": [
            {"feature": 1, "threshold": 70.0, "left": 1, "right": 2},
            {"value": 40.0},
            {"value": 75.0}
        ]},
        {"nodes": [
            {"feature": 0, "threshold": 10.0, "left": 1, "right": 2},
            {"value": 50.0},
            {"value": 90.0}
        ]}
    ]
}"#;

/// Get a Command for perfindex, isolated from the caller's environment
pub fn perfindex() -> Command {
    let mut cmd = cargo_bin_cmd!("perfindex");
    cmd.env_remove("PERFINDEX_MODEL")
        .env_remove("PERFINDEX_LOG")
        .env_remove("RUST_LOG")
        .env(
            "PERFINDEX_CONFIG_DIR",
            std::env::temp_dir().join("perfindex-tests-no-config"),
        );
    cmd
}

/// Write `content` to `dir/name` and return the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Parse a command's stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Parse a command's stderr as JSON
pub fn stderr_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stderr).unwrap()
}
