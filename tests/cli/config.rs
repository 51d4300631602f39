use crate::cli::support::{perfindex, write_file, FOREST_MODEL, LINEAR_MODEL, VALID_RECORD};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_explicit_config_with_relative_model_path() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join("models")).unwrap();
    write_file(&dir.path().join("models"), "linear.json", LINEAR_MODEL);
    let config = write_file(
        dir.path(),
        "config.toml",
        "[model]\npath = \"models/linear.json\"\n",
    );

    perfindex()
        .arg("--config")
        .arg(&config)
        .args(["predict", "--data", VALID_RECORD])
        .assert()
        .success()
        .stdout("Performance Index: 81.5\n");
}

#[test]
fn test_config_dir_env_var() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "model.json", LINEAR_MODEL);
    write_file(dir.path(), "config.toml", "[model]\npath = \"model.json\"\n");

    perfindex()
        .env("PERFINDEX_CONFIG_DIR", dir.path())
        .args(["predict", "--data", VALID_RECORD])
        .assert()
        .success()
        .stdout("Performance Index: 81.5\n");
}

#[test]
fn test_model_flag_overrides_config() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "model.json", LINEAR_MODEL);
    let forest = write_file(dir.path(), "forest.json", FOREST_MODEL);
    let config = write_file(dir.path(), "config.toml", "[model]\npath = \"model.json\"\n");

    perfindex()
        .arg("--config")
        .arg(&config)
        .args(["predict", "--data", VALID_RECORD, "--model"])
        .arg(&forest)
        .assert()
        .success()
        .stdout("Performance Index: 62.5\n");
}

#[test]
fn test_timeout_settings_accepted() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "model.json", LINEAR_MODEL);
    let config = write_file(
        dir.path(),
        "config.toml",
        "[model]\npath = \"model.json\"\ntimeout_ms = 2000\n",
    );

    perfindex()
        .arg("--config")
        .arg(&config)
        .args(["predict", "--data", VALID_RECORD, "--timeout-ms", "0"])
        .assert()
        .success();
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();

    perfindex()
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .args(["model"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_malformed_config_fails() {
    let dir = tempdir().unwrap();
    let config = write_file(dir.path(), "config.toml", "[model\npath = ");

    perfindex()
        .arg("--config")
        .arg(&config)
        .args(["predict", "--data", VALID_RECORD])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid config"));
}
