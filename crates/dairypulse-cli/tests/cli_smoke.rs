//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `dairypulse` binary against the demo
//! artifacts shipped in `assets/demo`.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("dairypulse").unwrap();
    cmd.env_remove("HF_TOKEN");
    cmd
}

fn demo_dir() -> String {
    format!("{}/assets/demo", env!("CARGO_MANIFEST_DIR"))
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("predict"))
        .stdout(predicate::str::contains("classes"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dairypulse"));
}

#[test]
fn config_prints_default_template() {
    cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"artifacts_dir\""))
        .stdout(predicate::str::contains("\"temperature\""))
        .stdout(predicate::str::contains("HF_TOKEN"));
}

// ---------------------------------------------------------------------------
// classes
// ---------------------------------------------------------------------------

#[test]
fn classes_lists_encoder_labels() {
    cmd()
        .args(["classes", "--artifacts-dir", &demo_dir()])
        .assert()
        .success()
        .stdout(predicate::str::contains("January"))
        .stdout(predicate::str::contains("Ice Cream"))
        .stdout(predicate::str::contains("Price per unit: 10 to 500"));
}

#[test]
fn classes_missing_artifacts_dir_errors() {
    cmd()
        .args(["classes", "--artifacts-dir", "/nonexistent/artifacts"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

// ---------------------------------------------------------------------------
// predict
// ---------------------------------------------------------------------------

#[test]
fn predict_requires_inputs() {
    cmd()
        .args(["predict", "--artifacts-dir", &demo_dir()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--month"));
}

#[test]
fn predict_cheap_milk_is_high_demand() {
    cmd()
        .args([
            "predict", "--artifacts-dir", &demo_dir(), "--month", "January", "--product", "Milk",
            "--price", "50", "--no-explain",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("High Demand"))
        .stdout(predicate::str::contains("AI Explanation").not());
}

#[test]
fn predict_expensive_milk_is_low_demand() {
    cmd()
        .args([
            "predict", "--artifacts-dir", &demo_dir(), "--month", "January", "--product", "Milk",
            "--price", "450", "--no-explain",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Low Demand"));
}

#[test]
fn predict_unknown_month_fails_with_message() {
    cmd()
        .args([
            "predict", "--artifacts-dir", &demo_dir(), "--month", "Smarch", "--product", "Milk",
            "--price", "50", "--no-explain",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown month category"));
}

#[test]
fn predict_out_of_range_price_fails() {
    cmd()
        .args([
            "predict", "--artifacts-dir", &demo_dir(), "--month", "May", "--product", "Curd",
            "--price", "501", "--no-explain",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn predict_without_token_fails_at_startup() {
    cmd()
        .args([
            "predict", "--artifacts-dir", &demo_dir(), "--month", "January", "--product", "Milk",
            "--price", "50",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HF_TOKEN"))
        .stdout(predicate::str::contains("Demand").not());
}

#[test]
fn unreachable_service_still_reports_label() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("dairypulse.json");
    let config = serde_json::json!({
        "artifacts_dir": demo_dir(),
        "explain": true,
        "llm": {
            "endpoint": "http://127.0.0.1:9/v1/chat/completions",
            "token_env": "DAIRYPULSE_SMOKE_TOKEN",
            "timeout_secs": 2,
            "connect_timeout_secs": 1
        }
    });
    std::fs::write(&config_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    cmd()
        .env("DAIRYPULSE_SMOKE_TOKEN", "not-a-real-token")
        .arg("predict")
        .arg(config_path.to_str().unwrap())
        .args(["--month", "January", "--product", "Milk", "--price", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("High Demand"))
        .stdout(predicate::str::contains("Explanation unavailable"))
        .stdout(predicate::str::contains("AI Explanation").not());
}

#[test]
fn inverted_price_range_fails_before_predicting() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("dairypulse.json");
    let config = serde_json::json!({
        "artifacts_dir": demo_dir(),
        "price_range": {"min": 500.0, "max": 10.0}
    });
    std::fs::write(&config_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    cmd()
        .arg("predict")
        .arg(config_path.to_str().unwrap())
        .args(["--month", "January", "--product", "Milk", "--price", "50", "--no-explain"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid price_range"))
        .stdout(predicate::str::contains("Demand").not());
}
