//! Command-line tests for the `budget-setup` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command with its config directory pointed at a fresh temp dir
fn budget_setup(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget-setup").expect("binary exists");
    cmd.env("BUDGET_SETUP_DIR", home.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_plan_prints_table_and_submission() {
    let home = TempDir::new().unwrap();
    budget_setup(&home)
        .args(["plan", "--total", "500", "-c", "Food=200", "-c", "Rent=250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* Extra"))
        .stdout(predicate::str::contains("$50.00"))
        .stdout(predicate::str::contains("(Auto)"))
        .stdout(predicate::str::contains(r#""total_budget": "500""#));
}

#[test]
fn test_plan_json_output_is_parseable() {
    let home = TempDir::new().unwrap();
    let output = budget_setup(&home)
        .args(["plan", "--total", "300", "-c", "Food=100", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let submission: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(submission["total_budget"], "300");

    let categories: serde_json::Value =
        serde_json::from_str(submission["categories_json"].as_str().unwrap()).unwrap();
    assert_eq!(categories[0]["category"], "Food");
    assert_eq!(categories[1]["category"], "Extra");
    assert_eq!(categories[1]["amount"], 200.0);
}

#[test]
fn test_plan_over_budget_fails_with_remaining_amount() {
    let home = TempDir::new().unwrap();
    budget_setup(&home)
        .args(["plan", "--total", "500", "-c", "Food=480", "-c", "Fun=30"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Only $20.00 remaining."));
}

#[test]
fn test_plan_rejects_amount_too_large_to_sum() {
    let home = TempDir::new().unwrap();
    budget_setup(&home)
        .args(["plan", "--total", "500", "-c", "Food=100", "-c", "Fun=92233720368547758.07"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Please enter a valid amount."));
}

#[test]
fn test_plan_lenient_mode() {
    let home = TempDir::new().unwrap();
    budget_setup(&home)
        .args([
            "plan", "--total", "100", "--mode", "lenient", "-c", "Food=250", "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Extra").not());
}

#[test]
fn test_plan_cannot_delete_extra_in_strict_mode() {
    let home = TempDir::new().unwrap();
    budget_setup(&home)
        .args(["plan", "--total", "100", "-c", "Food=50", "--delete", "Extra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Extra"));
}

#[test]
fn test_plan_with_seed_file() {
    let home = TempDir::new().unwrap();
    let seed = home.path().join("seed.json");
    fs::write(
        &seed,
        r#"[{"category":"Rent","amount":300.0},{"category":"Extra","amount":1.0}]"#,
    )
    .unwrap();

    budget_setup(&home)
        .args(["plan", "--total", "400", "--seed"])
        .arg(&seed)
        .args(["--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"\"category\":\"Rent\""#))
        .stdout(predicate::str::contains(r#"\"amount\":100.0"#));
}

#[test]
fn test_replay_reports_rejections_and_writes_submission() {
    let home = TempDir::new().unwrap();
    let script = home.path().join("session.yaml");
    let out = home.path().join("out").join("submission.json");
    fs::write(
        &script,
        r#"
mode: strict
steps:
  - set_total: 500
  - add: { name: Food, amount: 200 }
  - add: { name: Fun, amount: 400 }
  - lock: 500
  - set_total: 600
  - submit: ~
"#,
    )
    .unwrap();

    budget_setup(&home)
        .arg("replay")
        .arg(&script)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("[3] add Fun 400: rejected"))
        .stdout(predicate::str::contains("[5] set total 600: rejected"))
        .stdout(predicate::str::contains("4 applied, 2 rejected, 1 submitted"));

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written["total_budget"], "500.00");
}

#[test]
fn test_replay_missing_script_fails() {
    let home = TempDir::new().unwrap();
    budget_setup(&home)
        .args(["replay", "does-not-exist.yaml"])
        .assert()
        .failure();
}

#[test]
fn test_navigate_prints_target() {
    let home = TempDir::new().unwrap();
    budget_setup(&home)
        .args(["navigate", "2025-03"])
        .assert()
        .success()
        .stdout("/budget-setup?month=2025-03\n");

    budget_setup(&home)
        .args(["navigate", "2025-11", "--path", "/plan?month=2025-10"])
        .assert()
        .success()
        .stdout("/plan?month=2025-11\n");

    budget_setup(&home)
        .args(["navigate", "2025-13"])
        .assert()
        .failure();
}

#[test]
fn test_config_shows_paths_and_defaults() {
    let home = TempDir::new().unwrap();
    budget_setup(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(home.path().to_string_lossy().as_ref()))
        .stdout(predicate::str::contains("Mode:              strict"))
        .stdout(predicate::str::contains("3000ms visible, 500ms fade"));
}

#[test]
fn test_settings_file_changes_default_mode() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("config.json"), r#"{"mode": "lenient"}"#).unwrap();

    budget_setup(&home)
        .args(["plan", "--total", "10", "-c", "Food=20", "--json"])
        .assert()
        .success();
}
