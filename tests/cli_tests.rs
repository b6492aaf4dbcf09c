//! End-to-end tests driving the tradelog binary against a temporary journal.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

/// Write a config pointing every path into the given temp directory.
fn write_config(dir: &Path) -> PathBuf {
    let config_path = dir.join("config.toml");
    let toml = format!(
        "[storage]\n\
         database_path = \"{}\"\n\
         images_dir = \"{}\"\n\
         \n\
         [logging]\n\
         level = \"error\"\n\
         format = \"pretty\"\n",
        dir.join("journal.db").display(),
        dir.join("images").display()
    );
    fs::write(&config_path, toml).expect("write temp config");
    config_path
}

fn add_trade(config: &Path, pair: &str, strategy: &str, profit: &str) {
    Command::cargo_bin("tradelog")
        .unwrap()
        .args(["add", "--config"])
        .arg(config)
        .args(["--pair", pair])
        .args(["--strategy", strategy])
        .args(["--profit", profit])
        .args(["--date", "2026-08-20"])
        .args(["--quantity", "1.0"])
        .arg("--waited-4h")
        .assert()
        .success()
        .stdout(predicate::str::contains("saved"));
}

#[test]
fn add_then_history_lists_trade() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    add_trade(&config, "EURUSD", "EMA Cross", "2.0");

    Command::cargo_bin("tradelog")
        .unwrap()
        .args(["history", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("EURUSD"))
        .stdout(predicate::str::contains("EMA Cross"));
}

#[test]
fn history_filters_compose() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    add_trade(&config, "EURUSD", "EMA Cross", "2.0");
    add_trade(&config, "GBPUSD", "Breakout", "-1.0");

    // Case-insensitive strategy substring
    Command::cargo_bin("tradelog")
        .unwrap()
        .args(["history", "--config"])
        .arg(&config)
        .args(["--strategy", "ema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EURUSD"))
        .stdout(predicate::str::contains("GBPUSD").not());

    // Losing filter excludes the winner
    Command::cargo_bin("tradelog")
        .unwrap()
        .args(["history", "--config"])
        .arg(&config)
        .arg("--losing")
        .assert()
        .success()
        .stdout(predicate::str::contains("GBPUSD"))
        .stdout(predicate::str::contains("EURUSD").not());
}

#[test]
fn stats_json_matches_worked_example() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    for profit in ["2.0", "-1.0", "3.0", "0.0"] {
        add_trade(&config, "EURUSD", "EMA Cross", profit);
    }

    let output = Command::cargo_bin("tradelog")
        .unwrap()
        .args(["stats", "--config"])
        .arg(&config)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["total"], 4);
    assert_eq!(summary["win_rate"], 50.0);
    assert_eq!(summary["avg_win"], 2.5);
    assert_eq!(summary["avg_loss"], -1.0);

    let cumulative: Vec<f64> = summary["equity_curve"]
        .as_array()
        .unwrap()
        .iter()
        .map(|point| point["cumulative"].as_f64().unwrap())
        .collect();
    assert_eq!(cumulative, [2.0, 1.0, 4.0, 4.0]);
}

#[test]
fn export_of_empty_journal_is_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    let output = Command::cargo_bin("tradelog")
        .unwrap()
        .args(["export", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "ID,Date,Pair,Direction,Quantity,Strategy,Waited 4H,Trend Followed,RR OK,\
         Emotional,Followed Plan,Profit%,Notes,Pre Image,Post Image\n"
    );
}

#[test]
fn export_to_file_reports_count() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    add_trade(&config, "EURUSD", "EMA Cross", "2.0");

    let out_path = dir.path().join("journal.csv");
    Command::cargo_bin("tradelog")
        .unwrap()
        .args(["export", "--config"])
        .arg(&config)
        .args(["--output"])
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 trades"));

    let csv = fs::read_to_string(&out_path).unwrap();
    assert!(csv.lines().count() == 2);
    assert!(csv.contains("EURUSD"));
}

#[test]
fn delete_with_yes_removes_trade() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    add_trade(&config, "EURUSD", "EMA Cross", "2.0");

    Command::cargo_bin("tradelog")
        .unwrap()
        .args(["delete", "--config"])
        .arg(&config)
        .args(["1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted"));

    Command::cargo_bin("tradelog")
        .unwrap()
        .args(["history", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("No trades match."));
}

#[test]
fn edit_keeps_checklist_and_missing_id_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    add_trade(&config, "EURUSD", "EMA Cross", "2.0");

    Command::cargo_bin("tradelog")
        .unwrap()
        .args(["edit", "--config"])
        .arg(&config)
        .args(["1", "--pair", "GBPUSD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated"));

    // The checked rule from `add` survives the edit
    Command::cargo_bin("tradelog")
        .unwrap()
        .args(["show", "--config"])
        .arg(&config)
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("GBPUSD"))
        .stdout(predicate::str::contains("✓ Waited for 4H candle close"));

    // Editing a vanished id succeeds but changes nothing
    Command::cargo_bin("tradelog")
        .unwrap()
        .args(["edit", "--config"])
        .arg(&config)
        .args(["99", "--pair", "USDJPY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn add_copies_screenshot_into_images_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    let shot = dir.path().join("setup.png");
    fs::write(&shot, b"fake png").unwrap();

    Command::cargo_bin("tradelog")
        .unwrap()
        .args(["add", "--config"])
        .arg(&config)
        .args(["--pair", "EURUSD", "--profit", "1.0"])
        .args(["--pre-image"])
        .arg(&shot)
        .assert()
        .success();

    assert!(dir.path().join("images").join("setup.png").exists());

    Command::cargo_bin("tradelog")
        .unwrap()
        .args(["show", "--config"])
        .arg(&config)
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("setup.png"));
}

#[test]
fn non_numeric_profit_counts_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    Command::cargo_bin("tradelog")
        .unwrap()
        .args(["add", "--config"])
        .arg(&config)
        .args(["--pair", "EURUSD", "--profit", "oops", "--quantity", "x"])
        .assert()
        .success();

    Command::cargo_bin("tradelog")
        .unwrap()
        .args(["show", "--config"])
        .arg(&config)
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Breakeven"));
}
