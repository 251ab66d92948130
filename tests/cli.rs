//! Command-line tests for the headless subcommands.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn graphdeck() -> Command {
    Command::cargo_bin("graphdeck").unwrap()
}

#[test]
fn list_prints_every_curve() {
    graphdeck()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("linear"))
        .stdout(predicate::str::contains("Sinus graph"))
        .stdout(predicate::str::contains("scatter-random"))
        .stdout(predicate::str::contains("random-noise"));
}

#[test]
fn export_writes_curve_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("linear.csv");

    graphdeck()
        .args(["export", "linear", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 5 rows"));

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "X,Y\n1,1\n2,2\n3,3\n4,4\n5,5\n");
}

#[test]
fn export_accepts_custom_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.csv");

    graphdeck()
        .args(["export", "--x", "-1, 0, 1", "--y", "1,0,1", "-o"])
        .arg(&path)
        .assert()
        .success();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "X,Y\n-1,1\n0,0\n1,1\n");
}

#[test]
fn export_reports_length_mismatch() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.csv");

    graphdeck()
        .args(["export", "--x", "1,2,3", "--y", "4,5", "-o"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be the same"));

    assert!(!path.exists());
}

#[test]
fn export_reports_non_numeric_input() {
    let dir = tempdir().unwrap();

    graphdeck()
        .args(["export", "--x", "1,a,3", "--y", "4,5,6", "-o"])
        .arg(dir.path().join("bad.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("numeric data"));
}

#[test]
fn export_needs_a_source() {
    let dir = tempdir().unwrap();

    graphdeck()
        .args(["export", "-o"])
        .arg(dir.path().join("none.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("curve name"));
}

#[test]
fn unknown_curve_is_rejected() {
    graphdeck()
        .args(["export", "tangent", "-o", "out.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn render_writes_png() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sine.png");

    graphdeck()
        .args(["render", "sine", "--width", "320", "--height", "240", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sinus graph"));

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn render_rejects_unknown_format() {
    let dir = tempdir().unwrap();

    graphdeck()
        .args(["render", "cosine", "-o"])
        .arg(dir.path().join("graph.gif"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format: gif"));
}

#[test]
fn missing_file_exits_with_error() {
    graphdeck()
        .arg("/nonexistent/graph.png")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn log_option_creates_log_file() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("graphdeck.log");

    graphdeck()
        .args(["list", "--log"])
        .arg(&log)
        .assert()
        .success();

    let text = fs::read_to_string(&log).unwrap();
    assert!(text.contains("Starting Graphdeck"));
}
