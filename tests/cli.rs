use std::fs;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn run(home: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pretty-ms"))
        .args(args)
        .env("HOME", home.path())
        .output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn format() {
    let home = TempDir::new().unwrap();

    let output = run(&home, &["95000", "0", "-1000"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1m 35s\n0ms\n-1s\n");

    let output = run(&home, &["--colon-notation", "3723400"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1:02:03.4\n");

    let output = run(&home, &["--verbose", "--unit-count", "1", "90061000"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1 day\n");
}

#[test]
fn config() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".pretty-ms.yaml"), "verbose: true\n").unwrap();

    let output = run(&home, &["1000"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1 second\n");

    let path = home.path().join("colon.yaml");
    fs::write(&path, "colonNotation: true\n").unwrap();

    let output = run(&home, &["--config", path.to_str().unwrap(), "95000"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1:35\n");
}

#[test]
fn invalid_input() {
    let home = TempDir::new().unwrap();

    let output = run(&home, &["inf"]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn invalid_config() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("invalid.yaml");
    fs::write(&path, "unitCounts: 2\n").unwrap();

    let output = run(&home, &["--config", path.to_str().unwrap(), "1000"]);
    assert!(!output.status.success());
}
