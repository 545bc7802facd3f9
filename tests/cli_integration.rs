//! Integration tests for the `todo` binary.
//!
//! Only paths that exit before the terminal UI starts are exercised here.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Get the path to the built `todo` binary.
fn todo_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_todo"))
}

#[test]
fn help_lists_options() {
    let output = Command::new(todo_bin()).arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-file"));
    assert!(stdout.contains("--task"));
}

#[test]
fn version_flag() {
    let output = Command::new(todo_bin()).arg("--version").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_config_file_exits_with_error() {
    let tmp = TempDir::new().unwrap();
    let output = Command::new(todo_bin())
        .current_dir(tmp.path())
        .args(["--config", "missing.toml"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: could not read missing.toml"));
}

#[test]
fn invalid_config_exits_with_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("todo.toml"), "[ui]\nshow_key_hints = \"yes\"\n").unwrap();
    let output = Command::new(todo_bin())
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: could not parse config"));
}

#[test]
fn unknown_flag_is_usage_error() {
    let output = Command::new(todo_bin()).arg("--bogus").output().unwrap();
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}
