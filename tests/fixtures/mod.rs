//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every helper

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the ergodesk binary
pub fn ergodesk_bin() -> String {
    std::env::var("CARGO_BIN_EXE_ergodesk").unwrap_or_else(|_| "target/release/ergodesk".to_string())
}

/// Creates an empty config directory that lives as long as the returned guard.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Creates a Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(ergodesk_bin());
    cmd.env("ERGODESK_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command in an isolated config directory.
pub fn run(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Runs a command and parses its stdout as JSON, asserting success.
pub fn run_json(args: &[&str], config_dir: &Path) -> serde_json::Value {
    let output = run(args, config_dir);
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command {args:?} should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

/// Writes a raw persisted state entry into the default storage file.
pub fn write_persisted_state(config_dir: &Path, raw_state: &str) {
    let mut map = serde_json::Map::new();
    map.insert(
        "ergodesk_state_v3".to_string(),
        serde_json::Value::String(raw_state.to_string()),
    );
    fs::write(
        config_dir.join("storage.json"),
        serde_json::to_string(&map).expect("Failed to encode storage"),
    )
    .expect("Failed to write storage file");
}

/// Asserts `actual` equals `expected` to one decimal.
pub fn assert_cm(actual: &serde_json::Value, expected: f64) {
    let value = actual.as_f64().expect("Expected a number");
    assert!(
        (value - expected).abs() < 1e-9,
        "Expected {expected} cm, got {value}"
    );
}
