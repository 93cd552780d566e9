//! End-to-end tests for `ergodesk state` commands.

use std::fs;

mod fixtures;
use fixtures::*;

#[test]
fn test_state_show_defaults_on_first_run() {
    let dir = temp_config_dir();
    let result = run_json(&["state", "show", "--json"], dir.path());

    assert_cm(&result["state"]["height"], 170.0);
    assert_eq!(result["state"]["profile"], "standard");
    assert_eq!(result["state"]["environment"], "home");
    assert_cm(&result["results"]["chair"]["value"], 42.2);
}

#[test]
fn test_state_set_persists_between_runs() {
    let dir = temp_config_dir();
    run_json(
        &[
            "state", "set", "--height", "150", "--profile", "longLegs", "--json",
        ],
        dir.path(),
    );

    let result = run_json(&["state", "show", "--json"], dir.path());
    assert_cm(&result["state"]["height"], 150.0);
    assert_eq!(result["state"]["profile"], "longLegs");
    assert_cm(&result["results"]["desk"]["value"], 59.6);

    let storage = fs::read_to_string(dir.path().join("storage.json")).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&storage).unwrap();
    let persisted: serde_json::Value =
        serde_json::from_str(entries["ergodesk_state_v3"].as_str().unwrap()).unwrap();
    assert_eq!(persisted["profile"], "longLegs");
    assert_eq!(persisted["environment"], "home");
}

#[test]
fn test_state_set_clamps_height() {
    let dir = temp_config_dir();
    let result = run_json(&["state", "set", "--height", "300", "--json"], dir.path());
    assert_cm(&result["state"]["height"], 220.0);
}

#[test]
fn test_state_set_requires_a_value() {
    let dir = temp_config_dir();
    let output = run(&["state", "set"], dir.path());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_state_set_invalid_value_changes_nothing() {
    let dir = temp_config_dir();
    run_json(&["state", "set", "--height", "180", "--json"], dir.path());

    let output = run(
        &["state", "set", "--height", "160", "--environment", "garage"],
        dir.path(),
    );
    assert_eq!(output.status.code(), Some(1));

    let result = run_json(&["state", "show", "--json"], dir.path());
    assert_cm(&result["state"]["height"], 180.0);
}

#[test]
fn test_state_set_unparseable_height() {
    let dir = temp_config_dir();
    let output = run(&["state", "set", "--height", "tall"], dir.path());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_state_step() {
    let dir = temp_config_dir();
    let result = run_json(&["state", "step", "up", "--times", "3", "--json"], dir.path());
    assert_cm(&result["state"]["height"], 170.3);

    let result = run_json(&["state", "step", "down", "--json"], dir.path());
    assert_cm(&result["state"]["height"], 170.2);
}

#[test]
fn test_state_step_stops_at_bounds() {
    let dir = temp_config_dir();
    run_json(&["state", "set", "--height", "219.9", "--json"], dir.path());
    let result = run_json(&["state", "step", "up", "--times", "5", "--json"], dir.path());
    assert_cm(&result["state"]["height"], 220.0);
}

#[test]
fn test_state_reset() {
    let dir = temp_config_dir();
    run_json(
        &["state", "set", "--height", "150", "-p", "longTorso", "-e", "office", "--json"],
        dir.path(),
    );

    let result = run_json(&["state", "reset", "--json"], dir.path());
    assert_cm(&result["state"]["height"], 170.0);
    assert_eq!(result["state"]["profile"], "standard");
    assert_eq!(result["state"]["environment"], "home");

    let result = run_json(&["state", "show", "--json"], dir.path());
    assert_eq!(result["state"]["profile"], "standard");
}

#[test]
fn test_state_restores_valid_fields_of_partial_data() {
    let dir = temp_config_dir();
    write_persisted_state(
        dir.path(),
        r#"{"height":"abc","profile":"longTorso","environment":"garage"}"#,
    );

    let result = run_json(&["state", "show", "--json"], dir.path());
    assert_cm(&result["state"]["height"], 170.0);
    assert_eq!(result["state"]["profile"], "longTorso");
    assert_eq!(result["state"]["environment"], "home");
}

#[test]
fn test_state_survives_corrupt_storage() {
    let dir = temp_config_dir();
    fs::write(dir.path().join("storage.json"), "not json at all").unwrap();

    let result = run_json(&["state", "show", "--json"], dir.path());
    assert_cm(&result["state"]["height"], 170.0);

    // The next write replaces the corrupt file
    run_json(&["state", "set", "--height", "160", "--json"], dir.path());
    let result = run_json(&["state", "show", "--json"], dir.path());
    assert_cm(&result["state"]["height"], 160.0);
}

#[test]
fn test_state_show_text() {
    let dir = temp_config_dir();
    run_json(&["state", "set", "-e", "office", "--json"], dir.path());

    let output = run(&["state", "show"], dir.path());
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Environment: Office (Shoe thickness -2 cm)"));
    assert!(stdout.contains("Chair          40.2 cm"));
}
