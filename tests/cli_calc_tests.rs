//! End-to-end tests for `ergodesk calc`.

mod fixtures;
use fixtures::*;

#[test]
fn test_calc_default_scenario_json() {
    let dir = temp_config_dir();
    let result = run_json(&["calc", "--height", "170", "--json"], dir.path());

    assert_cm(&result["state"]["height"], 170.0);
    assert_eq!(result["state"]["profile"], "standard");
    assert_eq!(result["state"]["environment"], "home");
    assert_cm(&result["results"]["chair"]["value"], 42.2);
    assert_cm(&result["results"]["desk"]["value"], 65.2);
    assert_cm(&result["results"]["monitor"]["value"], 95.2);
    assert_cm(&result["results"]["chair"]["range"]["min"], 40.7);
    assert_cm(&result["results"]["chair"]["range"]["max"], 43.7);
}

#[test]
fn test_calc_office_scenario() {
    let dir = temp_config_dir();
    let result = run_json(
        &["calc", "--height", "170", "--environment", "office", "--json"],
        dir.path(),
    );

    assert_cm(&result["results"]["chair"]["value"], 40.2);
    assert_cm(&result["results"]["desk"]["value"], 63.2);
    assert_cm(&result["results"]["monitor"]["value"], 93.2);
}

#[test]
fn test_calc_long_legs_scenario() {
    let dir = temp_config_dir();
    let result = run_json(
        &["calc", "--height", "150", "-p", "longLegs", "--json"],
        dir.path(),
    );

    assert_cm(&result["results"]["chair"]["value"], 39.3);
    assert_cm(&result["results"]["desk"]["value"], 59.6);
    assert_cm(&result["results"]["monitor"]["value"], 88.9);
}

#[test]
fn test_calc_chair_floor_scenario() {
    let dir = temp_config_dir();
    let result = run_json(
        &[
            "calc", "--height", "100", "-p", "longTorso", "-e", "office", "--json",
        ],
        dir.path(),
    );

    assert_cm(&result["results"]["chair"]["value"], 30.0);
    assert_cm(&result["results"]["desk"]["value"], 45.0);
    assert_cm(&result["results"]["monitor"]["value"], 75.0);
}

#[test]
fn test_calc_clamps_height() {
    let dir = temp_config_dir();
    let result = run_json(&["calc", "--height", "250", "--json"], dir.path());
    assert_cm(&result["state"]["height"], 220.0);
    assert_cm(&result["results"]["chair"]["value"], 54.4);

    let result = run_json(&["calc", "--height", "-5", "--json"], dir.path());
    assert_cm(&result["state"]["height"], 100.0);
}

#[test]
fn test_calc_text_output() {
    let dir = temp_config_dir();
    let output = run(&["calc", "--height", "170"], dir.path());
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Height:      170.0 cm"), "stdout: {stdout}");
    assert!(stdout.contains("Profile:     Standard (standard)"));
    assert!(stdout.contains("Chair          42.2 cm   (40.7–43.7 cm)"));
    assert!(stdout.contains("Desk           65.2 cm   (63.7–66.7 cm)"));
}

#[test]
fn test_calc_does_not_persist() {
    let dir = temp_config_dir();
    run_json(&["calc", "--height", "150", "--json"], dir.path());
    assert!(!dir.path().join("storage.json").exists());
}

#[test]
fn test_calc_reads_leading_number() {
    let dir = temp_config_dir();
    let result = run_json(&["calc", "--height", "180cm", "--json"], dir.path());
    assert_cm(&result["state"]["height"], 180.0);
}

#[test]
fn test_calc_invalid_height() {
    let dir = temp_config_dir();
    let output = run(&["calc", "--height", "tall"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid height"), "stderr: {stderr}");
}

#[test]
fn test_calc_unknown_profile() {
    let dir = temp_config_dir();
    let output = run(&["calc", "--height", "170", "--profile", "tall"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tall"), "stderr: {stderr}");
    assert!(stderr.contains("longLegs"), "Should list valid profiles");
}

#[test]
fn test_calc_unknown_environment() {
    let dir = temp_config_dir();
    let output = run(&["calc", "--height", "170", "-e", "garage"], dir.path());
    assert_eq!(output.status.code(), Some(1));
}
