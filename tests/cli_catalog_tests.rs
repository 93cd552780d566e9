//! End-to-end tests for `ergodesk profiles` and `ergodesk environments`.

mod fixtures;
use fixtures::*;

#[test]
fn test_profiles_json() {
    let dir = temp_config_dir();
    let result = run_json(&["profiles", "--json"], dir.path());
    let profiles = result.as_array().expect("Should be an array");

    let ids: Vec<&str> = profiles.iter().map(|p| p["id"].as_str().unwrap()).collect();
    assert_eq!(ids, ["standard", "longLegs", "longTorso"]);

    let long_legs = &profiles[1];
    assert_eq!(long_legs["name"], "Long legs");
    assert_cm(&long_legs["offsets"]["chair"], 2.0);
    assert_cm(&long_legs["offsets"]["desk"], 0.0);
    assert_cm(&long_legs["offsets"]["monitor"], -0.7);

    let long_torso = &profiles[2];
    assert_cm(&long_torso["offsets"]["chair"], -2.0);
    assert_cm(&long_torso["offsets"]["desk"], 1.5);
    assert_cm(&long_torso["offsets"]["monitor"], 1.5);
}

#[test]
fn test_profiles_text() {
    let dir = temp_config_dir();
    let output = run(&["profiles"], dir.path());
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ID"));
    assert!(stdout.contains("longTorso"));
    assert!(stdout.contains("+2.0 cm"));
}

#[test]
fn test_environments_json() {
    let dir = temp_config_dir();
    let result = run_json(&["environments", "--json"], dir.path());
    let environments = result.as_array().expect("Should be an array");

    assert_eq!(environments.len(), 2);
    assert_eq!(environments[0]["id"], "home");
    assert_cm(&environments[0]["shoe_correction"], 0.0);
    assert_eq!(environments[1]["id"], "office");
    assert_cm(&environments[1]["shoe_correction"], -2.0);
}

#[test]
fn test_environments_text() {
    let dir = temp_config_dir();
    let output = run(&["environments"], dir.path());
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("office"));
    assert!(stdout.contains("-2.0 cm"));
}
