//! Library-level tests for the calculation and persistence round trip.

use ergodesk::models::{CalculationState, Environment, Profile, HEIGHT_MAX, HEIGHT_MIN};
use ergodesk::services::measurement::{calculate_all, round1, CHAIR_MAX, CHAIR_MIN};
use ergodesk::services::{handle_input_event, InputEvent, PresentationAdapter, StateStore};
use ergodesk::storage::FileStore;
use tempfile::TempDir;

fn heights() -> impl Iterator<Item = f64> {
    (1000..=2200).step_by(7).map(|tenths| f64::from(tenths) / 10.0)
}

#[test]
fn test_chair_stays_in_bounds_everywhere() {
    for height in heights() {
        for profile in Profile::ALL {
            for environment in Environment::ALL {
                let results = calculate_all(height, profile, environment);
                assert!(
                    (CHAIR_MIN..=CHAIR_MAX).contains(&results.chair.value),
                    "chair {} out of bounds at {height}/{profile}/{environment}",
                    results.chair.value
                );
                for measurement in [results.chair, results.desk, results.monitor] {
                    assert!((measurement.range.min - round1(measurement.value - 1.5)).abs() < 1e-9);
                    assert!((measurement.range.max - round1(measurement.value + 1.5)).abs() < 1e-9);
                }
            }
        }
    }
}

#[test]
fn test_results_never_decrease_with_height() {
    for profile in Profile::ALL {
        for environment in Environment::ALL {
            let mut previous = calculate_all(HEIGHT_MIN, profile, environment);
            for height in heights().skip(1) {
                let current = calculate_all(height, profile, environment);
                assert!(current.chair.value >= previous.chair.value);
                assert!(current.desk.value >= previous.desk.value);
                assert!(current.monitor.value >= previous.monitor.value);
                previous = current;
            }
        }
    }
}

#[test]
fn test_state_round_trips_through_file_storage() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");

    let mut store = StateStore::open(FileStore::new(path.clone()));
    let mut presenter = PresentationAdapter::new();
    handle_input_event(&mut store, &mut presenter, InputEvent::HeightCommit("183.46".into()));
    handle_input_event(&mut store, &mut presenter, InputEvent::SelectProfile(Profile::LongTorso));
    handle_input_event(&mut store, &mut presenter, InputEvent::ToggleEnvironment);
    let saved = *store.state();

    let reopened = StateStore::open(FileStore::new(path));
    assert_eq!(*reopened.state(), saved);
    assert_eq!(
        saved,
        CalculationState::new(183.5, Profile::LongTorso, Environment::Office)
    );
}

#[test]
fn test_extreme_heights_are_clamped_on_commit() {
    let dir = TempDir::new().unwrap();
    let mut store = StateStore::open(FileStore::new(dir.path().join("storage.json")));

    assert!(store.set_height("1e6", false));
    assert!((store.state().height - HEIGHT_MAX).abs() < 1e-9);
    assert!(store.set_height("0", false));
    assert!((store.state().height - HEIGHT_MIN).abs() < 1e-9);
    assert!(!store.set_height("NaN", false));
    assert!((store.state().height - HEIGHT_MIN).abs() < 1e-9);
}
