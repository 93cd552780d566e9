//! Ergonomic height formulas.
//!
//! Everything in this module is a pure function of `(height, profile,
//! environment)`. The chair height is computed first, clamped and rounded,
//! and that exact value feeds the desk and monitor formulas so the three
//! recommendations always agree with each other.

use serde::Serialize;

use crate::models::{Environment, ModelError, Profile};

/// Seated knee-back (popliteal) height as a fraction of body height.
pub const POPLITEAL_RATIO: f64 = 0.245;
/// Seat-to-elbow height as a fraction of body height.
pub const ELBOW_REST_RATIO: f64 = 0.135;
/// Seated eye height above the elbow rest, in centimeters.
pub const EYE_HEIGHT_OFFSET: f64 = 30.0;
/// Seat cushion compression correction, in centimeters.
pub const CUSHION_COMPRESSION: f64 = 0.5;
/// Half-width of every tolerance band, in centimeters.
pub const TOLERANCE: f64 = 1.5;
/// Lowest recommended chair height.
pub const CHAIR_MIN: f64 = 30.0;
/// Highest recommended chair height.
pub const CHAIR_MAX: f64 = 60.0;

/// Rounds half away from zero to one decimal place.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Acceptable band around a recommended value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToleranceRange {
    /// Lower bound in centimeters
    pub min: f64,
    /// Upper bound in centimeters
    pub max: f64,
}

/// A recommended value together with its tolerance band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    /// Point value in centimeters, rounded to 0.1
    pub value: f64,
    /// Tolerance band derived from the rounded value
    pub range: ToleranceRange,
}

impl Measurement {
    fn from_value(value: f64) -> Self {
        Self {
            value,
            range: tolerance_range(value),
        }
    }
}

/// The furniture pieces a recommendation is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Seat height
    Chair,
    /// Desk surface height
    Desk,
    /// Top edge of the monitor
    Monitor,
}

impl Target {
    /// All targets in display order.
    pub const ALL: [Self; 3] = [Self::Chair, Self::Desk, Self::Monitor];

    /// Slot identifier used by display surfaces.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Chair => "chair",
            Self::Desk => "desk",
            Self::Monitor => "monitor",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chair => "Chair",
            Self::Desk => "Desk",
            Self::Monitor => "Monitor top",
        }
    }
}

/// Chair, desk and monitor recommendations for one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendation {
    /// Recommended seat height
    pub chair: Measurement,
    /// Recommended desk height
    pub desk: Measurement,
    /// Recommended monitor top height
    pub monitor: Measurement,
}

impl Recommendation {
    /// Measurement for a single target.
    #[must_use]
    pub const fn get(&self, target: Target) -> &Measurement {
        match target {
            Target::Chair => &self.chair,
            Target::Desk => &self.desk,
            Target::Monitor => &self.monitor,
        }
    }
}

/// Recommended chair height, clamped to [`CHAIR_MIN`], [`CHAIR_MAX`] and
/// then rounded.
#[must_use]
pub fn chair_height(height: f64, profile: Profile, environment: Environment) -> f64 {
    let raw = POPLITEAL_RATIO * height
        + environment.shoe_correction()
        + CUSHION_COMPRESSION
        + profile.offsets().chair;

    round1(raw.clamp(CHAIR_MIN, CHAIR_MAX))
}

fn desk_from_chair(chair: f64, height: f64, profile: Profile) -> f64 {
    round1(chair + ELBOW_REST_RATIO * height + profile.offsets().desk)
}

fn monitor_from_chair(chair: f64, height: f64, profile: Profile) -> f64 {
    round1(chair + ELBOW_REST_RATIO * height + EYE_HEIGHT_OFFSET + profile.offsets().monitor)
}

/// Recommended desk height. Not clamped on its own; it inherits the chair clamp.
#[must_use]
pub fn desk_height(height: f64, profile: Profile, environment: Environment) -> f64 {
    desk_from_chair(chair_height(height, profile, environment), height, profile)
}

/// Recommended height of the monitor's top edge.
#[must_use]
pub fn monitor_top_height(height: f64, profile: Profile, environment: Environment) -> f64 {
    monitor_from_chair(chair_height(height, profile, environment), height, profile)
}

/// Tolerance band around an already rounded value.
#[must_use]
pub fn tolerance_range(value: f64) -> ToleranceRange {
    ToleranceRange {
        min: round1(value - TOLERANCE),
        max: round1(value + TOLERANCE),
    }
}

/// Computes all three recommendations.
#[must_use]
pub fn calculate_all(height: f64, profile: Profile, environment: Environment) -> Recommendation {
    let chair = chair_height(height, profile, environment);

    Recommendation {
        chair: Measurement::from_value(chair),
        desk: Measurement::from_value(desk_from_chair(chair, height, profile)),
        monitor: Measurement::from_value(monitor_from_chair(chair, height, profile)),
    }
}

/// Computes all three recommendations from persisted identifiers.
///
/// Unknown identifiers fail with [`ModelError::InvalidSelector`]; they are
/// never replaced by a default here.
pub fn calculate_all_by_id(
    height: f64,
    profile: &str,
    environment: &str,
) -> Result<Recommendation, ModelError> {
    Ok(calculate_all(height, profile.parse()?, environment.parse()?))
}

/// Human-readable chair formula for an environment.
///
/// e.g. `height × 0.245 + 0.5` or `height × 0.245 -2 + 0.5`
#[must_use]
pub fn chair_formula_text(environment: Environment) -> String {
    let shoe = environment.shoe_correction();
    let shoe_text = if shoe == 0.0 {
        String::new()
    } else {
        format!(" {shoe}")
    };

    format!("height × {POPLITEAL_RATIO}{shoe_text} + {CUSHION_COMPRESSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn all_inputs() -> impl Iterator<Item = (f64, Profile, Environment)> {
        (1000..=2200).step_by(5).flat_map(|tenths| {
            let height = f64::from(tenths) / 10.0;
            Profile::ALL.into_iter().flat_map(move |profile| {
                Environment::ALL
                    .into_iter()
                    .map(move |env| (height, profile, env))
            })
        })
    }

    #[test]
    fn test_round1_half_away_from_zero() {
        assert_close(round1(42.15), 42.2);
        assert_close(round1(39.25), 39.3);
        assert_close(round1(-0.25), -0.3);
        assert_close(round1(59.549), 59.5);
    }

    #[test]
    fn test_standard_home_at_170() {
        let rec = calculate_all(170.0, Profile::Standard, Environment::Home);
        assert_close(rec.chair.value, 42.2);
        assert_close(rec.desk.value, 65.2);
        assert_close(rec.monitor.value, 95.2);
    }

    #[test]
    fn test_standard_office_at_170() {
        let rec = calculate_all(170.0, Profile::Standard, Environment::Office);
        assert_close(rec.chair.value, 40.2);
        assert_close(rec.desk.value, 63.2);
        assert_close(rec.monitor.value, 93.2);
    }

    #[test]
    fn test_long_legs_home_at_150() {
        let rec = calculate_all(150.0, Profile::LongLegs, Environment::Home);
        assert_close(rec.chair.value, 39.3);
        assert_close(rec.desk.value, 59.6);
        assert_close(rec.monitor.value, 88.9);
    }

    #[test]
    fn test_chair_floor_applies_before_desk_and_monitor() {
        let rec = calculate_all(100.0, Profile::LongTorso, Environment::Office);
        assert_close(rec.chair.value, 30.0);
        assert_close(rec.desk.value, 45.0);
        assert_close(rec.monitor.value, 75.0);
    }

    #[test]
    fn test_individual_functions_match_calculate_all() {
        for (height, profile, env) in all_inputs() {
            let rec = calculate_all(height, profile, env);
            assert_close(chair_height(height, profile, env), rec.chair.value);
            assert_close(desk_height(height, profile, env), rec.desk.value);
            assert_close(monitor_top_height(height, profile, env), rec.monitor.value);
        }
    }

    #[test]
    fn test_chair_always_within_bounds() {
        for (height, profile, env) in all_inputs() {
            let chair = chair_height(height, profile, env);
            assert!(
                (CHAIR_MIN..=CHAIR_MAX).contains(&chair),
                "chair {chair} out of bounds for {height}/{profile}/{env}"
            );
        }
    }

    #[test]
    fn test_calculation_is_idempotent() {
        for (height, profile, env) in all_inputs() {
            assert_eq!(
                calculate_all(height, profile, env),
                calculate_all(height, profile, env)
            );
        }
    }

    #[test]
    fn test_ranges_derive_from_rounded_values() {
        for (height, profile, env) in all_inputs() {
            let rec = calculate_all(height, profile, env);
            for target in Target::ALL {
                let m = rec.get(target);
                assert_close(m.range.min, round1(m.value - TOLERANCE));
                assert_close(m.range.max, round1(m.value + TOLERANCE));
            }
        }
    }

    #[test]
    fn test_monotonic_in_height() {
        for profile in Profile::ALL {
            for env in Environment::ALL {
                let mut previous = calculate_all(100.0, profile, env);
                for tenths in 1001..=2200 {
                    let current = calculate_all(f64::from(tenths) / 10.0, profile, env);
                    assert!(current.chair.value >= previous.chair.value);
                    assert!(current.desk.value >= previous.desk.value);
                    assert!(current.monitor.value >= previous.monitor.value);
                    previous = current;
                }
            }
        }
    }

    #[test]
    fn test_clamped_chair_is_flat_while_desk_keeps_rising() {
        let profile = Profile::LongTorso;
        let env = Environment::Office;
        let mut previous = calculate_all(100.0, profile, env);
        for height in 101..=130 {
            let current = calculate_all(f64::from(height), profile, env);
            assert_close(current.chair.value, CHAIR_MIN);
            assert!(current.desk.value > previous.desk.value);
            assert!(current.monitor.value > previous.monitor.value);
            previous = current;
        }
    }

    #[test]
    fn test_by_id_rejects_unknown_selectors() {
        let rec = calculate_all_by_id(170.0, "standard", "home").unwrap();
        assert_close(rec.chair.value, 42.2);

        assert!(matches!(
            calculate_all_by_id(170.0, "athletic", "home"),
            Err(ModelError::InvalidSelector { .. })
        ));
        assert!(matches!(
            calculate_all_by_id(170.0, "standard", "beach"),
            Err(ModelError::InvalidSelector { .. })
        ));
    }

    #[test]
    fn test_chair_formula_text() {
        assert_eq!(chair_formula_text(Environment::Home), "height × 0.245 + 0.5");
        assert_eq!(
            chair_formula_text(Environment::Office),
            "height × 0.245 -2 + 0.5"
        );
    }
}
