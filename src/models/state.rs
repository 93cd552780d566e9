//! The user-editable calculation inputs.

use serde::{Deserialize, Serialize};

use super::{Environment, Profile};
use crate::services::measurement::round1;

/// Smallest accepted body height in centimeters.
pub const HEIGHT_MIN: f64 = 100.0;
/// Largest accepted body height in centimeters.
pub const HEIGHT_MAX: f64 = 220.0;
/// Height used when nothing valid has been persisted.
pub const DEFAULT_HEIGHT: f64 = 170.0;

/// Current inputs of the calculator.
///
/// The serialized form is the persisted layout:
/// `{"height": 170.0, "profile": "standard", "environment": "home"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationState {
    /// Body height in centimeters, kept within [`HEIGHT_MIN`, `HEIGHT_MAX`]
    /// for validated input and rounded to 0.1 cm
    pub height: f64,
    /// Selected body-proportion profile
    pub profile: Profile,
    /// Selected usage environment
    pub environment: Environment,
}

impl CalculationState {
    /// Creates a state from explicit values.
    #[must_use]
    pub const fn new(height: f64, profile: Profile, environment: Environment) -> Self {
        Self {
            height,
            profile,
            environment,
        }
    }
}

impl Default for CalculationState {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, Profile::default(), Environment::default())
    }
}

/// Clamps a height to the accepted domain and rounds it to 0.1 cm.
#[must_use]
pub fn normalize_height(height: f64) -> f64 {
    round1(height.clamp(HEIGHT_MIN, HEIGHT_MAX))
}

/// Parses free-form height text the way a committed input field is read.
///
/// Reads the longest leading number and ignores anything after it, so
/// `"180cm"` is 180. Returns `None` when the text does not start with a
/// finite number, which callers treat as an in-progress edit rather than an
/// error.
#[must_use]
pub fn parse_height(raw: &str) -> Option<f64> {
    let text = raw.trim();
    let bytes = text.as_bytes();
    let skip_digits = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let sign_end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut end = skip_digits(sign_end);
    let mut mantissa_digits = end - sign_end;
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = skip_digits(end + 1);
        mantissa_digits += fraction_end - end - 1;
        end = fraction_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    // An exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_start = end + 1;
        if matches!(bytes.get(exponent_start), Some(b'+' | b'-')) {
            exponent_start += 1;
        }
        let exponent_end = skip_digits(exponent_start);
        if exponent_end > exponent_start {
            end = exponent_end;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
