//! Holder of the current calculation state and its persistence.
//!
//! Persistence is best-effort: read failures fall back to defaults and write
//! failures are logged, neither ever reaches the caller. The in-memory state
//! stays authoritative either way.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::constants::STORAGE_KEY;
use crate::models::{
    normalize_height, parse_height, CalculationState, Environment, Profile, DEFAULT_HEIGHT,
};
use crate::services::measurement::round1;
use crate::storage::KeyValueStore;

/// Owns the [`CalculationState`] and mirrors every accepted change into a
/// [`KeyValueStore`].
#[derive(Debug)]
pub struct StateStore<S: KeyValueStore> {
    state: CalculationState,
    storage: S,
}

impl<S: KeyValueStore> StateStore<S> {
    /// Opens the store, restoring any persisted state.
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            state: CalculationState::default(),
            storage,
        };
        store.load();
        store
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &CalculationState {
        &self.state
    }

    /// Underlying storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Replaces the in-memory state with the persisted one.
    ///
    /// Missing, corrupt or mistyped data resolves to defaults field by field.
    pub fn load(&mut self) {
        self.state = match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => restore_state(&raw),
            Ok(None) => {
                debug!(key = STORAGE_KEY, "No persisted state, using defaults");
                CalculationState::default()
            }
            Err(e) => {
                warn!(key = STORAGE_KEY, error = %format!("{e:#}"), "Failed to read persisted state, using defaults");
                CalculationState::default()
            }
        };
    }

    /// Writes the current state to storage. Failures are logged only.
    pub fn save(&mut self) {
        let encoded = match serde_json::to_string(&self.state) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(error = %e, "Failed to encode state");
                return;
            }
        };

        if let Err(e) = self.storage.set(STORAGE_KEY, &encoded) {
            warn!(key = STORAGE_KEY, error = %format!("{e:#}"), "Failed to persist state");
        }
    }

    /// Applies a height change from raw input.
    ///
    /// With `skip_validation` unset the text is parsed and clamped to the
    /// height domain; with it set the parsed number is trusted as-is. Either
    /// way the stored height is rounded to 0.1 cm. Unparseable input is a
    /// no-op.
    ///
    /// Returns `true` when the height was accepted and persisted.
    pub fn set_height(&mut self, raw: &str, skip_validation: bool) -> bool {
        let Some(value) = parse_height(raw) else {
            debug!(input = raw, "Ignoring unparseable height");
            return false;
        };

        if skip_validation {
            self.set_height_value(value)
        } else {
            self.apply_height(normalize_height(value))
        }
    }

    /// Applies a trusted numeric height (slider or stepper), rounding only.
    ///
    /// Non-finite values are ignored. A value outside [`HEIGHT_MIN`,
    /// `HEIGHT_MAX`] is kept and persisted as given, but [`Self::load`]
    /// clamps it, so it does not survive a reload unchanged.
    ///
    /// [`HEIGHT_MIN`]: crate::models::HEIGHT_MIN
    /// [`HEIGHT_MAX`]: crate::models::HEIGHT_MAX
    pub fn set_height_value(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            debug!(value, "Ignoring non-finite height");
            return false;
        }
        self.apply_height(round1(value))
    }

    fn apply_height(&mut self, height: f64) -> bool {
        self.state.height = height;
        self.save();
        true
    }

    /// Switches the profile. Returns `false` if it was already selected.
    pub fn set_profile(&mut self, profile: Profile) -> bool {
        if self.state.profile == profile {
            return false;
        }
        self.state.profile = profile;
        self.save();
        true
    }

    /// Switches the environment. Returns `false` if it was already selected.
    pub fn set_environment(&mut self, environment: Environment) -> bool {
        if self.state.environment == environment {
            return false;
        }
        self.state.environment = environment;
        self.save();
        true
    }

    /// Restores the default state and persists it.
    ///
    /// Returns whether the state actually changed.
    pub fn reset(&mut self) -> bool {
        let changed = self.state != CalculationState::default();
        self.state = CalculationState::default();
        self.save();
        changed
    }
}

/// Decodes a persisted state, defaulting each field independently.
fn restore_state(raw: &str) -> CalculationState {
    let fields = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(fields)) => fields,
        Ok(other) => {
            warn!(kind = json_kind(&other), "Persisted state is not an object, using defaults");
            return CalculationState::default();
        }
        Err(e) => {
            warn!(error = %e, "Persisted state is corrupt, using defaults");
            return CalculationState::default();
        }
    };

    CalculationState {
        height: restore_height(&fields),
        profile: restore_selector(&fields, "profile"),
        environment: restore_selector(&fields, "environment"),
    }
}

fn restore_height(fields: &Map<String, Value>) -> f64 {
    match fields.get("height") {
        Some(Value::Number(number)) => match number.as_f64() {
            Some(height) if height > 0.0 => normalize_height(height),
            _ => {
                warn!(height = %number, "Persisted height is not positive, using default");
                DEFAULT_HEIGHT
            }
        },
        Some(other) => {
            warn!(kind = json_kind(other), "Persisted height is not a number, using default");
            DEFAULT_HEIGHT
        }
        None => {
            warn!("Persisted state has no height, using default");
            DEFAULT_HEIGHT
        }
    }
}

fn restore_selector<T>(fields: &Map<String, Value>, field: &str) -> T
where
    T: std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    match fields.get(field) {
        Some(Value::String(id)) => id.parse().unwrap_or_else(|e| {
            warn!(field, error = %e, "Persisted selector is unknown, using default");
            T::default()
        }),
        Some(other) => {
            warn!(field, kind = json_kind(other), "Persisted selector is not a string, using default");
            T::default()
        }
        None => {
            warn!(field, "Persisted state is missing a field, using default");
            T::default()
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
