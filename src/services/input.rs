//! Routes discrete user events into the state store.
//!
//! Every event that changes the state schedules a render on the
//! [`PresentationAdapter`]; events that change nothing schedule nothing.

use crate::models::{normalize_height, Environment, ModelError, Profile};
use crate::services::presentation::PresentationAdapter;
use crate::services::state_store::StateStore;
use crate::storage::KeyValueStore;

/// Height change applied by one stepper press, in centimeters.
pub const STEP_DELTA: f64 = 0.1;

/// Stepper direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// +0.1 cm
    Increase,
    /// -0.1 cm
    Decrease,
}

impl StepDirection {
    fn delta(self) -> f64 {
        match self {
            Self::Increase => STEP_DELTA,
            Self::Decrease => -STEP_DELTA,
        }
    }
}

/// A discrete event from the host UI.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Text entry committed (blur or Enter); validated and clamped
    HeightCommit(String),
    /// Continuous slider movement; the value is trusted
    HeightSlide(f64),
    /// Stepper button or arrow key
    Step(StepDirection),
    /// Profile picked directly
    SelectProfile(Profile),
    /// Environment picked directly
    SelectEnvironment(Environment),
    /// Move to the next profile, wrapping around
    NextProfile,
    /// Move to the previous profile, wrapping around
    PreviousProfile,
    /// Switch between the two environments
    ToggleEnvironment,
    /// Restore the default state
    Reset,
}

impl InputEvent {
    /// Profile selection from an identifier such as `"longLegs"`.
    pub fn select_profile_id(id: &str) -> Result<Self, ModelError> {
        Ok(Self::SelectProfile(id.parse()?))
    }

    /// Environment selection from an identifier such as `"office"`.
    pub fn select_environment_id(id: &str) -> Result<Self, ModelError> {
        Ok(Self::SelectEnvironment(id.parse()?))
    }
}

/// Applies `event` to the store and schedules a render if anything changed.
///
/// Returns whether the state was changed.
pub fn handle_input_event<S: KeyValueStore>(
    store: &mut StateStore<S>,
    presenter: &mut PresentationAdapter,
    event: InputEvent,
) -> bool {
    let changed = match event {
        InputEvent::HeightCommit(text) => store.set_height(&text, false),
        InputEvent::HeightSlide(value) => store.set_height_value(value),
        InputEvent::Step(direction) => {
            // Stepping is clamped so repeated presses cannot leave the domain
            let stepped = normalize_height(store.state().height + direction.delta());
            store.set_height_value(stepped)
        }
        InputEvent::SelectProfile(profile) => store.set_profile(profile),
        InputEvent::SelectEnvironment(environment) => store.set_environment(environment),
        InputEvent::NextProfile => store.set_profile(store.state().profile.next()),
        InputEvent::PreviousProfile => store.set_profile(store.state().profile.previous()),
        InputEvent::ToggleEnvironment => {
            store.set_environment(store.state().environment.toggled())
        }
        InputEvent::Reset => store.reset(),
    };

    if changed {
        presenter.request_render();
    }
    changed
}
