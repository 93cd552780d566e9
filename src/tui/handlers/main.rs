//! Main screen input handler.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::models::normalize_height;
use crate::services::{handle_input_event, InputEvent, StepDirection};
use crate::shortcuts::{Action, ShortcutRegistry};
use crate::storage::KeyValueStore;
use crate::tui::AppState;

/// Height change for one PgUp/PgDn press, in centimeters.
const SLIDE_DELTA: f64 = 1.0;

/// Handle input for the main screen.
pub fn handle_main_input<S: KeyValueStore>(state: &mut AppState<S>, key: KeyEvent) {
    // Typing a number opens height entry with that character
    if let KeyCode::Char(c @ ('0'..='9' | '.')) = key.code {
        state.clear_status();
        state.height_entry = Some(c.to_string());
        state.presenter.request_render();
        return;
    }

    if let Some(action) = ShortcutRegistry::new().lookup(key) {
        dispatch_action(state, action);
    }
}

/// Performs `action` against the app state.
pub fn dispatch_action<S: KeyValueStore>(state: &mut AppState<S>, action: Action) {
    debug!(?action, "Dispatching action");
    state.clear_status();

    let event = match action {
        Action::StepUp => InputEvent::Step(StepDirection::Increase),
        Action::StepDown => InputEvent::Step(StepDirection::Decrease),
        Action::SlideUp => slide(state, SLIDE_DELTA),
        Action::SlideDown => slide(state, -SLIDE_DELTA),
        Action::NextProfile => InputEvent::NextProfile,
        Action::PreviousProfile => InputEvent::PreviousProfile,
        Action::ToggleEnvironment => InputEvent::ToggleEnvironment,
        Action::Reset => {
            handle_input_event(&mut state.store, &mut state.presenter, InputEvent::Reset);
            state.set_status("Reset to defaults");
            return;
        }
        Action::EditHeight => {
            state.height_entry = Some(String::new());
            state.presenter.request_render();
            return;
        }
        Action::ToggleHelp => {
            state.show_help = !state.show_help;
            state.presenter.request_render();
            return;
        }
        Action::Quit => {
            state.should_quit = true;
            return;
        }
    };

    handle_input_event(&mut state.store, &mut state.presenter, event);
}

/// Slider movement stays inside the height domain like a bounded range input.
fn slide<S: KeyValueStore>(state: &AppState<S>, delta: f64) -> InputEvent {
    InputEvent::HeightSlide(normalize_height(state.store.state().height + delta))
}
