//! Height entry input handler.

use crossterm::event::{KeyCode, KeyEvent};

use crate::services::{handle_input_event, InputEvent};
use crate::storage::KeyValueStore;
use crate::tui::AppState;

/// Longest accepted entry ("220.0" plus a spare digit).
const MAX_ENTRY_LEN: usize = 6;

/// Handle input while the height entry is open.
pub fn handle_entry_input<S: KeyValueStore>(state: &mut AppState<S>, key: KeyEvent) {
    let Some(buffer) = state.height_entry.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Char(c @ ('0'..='9' | '.')) => {
            if buffer.len() < MAX_ENTRY_LEN {
                buffer.push(c);
            }
        }
        KeyCode::Backspace => {
            buffer.pop();
        }
        KeyCode::Enter => {
            let text = std::mem::take(buffer);
            state.height_entry = None;
            commit(state, text);
        }
        KeyCode::Esc => {
            state.height_entry = None;
        }
        _ => return,
    }

    state.presenter.request_render();
}

fn commit<S: KeyValueStore>(state: &mut AppState<S>, text: String) {
    if text.is_empty() {
        return;
    }

    let accepted = handle_input_event(
        &mut state.store,
        &mut state.presenter,
        InputEvent::HeightCommit(text.clone()),
    );
    if accepted {
        state.clear_status();
    } else {
        // The previous height stays in effect
        state.set_status(format!("'{text}' is not a valid height"));
    }
}
