//! Input handlers for the TUI.

pub mod entry;
pub mod main;

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::storage::KeyValueStore;
use crate::tui::AppState;

pub use entry::handle_entry_input;
pub use main::{dispatch_action, handle_main_input};

/// Routes a key event to the handler for the current mode.
///
/// Only presses are handled; release and repeat events from terminals that
/// report them are ignored.
pub fn handle_key_event<S: KeyValueStore>(state: &mut AppState<S>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if state.height_entry.is_some() {
        handle_entry_input(state, key);
    } else {
        handle_main_input(state, key);
    }
}
