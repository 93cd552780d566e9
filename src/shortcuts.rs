//! Keyboard shortcuts for the terminal UI.
//!
//! Maps key events to [`Action`]s so the handlers and the status bar hints
//! share one source of truth.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Every action reachable from the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === HEIGHT ===
    /// Raise the height by one step
    StepUp,
    /// Lower the height by one step
    StepDown,
    /// Raise the height by a whole centimeter
    SlideUp,
    /// Lower the height by a whole centimeter
    SlideDown,
    /// Open the height entry
    EditHeight,

    // === SELECTION ===
    /// Select the next profile
    NextProfile,
    /// Select the previous profile
    PreviousProfile,
    /// Switch between home and office
    ToggleEnvironment,

    // === GENERAL ===
    /// Restore the default state
    Reset,
    /// Show or hide the key hints
    ToggleHelp,
    /// Leave the application
    Quit,
}

impl Action {
    /// Short description shown in the status bar.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::StepUp => "+0.1 cm",
            Self::StepDown => "-0.1 cm",
            Self::SlideUp => "+1 cm",
            Self::SlideDown => "-1 cm",
            Self::EditHeight => "Type height",
            Self::NextProfile => "Next profile",
            Self::PreviousProfile => "Prev profile",
            Self::ToggleEnvironment => "Home/Office",
            Self::Reset => "Reset",
            Self::ToggleHelp => "Hide help",
            Self::Quit => "Quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key pressed
    pub code: KeyCode,
    /// Modifiers held with it
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Shortcut registry for the main screen.
pub struct ShortcutRegistry {
    bindings: HashMap<KeyBinding, Action>,
}

impl ShortcutRegistry {
    /// Creates the registry with the default bindings.
    #[must_use]
    pub fn new() -> Self {
        use KeyCode as K;
        use KeyModifiers as M;

        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register(K::Up, M::NONE, Action::StepUp);
        registry.register(K::Down, M::NONE, Action::StepDown);
        registry.register(K::Char('+'), M::NONE, Action::StepUp);
        registry.register(K::Char('-'), M::NONE, Action::StepDown);
        registry.register(K::PageUp, M::NONE, Action::SlideUp);
        registry.register(K::PageDown, M::NONE, Action::SlideDown);
        registry.register(K::Char('h'), M::NONE, Action::EditHeight);
        registry.register(K::Enter, M::NONE, Action::EditHeight);

        registry.register(K::Char('p'), M::NONE, Action::NextProfile);
        registry.register(K::Right, M::NONE, Action::NextProfile);
        registry.register(K::Tab, M::NONE, Action::NextProfile);
        // Terminals disagree on whether Shift arrives with an uppercase char
        registry.register(K::Char('P'), M::SHIFT, Action::PreviousProfile);
        registry.register(K::Char('P'), M::NONE, Action::PreviousProfile);
        registry.register(K::Left, M::NONE, Action::PreviousProfile);
        registry.register(K::BackTab, M::SHIFT, Action::PreviousProfile);
        registry.register(K::BackTab, M::NONE, Action::PreviousProfile);
        registry.register(K::Char('e'), M::NONE, Action::ToggleEnvironment);

        registry.register(K::Char('r'), M::NONE, Action::Reset);
        registry.register(K::Char('?'), M::NONE, Action::ToggleHelp);
        registry.register(K::Char('?'), M::SHIFT, Action::ToggleHelp);
        registry.register(K::Char('q'), M::NONE, Action::Quit);
        registry.register(K::Esc, M::NONE, Action::Quit);
        registry.register(K::Char('c'), M::CONTROL, Action::Quit);

        registry
    }

    fn register(&mut self, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        self.bindings
            .insert(KeyBinding::new(code, modifiers), action);
    }

    /// Looks up the action bound to a key event.
    #[must_use]
    pub fn lookup(&self, event: KeyEvent) -> Option<Action> {
        self.bindings.get(&KeyBinding::from_event(event)).copied()
    }

    /// Key labels and descriptions for the status bar, in display order.
    #[must_use]
    pub fn hints() -> Vec<(&'static str, &'static str)> {
        [
            ("↑/↓", Action::StepUp),
            ("PgUp/PgDn", Action::SlideUp),
            ("0-9", Action::EditHeight),
            ("p/P", Action::NextProfile),
            ("e", Action::ToggleEnvironment),
            ("r", Action::Reset),
            ("?", Action::ToggleHelp),
            ("q", Action::Quit),
        ]
        .into_iter()
        .map(|(key, action)| {
            let text = match action {
                Action::StepUp => "±0.1 cm",
                Action::SlideUp => "±1 cm",
                Action::NextProfile => "Profile",
                other => other.description(),
            };
            (key, text)
        })
        .collect()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
