//! Terminal user interface.
//!
//! This module contains the main TUI loop, `AppState`, and the widgets that
//! draw the calculator using Ratatui.

pub mod handlers;
pub mod results;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::{Environment, Profile};
use crate::services::{PresentationAdapter, StateStore};
use crate::storage::{FileStore, KeyValueStore};

pub use handlers::handle_key_event;
pub use results::ResultsPanel;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Application state for the TUI.
pub struct AppState<S: KeyValueStore = FileStore> {
    /// Calculation state and its persistence
    pub store: StateStore<S>,
    /// Render scheduling
    pub presenter: PresentationAdapter,
    /// Text of the last render
    pub panel: ResultsPanel,
    /// Typed height while entry is open
    pub height_entry: Option<String>,
    /// Active color theme
    pub theme: Theme,
    /// Whether the key hints line is shown
    pub show_help: bool,
    /// Set when the loop should exit
    pub should_quit: bool,
    /// Transient message shown in the status bar; empty when none
    pub status_message: String,
}

impl<S: KeyValueStore> AppState<S> {
    /// Creates the state and schedules the first render.
    pub fn new(store: StateStore<S>, config: &Config) -> Self {
        let mut presenter = PresentationAdapter::new();
        presenter.request_render();

        Self {
            store,
            presenter,
            panel: ResultsPanel::default(),
            height_entry: None,
            theme: Theme::from_mode(config.ui.theme_mode),
            show_help: config.ui.show_help,
            should_quit: false,
            status_message: String::new(),
        }
    }

    /// Sets the status message and schedules a redraw.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.presenter.request_render();
    }

    /// Clears the status message.
    pub fn clear_status(&mut self) {
        if !self.status_message.is_empty() {
            self.status_message.clear();
            self.presenter.request_render();
        }
    }

    /// Runs the pending render into the panel. Returns whether one ran.
    pub fn flush(&mut self) -> bool {
        self.presenter
            .flush(self.store.state(), &mut self.panel)
            .is_some()
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop.
///
/// Draws only when a render is pending, and drains every queued event before
/// the next draw so a burst of input produces a single frame.
pub fn run_tui<S: KeyValueStore>(
    state: &mut AppState<S>,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    info!("TUI started");

    loop {
        if state.flush() {
            terminal.draw(|f| render(f, state))?;
        }

        if event::poll(Duration::from_millis(100))? {
            loop {
                match event::read()? {
                    Event::Key(key) => handle_key_event(state, key),
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        state.presenter.request_render();
                    }
                    _ => {}
                }
                if state.should_quit || !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    info!(
        renders = state.presenter.render_count(),
        "TUI stopped"
    );
    Ok(())
}

/// Render the UI from current state
fn render<S: KeyValueStore>(f: &mut Frame, state: &AppState<S>) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let status_height = if state.show_help { 4 } else { 3 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title bar
            Constraint::Length(5),             // Inputs
            Constraint::Length(4),             // Result cards
            Constraint::Min(7),                // Explanation
            Constraint::Length(status_height), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], &state.theme);
    render_inputs(f, chunks[1], state);
    state.panel.render_cards(f, chunks[2], &state.theme);
    state.panel.render_details(f, chunks[3], &state.theme);
    StatusBar::render(f, chunks[4], state, &state.theme);
}

fn render_title_bar(f: &mut Frame, area: Rect, theme: &Theme) {
    let title = format!(" {APP_NAME} - Ergonomic height calculator");

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(theme.primary)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Height, profile tabs and environment options.
fn render_inputs<S: KeyValueStore>(f: &mut Frame, area: Rect, state: &AppState<S>) {
    let theme = &state.theme;
    let current = state.store.state();
    let label = Style::default().fg(theme.primary);
    let text = Style::default().fg(theme.text);
    let muted = Style::default().fg(theme.text_muted);
    let selected = Style::default()
        .fg(theme.accent)
        .bg(theme.highlight_bg)
        .add_modifier(Modifier::BOLD);

    let height_line = match &state.height_entry {
        Some(buffer) => Line::from(vec![
            Span::styled("Height:      ", label),
            Span::styled(format!("{buffer}_"), selected),
            Span::styled("  Enter to apply, Esc to cancel", muted),
        ]),
        None => Line::from(vec![
            Span::styled("Height:      ", label),
            Span::styled(format!("{:.1} cm", current.height), text.add_modifier(Modifier::BOLD)),
            Span::styled("  ↑/↓ ±0.1", muted),
        ]),
    };

    let mut profile_spans = vec![Span::styled("Profile:     ", label)];
    for profile in Profile::ALL {
        let style = if profile == current.profile { selected } else { text };
        profile_spans.push(Span::styled(format!(" {} ", profile.info().name), style));
        profile_spans.push(Span::raw(" "));
    }

    let mut environment_spans = vec![Span::styled("Environment: ", label)];
    for environment in Environment::ALL {
        let style = if environment == current.environment {
            selected
        } else {
            text
        };
        environment_spans.push(Span::styled(format!(" {} ", environment.info().name), style));
        environment_spans.push(Span::raw(" "));
    }

    let inputs = Paragraph::new(vec![
        height_line,
        Line::from(profile_spans),
        Line::from(environment_spans),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Inputs ")
            .border_style(label)
            .style(Style::default().bg(theme.background)),
    );

    f.render_widget(inputs, area);
}
