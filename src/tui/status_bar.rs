//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::shortcuts::ShortcutRegistry;
use crate::storage::KeyValueStore;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: the status message (or the active environment)
    /// and, when enabled, the key hints.
    pub fn render<S: KeyValueStore>(f: &mut Frame, area: Rect, state: &AppState<S>, theme: &Theme) {
        let mut lines = Vec::new();

        if state.status_message.is_empty() {
            if let Some(model) = state.panel.details() {
                lines.push(Line::from(vec![
                    Span::styled("Environment: ", Style::default().fg(theme.primary)),
                    Span::styled(
                        model.environment_status.clone(),
                        Style::default().fg(theme.text),
                    ),
                ]));
            }
        } else {
            lines.push(Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.accent),
            )));
        }

        if state.show_help {
            lines.push(Self::hints_line(theme));
        }

        let status = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    fn hints_line(theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in ShortcutRegistry::hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, Style::default().fg(theme.text_muted)));
        }
        Line::from(spans)
    }
}
