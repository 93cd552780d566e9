//! Result cards and the explanation panel.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::Theme;
use crate::services::measurement::Target;
use crate::services::presentation::{DisplayModel, DisplaySurface};

#[derive(Debug, Clone, Default)]
struct Slot {
    value: String,
    range: String,
}

/// Display surface backing the terminal UI.
///
/// Holds the text of the last render; the draw pass only reads it.
#[derive(Debug, Clone, Default)]
pub struct ResultsPanel {
    slots: [Slot; 3],
    details: Option<DisplayModel>,
}

const fn slot_index(target: Target) -> usize {
    match target {
        Target::Chair => 0,
        Target::Desk => 1,
        Target::Monitor => 2,
    }
}

impl DisplaySurface for ResultsPanel {
    fn set_result(&mut self, target: Target, _value: f64, text: &str) {
        self.slots[slot_index(target)].value = text.to_string();
    }

    fn set_range(&mut self, target: Target, text: &str) {
        self.slots[slot_index(target)].range = text.to_string();
    }

    fn set_details(&mut self, model: &DisplayModel) {
        self.details = Some(model.clone());
    }
}

impl ResultsPanel {
    /// Value text currently shown for `target`.
    #[must_use]
    pub fn value_text(&self, target: Target) -> &str {
        &self.slots[slot_index(target)].value
    }

    /// Range text currently shown for `target`.
    #[must_use]
    pub fn range_text(&self, target: Target) -> &str {
        &self.slots[slot_index(target)].range
    }

    /// Model of the last render, if any.
    #[must_use]
    pub const fn details(&self) -> Option<&DisplayModel> {
        self.details.as_ref()
    }

    /// Draws the three result cards side by side.
    pub fn render_cards(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        for (target, column) in Target::ALL.into_iter().zip(columns.iter()) {
            let slot = &self.slots[slot_index(target)];
            let lines = vec![
                Line::from(Span::styled(
                    format!("{} cm", slot.value),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    slot.range.clone(),
                    Style::default().fg(theme.text_muted),
                )),
            ];

            let card = Paragraph::new(lines).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", target.label()))
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            );
            f.render_widget(card, *column);
        }
    }

    /// Draws the formula and profile explanation.
    pub fn render_details(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(model) = &self.details else {
            return;
        };

        let label = Style::default().fg(theme.primary);
        let text = Style::default().fg(theme.text);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Chair formula: ", label),
                Span::styled(model.chair_formula.clone(), text),
            ]),
            Line::from(Span::styled(model.shoe_detail.clone(), text)),
            Line::from(""),
            Line::from(Span::styled(
                model.profile_title.clone(),
                label.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(model.profile_description.clone(), text)),
        ];

        let mut offsets = vec![Span::styled("Offsets: ", label)];
        for target in &model.targets {
            offsets.push(Span::styled(format!("{} ", target.target.label()), text));
            offsets.push(Span::styled(
                target.offset_text.clone(),
                Style::default().fg(theme.offset_color(target.offset)),
            ));
            offsets.push(Span::raw("   "));
        }
        lines.push(Line::from(offsets));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" How it is calculated ")
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalculationState, Environment, Profile};
    use crate::services::presentation::PresentationAdapter;

    #[test]
    fn test_panel_collects_slots() {
        let mut panel = ResultsPanel::default();
        let state = CalculationState::new(150.0, Profile::LongLegs, Environment::Home);
        PresentationAdapter::new().render_now(&state, &mut panel);

        assert_eq!(panel.value_text(Target::Chair), "39.3");
        assert_eq!(panel.value_text(Target::Desk), "59.6");
        assert_eq!(panel.value_text(Target::Monitor), "88.9");
        assert_eq!(panel.range_text(Target::Desk), "58.1–61.1 cm");
        assert_eq!(panel.details().unwrap().profile, Profile::LongLegs);
    }
}
