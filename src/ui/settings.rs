//! Settings sections with placeholder actions.

use ratatui::{prelude::*, widgets::Paragraph};

use super::helpers::{heading, panel};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_TEXT};
use crate::screens::SettingsState;

pub fn render_settings(frame: &mut Frame, area: Rect, state: &SettingsState, hits: &mut HitAreaRegistry) {
    let [title, body] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
    frame.render_widget(
        Paragraph::new(heading("Settings", "Manage your account and preferences")),
        title,
    );

    let heights = state
        .sections()
        .iter()
        .map(|s| Constraint::Length((s.rows.len() + s.actions.len()) as u16 + 2));
    let areas = Layout::vertical(heights).split(body);

    let mut action_index = 0;
    for (section, section_area) in state.sections().iter().zip(areas.iter()) {
        let block = panel(section.title);
        let inner = block.inner(*section_area);
        frame.render_widget(block, *section_area);

        let mut y = inner.y;
        for (label, value) in section.rows {
            if y >= inner.bottom() {
                break;
            }
            let line = Line::from(vec![
                Span::styled(format!("{:<28}", label), Style::default().fg(COLOR_DIM)),
                Span::styled(*value, Style::default().fg(COLOR_TEXT)),
            ]);
            frame.render_widget(Paragraph::new(line), Rect::new(inner.x, y, inner.width, 1));
            y += 1;
        }

        for action in section.actions {
            if y < inner.bottom() {
                let row = Rect::new(inner.x, y, inner.width, 1);
                let style = if action_index == state.selected {
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::REVERSED)
                } else {
                    Style::default().fg(COLOR_ACCENT)
                };
                frame.render_widget(Paragraph::new(Span::styled(format!("[ {} ]", action.label), style)), row);
                hits.register(row, ClickAction::SelectRow(action_index));
                y += 1;
            }
            action_index += 1;
        }
    }
}
