//! Assistant chat transcript and composer.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use super::helpers::{heading, panel, SPINNER_FRAMES};
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_INPUT_BG, COLOR_TEXT};
use crate::screens::chat::Author;
use crate::screens::ChatState;

pub fn render_chat(frame: &mut Frame, area: Rect, state: &ChatState, tick: u64) {
    let [title, transcript, composer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(heading("AI Assistant", "Ask about stock, demand and reorders")),
        title,
    );

    let mut lines: Vec<Line> = Vec::new();
    for message in &state.messages {
        let (name, color) = match message.author {
            Author::User => ("You", COLOR_ACCENT),
            Author::Assistant => ("Assistant", COLOR_HEADER),
        };
        lines.push(Line::from(vec![
            Span::styled(name, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {}", message.sent_at.format("%H:%M")),
                Style::default().fg(COLOR_DIM),
            ),
        ]));
        lines.push(Line::from(Span::styled(message.text.as_str(), Style::default().fg(COLOR_TEXT))));
        lines.push(Line::default());
    }
    if state.is_typing() {
        let frame_index = (tick / 4) as usize % SPINNER_FRAMES.len();
        lines.push(Line::from(Span::styled(
            format!("{} Assistant is typing...", SPINNER_FRAMES[frame_index]),
            Style::default().fg(COLOR_DIM),
        )));
    }

    // Keep the latest messages in view
    let block = panel("Conversation");
    let inner_height = block.inner(transcript).height as usize;
    let skip = lines.len().saturating_sub(inner_height) as u16;
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((skip, 0)),
        transcript,
    );

    let composer_text = Line::from(vec![
        Span::styled(state.input.as_str(), Style::default().fg(COLOR_TEXT)),
        Span::styled("▏", Style::default().fg(COLOR_ACCENT)),
    ]);
    frame.render_widget(
        Paragraph::new(composer_text)
            .style(Style::default().bg(COLOR_INPUT_BG))
            .block(panel("Message · Enter to send")),
        composer,
    );
}
