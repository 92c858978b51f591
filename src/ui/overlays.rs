//! Toast and dialog overlays drawn above the screen content.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::helpers::centered_rect;
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{COLOR_ACCENT, COLOR_CRITICAL, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER, COLOR_TEXT, COLOR_TOAST_BG};
use crate::app::{Dialog, Toast, ToastKind};

/// Snack bar along the bottom of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    if area.height < 3 {
        return;
    }
    let width = (toast.message.chars().count() as u16 + 4).min(area.width);
    let rect = Rect::new(
        area.x + (area.width - width) / 2,
        area.bottom() - 3,
        width,
        3,
    );
    let color = match toast.kind {
        ToastKind::Info => COLOR_ACCENT,
        ToastKind::Error => COLOR_CRITICAL,
    };
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Span::styled(toast.message.as_str(), Style::default().fg(COLOR_TEXT)))
            .alignment(Alignment::Center)
            .style(Style::default().bg(COLOR_TOAST_BG))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            ),
        rect,
    );
}

/// Modal dialog centered in `area`.
pub fn render_dialog(frame: &mut Frame, area: Rect, dialog: &Dialog, hits: &mut HitAreaRegistry) {
    let rect = centered_rect(area, 50, 8);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ACCENT))
        .style(Style::default().bg(COLOR_DIALOG_BG))
        .title(Span::styled(
            format!(" {} ", dialog.title),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ));

    let lines = vec![
        Line::from(Span::styled(dialog.body.as_str(), Style::default().fg(COLOR_TEXT))),
        Line::default(),
        Line::from(Span::styled("[ Close ]  Esc", Style::default().fg(COLOR_DIM))),
    ];
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), rect);
    hits.register(rect, ClickAction::CloseDialog);
}
