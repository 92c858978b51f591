//! Full-screen sign-in form. Drawn without the navigation shell.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::helpers::centered_rect;
use super::shell::{BRAND, TAGLINE};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CRITICAL, COLOR_DIM, COLOR_HEADER, COLOR_INPUT_BG, COLOR_TEXT};
use crate::screens::login::{LoginField, LoginState};

pub fn render_login_screen(frame: &mut Frame, area: Rect, form: &LoginState) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer, area);

    let card = centered_rect(area.inner(Margin::new(2, 1)), 56, 18);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut lines = vec![
        Line::from(Span::styled(
            BRAND,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(TAGLINE, Style::default().fg(COLOR_DIM))).alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled("Sign in to your account", Style::default().fg(COLOR_TEXT))),
        Line::default(),
    ];

    let field_width = inner.width.saturating_sub(2) as usize;
    lines.extend(field_lines(
        "Email",
        &form.email,
        field_width,
        form.focus == LoginField::Email,
    ));
    lines.extend(field_lines(
        "Password",
        &form.masked_password(),
        field_width,
        form.focus == LoginField::Password,
    ));

    let check = if form.remember_me { "[x]" } else { "[ ]" };
    lines.push(Line::from(vec![
        Span::styled(check, Style::default().fg(COLOR_ACCENT)),
        Span::styled(" Remember this device  ^R", Style::default().fg(COLOR_TEXT)),
    ]));

    lines.push(match &form.error {
        Some(error) => Line::from(Span::styled(error.as_str(), Style::default().fg(COLOR_CRITICAL))),
        None => Line::default(),
    });
    lines.push(Line::from(Span::styled(
        "Enter sign in · ^F forgot password · ^G Google",
        Style::default().fg(COLOR_DIM),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn field_lines<'a>(label: &'a str, value: &str, width: usize, focused: bool) -> Vec<Line<'a>> {
    let label_style = if focused {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let cursor = if focused { "▏" } else { "" };
    let text = format!("{}{}", value, cursor);
    vec![
        Line::from(Span::styled(label, label_style)),
        Line::from(Span::styled(
            super::helpers::fit_to_width(&text, width),
            Style::default().fg(COLOR_TEXT).bg(COLOR_INPUT_BG),
        )),
    ]
}
