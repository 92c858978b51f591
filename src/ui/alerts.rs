//! Alert list with summary counts, search and filters.

use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use super::helpers::{heading, panel, scroll_offset, truncate_to_width};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_CRITICAL, COLOR_DIM, COLOR_HEADER, COLOR_INFO, COLOR_TEXT, COLOR_WARNING};
use crate::screens::alerts::{Severity, FILTER_SEVERITY, FILTER_TYPE};
use crate::screens::AlertsState;

/// Shown when no alert is visible
pub const EMPTY_TEXT: &str = "No active alerts. Inventory looks good!";

pub fn render_alerts(
    frame: &mut Frame,
    area: Rect,
    state: &AlertsState,
    ctx: &LayoutContext,
    hits: &mut HitAreaRegistry,
) {
    let [title, summary, controls, list] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(heading("Alerts", "Stock warnings and demand signals")),
        title,
    );

    let counts = state.summary();
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("Total {}", counts.total), Style::default().fg(COLOR_TEXT)),
            Span::raw("   "),
            Span::styled(format!("Critical {}", counts.critical), Style::default().fg(COLOR_CRITICAL)),
            Span::raw("   "),
            Span::styled(format!("Warning {}", counts.warning), Style::default().fg(COLOR_WARNING)),
        ])),
        summary,
    );

    let filters = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(COLOR_DIM)),
        Span::styled(format!("{}▏", state.search_text()), Style::default().fg(COLOR_TEXT)),
        Span::styled("   Severity (^S): ", Style::default().fg(COLOR_DIM)),
        Span::styled(state.filter_label(FILTER_SEVERITY), Style::default().fg(COLOR_ACCENT)),
        Span::styled("   Type (^T): ", Style::default().fg(COLOR_DIM)),
        Span::styled(state.filter_label(FILTER_TYPE), Style::default().fg(COLOR_ACCENT)),
    ]);
    frame.render_widget(Paragraph::new(filters).block(panel("Filters")), controls);

    let block = panel("Alerts · ^A acknowledge all · ^R clear resolved · ^X action · Del dismiss");
    let inner = block.inner(list);
    frame.render_widget(block, list);

    let visible = state.visible();
    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(EMPTY_TEXT, Style::default().fg(COLOR_DIM))).alignment(Alignment::Center),
            inner,
        );
        return;
    }

    // Two lines per alert: headline, then message
    let message_width = (inner.width as usize).saturating_sub(4).min(ctx.max_message_length() * 2);
    let capacity = (inner.height / 2) as usize;
    let offset = scroll_offset(state.selected, capacity);
    let window = visible.iter().enumerate().skip(offset).take(capacity);
    for (slot, (index, (_, alert))) in window.enumerate() {
        let y = inner.y + slot as u16 * 2;
        let selected = index == state.selected;
        let marker = if selected { "▌" } else { " " };
        let headline = Line::from(vec![
            Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                format!("{:<8} ", alert.severity.label()),
                severity_style(alert.severity).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                alert.kind.as_str(),
                Style::default().fg(COLOR_HEADER).add_modifier(if selected {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                }),
            ),
            Span::styled(format!("  {} · {}", alert.product, alert.time), Style::default().fg(COLOR_DIM)),
        ]);
        let message = Line::from(Span::styled(
            format!("  {}", truncate_to_width(&alert.message, message_width)),
            Style::default().fg(COLOR_TEXT),
        ));
        let rect = Rect::new(inner.x, y, inner.width, 2);
        frame.render_widget(Paragraph::new(vec![headline, message]), rect);
        hits.register(rect, ClickAction::SelectRow(index));
    }
}

fn severity_style(severity: Severity) -> Style {
    let color = match severity {
        Severity::Critical => COLOR_CRITICAL,
        Severity::Warning => COLOR_WARNING,
        Severity::Info => COLOR_INFO,
    };
    Style::default().fg(color)
}
