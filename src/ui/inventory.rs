//! Inventory table with search and filters.

use ratatui::{
    prelude::*,
    widgets::{Cell, Paragraph, Row, Table, TableState},
};

use super::helpers::{heading, panel, truncate_to_width};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_CRITICAL, COLOR_DIM, COLOR_INFO, COLOR_OK, COLOR_TEXT, COLOR_WARNING};
use crate::screens::inventory::{StockStatus, FILTER_CATEGORY, FILTER_STATUS};
use crate::screens::InventoryState;

/// Shown when no product matches search and filters
pub const EMPTY_TEXT: &str = "No products match your filters.";

pub fn render_inventory(
    frame: &mut Frame,
    area: Rect,
    state: &InventoryState,
    ctx: &LayoutContext,
    hits: &mut HitAreaRegistry,
) {
    let [title, controls, table] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    let count = format!("{} items", state.total_count());
    frame.render_widget(Paragraph::new(heading("Inventory", &count)), title);

    let filters = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(COLOR_DIM)),
        Span::styled(format!("{}▏", state.search_text()), Style::default().fg(COLOR_TEXT)),
        Span::styled("   Status (^S): ", Style::default().fg(COLOR_DIM)),
        Span::styled(state.filter_label(FILTER_STATUS), Style::default().fg(COLOR_ACCENT)),
        Span::styled("   Category (^K): ", Style::default().fg(COLOR_DIM)),
        Span::styled(state.filter_label(FILTER_CATEGORY), Style::default().fg(COLOR_ACCENT)),
    ]);
    frame.render_widget(Paragraph::new(filters).block(panel("Filters")), controls);

    let block = panel("Products · ^A add · Enter edit · Del delete");
    let inner = block.inner(table);
    frame.render_widget(block, table);

    let visible = state.visible();
    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(EMPTY_TEXT, Style::default().fg(COLOR_DIM))).alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let name_width = ctx.max_message_length().min(24);
    let rows: Vec<Row> = visible
        .iter()
        .map(|(_, item)| {
            let mut cells = vec![
                Cell::from(truncate_to_width(&item.name, name_width)),
                Cell::from(item.quantity.to_string()),
                Cell::from(Span::styled(item.status.label(), status_style(item.status))),
            ];
            if !ctx.is_mobile() {
                cells.insert(1, Cell::from(item.category.clone()));
                cells.push(Cell::from(item.updated.clone()));
            }
            Row::new(cells).style(Style::default().fg(COLOR_TEXT))
        })
        .collect();

    let (header, widths): (Vec<&str>, Vec<Constraint>) = if ctx.is_mobile() {
        (
            vec!["Product", "Qty", "Status"],
            vec![Constraint::Min(10), Constraint::Length(5), Constraint::Length(10)],
        )
    } else {
        (
            vec!["Product", "Category", "Qty", "Status", "Updated"],
            vec![
                Constraint::Min(16),
                Constraint::Length(12),
                Constraint::Length(5),
                Constraint::Length(10),
                Constraint::Length(12),
            ],
        )
    };

    let table_widget = Table::new(rows, widths)
        .header(Row::new(header).style(Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD)))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table_widget, inner, &mut table_state);

    // Data rows start one line below the header, scrolled by the table offset
    let offset = table_state.offset();
    for (slot, index) in (offset..visible.len()).enumerate() {
        let y = inner.y + 1 + slot as u16;
        if y >= inner.bottom() {
            break;
        }
        hits.register(Rect::new(inner.x, y, inner.width, 1), ClickAction::SelectRow(index));
    }
}

fn status_style(status: StockStatus) -> Style {
    let color = match status {
        StockStatus::Low => COLOR_CRITICAL,
        StockStatus::Ok => COLOR_OK,
        StockStatus::Overstock => COLOR_WARNING,
        StockStatus::DeadStock => COLOR_INFO,
    };
    Style::default().fg(color)
}
