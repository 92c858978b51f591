//! Dashboard: KPI cards, sales trend and stock distribution.

use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Gauge, Paragraph},
};

use super::helpers::{heading, panel};
use super::layout::LayoutContext;
use super::theme::{COLOR_CRITICAL, COLOR_DIM, COLOR_HEADER, COLOR_OK, COLOR_SERIES_PRIMARY, COLOR_TEXT, COLOR_WARNING};
use crate::screens::overview::KpiCard;
use crate::screens::DashboardState;

pub fn render_dashboard(frame: &mut Frame, area: Rect, state: &DashboardState, ctx: &LayoutContext) {
    let kpi_rows = state.kpis().len().div_ceil(ctx.kpi_columns()) as u16;
    let [title, cards, charts] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(kpi_rows * ctx.kpi_height()),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(heading(
            "Vyapaar Buddy overview",
            "Monitor stock risk, sales momentum, and demand signals.",
        )),
        title,
    );
    render_kpi_grid(frame, cards, state.kpis(), ctx);

    let (sales_area, split_area) = if ctx.should_stack_charts() {
        let [a, b] = Layout::vertical([Constraint::Min(6), Constraint::Length(7)]).areas(charts);
        (a, b)
    } else {
        let [a, b] = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(charts);
        (a, b)
    };
    render_sales(frame, sales_area, state);
    render_stock_split(frame, split_area, state);
}

/// Cards laid out `ctx.kpi_columns()` per row.
pub fn render_kpi_grid(frame: &mut Frame, area: Rect, cards: &[KpiCard], ctx: &LayoutContext) {
    let columns = ctx.kpi_columns();
    for (row_index, row) in cards.chunks(columns).enumerate() {
        let y = area.y + row_index as u16 * ctx.kpi_height();
        if y >= area.bottom() {
            break;
        }
        let row_area = Rect::new(area.x, y, area.width, ctx.kpi_height().min(area.bottom() - y));
        let cells = Layout::horizontal((0..columns).map(|_| Constraint::Ratio(1, columns as u32))).split(row_area);
        for (card, cell) in row.iter().zip(cells.iter()) {
            render_kpi_card(frame, *cell, card, ctx.is_short());
        }
    }
}

fn render_kpi_card(frame: &mut Frame, area: Rect, card: &KpiCard, compact: bool) {
    let block = panel(card.title);
    let value = Line::from(vec![
        Span::styled(
            card.value,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!("[{}]", card.chip), Style::default().fg(COLOR_DIM)),
    ]);
    let lines = if compact {
        vec![value]
    } else {
        vec![value, Line::from(Span::styled(card.subtitle, trend_style(card.subtitle)))]
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn trend_style(subtitle: &str) -> Style {
    if subtitle.starts_with('+') {
        Style::default().fg(COLOR_OK)
    } else if subtitle.starts_with('-') {
        Style::default().fg(COLOR_CRITICAL)
    } else {
        Style::default().fg(COLOR_TEXT)
    }
}

fn render_sales(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let bars: Vec<Bar> = state
        .sales()
        .map(|(month, units)| {
            Bar::default()
                .value(units)
                .label(Line::from(month))
                .style(Style::default().fg(COLOR_SERIES_PRIMARY))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("Sales trends · Last 6 months"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(2);
    frame.render_widget(chart, area);
}

fn render_stock_split(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let block = panel("Inventory distribution");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let split = state.stock_split();
    let rows = [
        ("Fast moving", split.fast, COLOR_OK),
        ("Slow moving", split.slow, COLOR_WARNING),
        ("Dead stock", split.dead, COLOR_CRITICAL),
    ];
    let areas = Layout::vertical(rows.iter().map(|_| Constraint::Length(2))).split(inner);
    for ((label, percent, color), row) in rows.iter().zip(areas.iter()) {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(*color))
            .percent(*percent as u16)
            .label(format!("{} {}%", label, percent));
        frame.render_widget(gauge, Rect::new(row.x, row.y, row.width, 1));
    }
}
