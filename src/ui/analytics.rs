//! Analytics: range selector, KPIs, revenue vs profit and category mix.

use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Paragraph},
};

use super::dashboard::render_kpi_grid;
use super::helpers::{format_thousands, heading, panel};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_SERIES_PRIMARY, COLOR_SERIES_SECONDARY};
use crate::screens::overview::RANGES;
use crate::screens::AnalyticsState;

pub fn render_analytics(frame: &mut Frame, area: Rect, state: &AnalyticsState, ctx: &LayoutContext) {
    let kpi_rows = state.kpis().len().div_ceil(ctx.kpi_columns()) as u16;
    let [title, ranges, cards, charts] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(kpi_rows * ctx.kpi_height()),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(heading("Analytics", "Revenue, profit and category performance")),
        title,
    );
    frame.render_widget(Paragraph::new(range_selector(state)), ranges);
    render_kpi_grid(frame, cards, state.kpis(), ctx);

    let (revenue_area, category_area) = if ctx.should_stack_charts() {
        let [a, b] = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(charts);
        (a, b)
    } else {
        let [a, b] = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(charts);
        (a, b)
    };
    render_revenue(frame, revenue_area, state);
    render_categories(frame, category_area, state);
}

fn range_selector(state: &AnalyticsState) -> Line<'static> {
    let mut spans = vec![Span::styled("Range ◀ ", Style::default().fg(COLOR_DIM))];
    for (index, range) in RANGES.iter().enumerate() {
        let style = if index == state.range_index() {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(format!(" {} ", range), style));
    }
    spans.push(Span::styled(" ▶", Style::default().fg(COLOR_DIM)));
    Line::from(spans)
}

fn render_revenue(frame: &mut Frame, area: Rect, state: &AnalyticsState) {
    let mut chart = BarChart::default()
        .block(panel("Revenue vs profit"))
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2);

    for (month, revenue, profit) in state.revenue() {
        let bars = [
            Bar::default()
                .value(revenue)
                .text_value(String::new())
                .style(Style::default().fg(COLOR_SERIES_PRIMARY)),
            Bar::default()
                .value(profit)
                .text_value(String::new())
                .style(Style::default().fg(COLOR_SERIES_SECONDARY)),
        ];
        chart = chart.data(BarGroup::default().label(Line::from(month)).bars(&bars));
    }
    frame.render_widget(chart, area);
}

fn render_categories(frame: &mut Frame, area: Rect, state: &AnalyticsState) {
    let bars: Vec<Bar> = state
        .categories()
        .iter()
        .map(|(name, value)| {
            Bar::default()
                .value(*value)
                .label(Line::from(*name))
                .text_value(format_thousands(*value))
                .style(Style::default().fg(COLOR_SERIES_PRIMARY))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("Sales by category"))
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(1);
    frame.render_widget(chart, area);
}
