//! Terminal rendering for Vyapaar.
//!
//! [`render`] draws one frame from [`App`] state:
//! - Login fills the whole terminal
//! - Every other screen sits inside the adaptive shell (sidebar on desktop,
//!   top bar plus bottom navigation on mobile)
//! - Toast and dialog overlays are drawn last
//!
//! Renderers register clickable regions in [`App::hit_registry`] as they
//! draw, so mouse clicks are hit-tested against the most recent frame.

mod alerts;
mod analytics;
mod chat;
mod dashboard;
pub mod helpers;
pub mod interaction;
mod inventory;
pub mod layout;
mod login;
pub mod nav;
mod overlays;
mod settings;
pub mod shell;
pub mod theme;

pub use alerts::EMPTY_TEXT as ALERTS_EMPTY_TEXT;
pub use inventory::EMPTY_TEXT as INVENTORY_EMPTY_TEXT;
pub use layout::{breakpoints, LayoutClass, LayoutContext, ViewportClassifier};

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::screens::{Screen, NOT_FOUND_TEXT};
use helpers::{heading, inner_rect};
use shell::draw_shell;
use theme::COLOR_DIM;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI for the active screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.hit_registry.clear();

    let ctx = LayoutContext::new(area.width, area.height, app.logical_width(), &app.shell.classifier);

    if let Screen::Login(form) = &app.screen {
        login::render_login_screen(frame, area, form);
    }
    if !app.screen.is_full_screen() {
        let shell = app.compose_shell();
        let content = draw_shell(frame, area, &shell, ctx.sidebar_width(), &mut app.hit_registry);
        let content = inner_rect(content, 1);
        render_content(frame, content, app, &ctx);
    }

    if let Some(dialog) = &app.dialog {
        overlays::render_dialog(frame, area, dialog, &mut app.hit_registry);
    }
    if let Some(toast) = &app.toast {
        overlays::render_toast(frame, area, toast);
    }
}

fn render_content(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    let hits = &mut app.hit_registry;
    match &app.screen {
        Screen::Dashboard(state) => dashboard::render_dashboard(frame, area, state, ctx),
        Screen::Chat(state) => chat::render_chat(frame, area, state, app.tick_count),
        Screen::Inventory(state) => inventory::render_inventory(frame, area, state, ctx, hits),
        Screen::Alerts(state) => alerts::render_alerts(frame, area, state, ctx, hits),
        Screen::Analytics(state) => analytics::render_analytics(frame, area, state, ctx),
        Screen::Settings(state) => settings::render_settings(frame, area, state, hits),
        Screen::NotFound { route } => render_not_found(frame, area, route),
        // Drawn full-screen by `render`
        Screen::Login(_) => {}
    }
}

fn render_not_found(frame: &mut Frame, area: Rect, route: &str) {
    let mut lines = heading(NOT_FOUND_TEXT, "Pick a destination from the navigation");
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("No screen is registered for \"{}\".", route),
        Style::default().fg(COLOR_DIM),
    )));
    frame.render_widget(Paragraph::new(lines), area);
}
