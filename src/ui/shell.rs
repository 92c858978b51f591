//! Adaptive navigation shell.
//!
//! [`AdaptiveShell::compose`] is a pure function from the active route and
//! viewport width to a [`RenderedShell`] description. [`draw_shell`] turns
//! that description into widgets, registers the clickable regions and
//! returns the area left for screen content.
//!
//! The layout class is recomputed on every call; nothing about the previous
//! frame is remembered.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::{LayoutClass, ViewportClassifier};
use super::nav::{selected_index, NavItem, NAV_ITEMS};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};
use crate::app::Route;

pub const BRAND: &str = "Vyapaar Buddy";
pub const TAGLINE: &str = "Smart Inventory Assistant";
pub const LOGOUT_LABEL: &str = "Logout";

/// Sidebar entry with its highlight state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarEntry {
    pub item: NavItem,
    pub active: bool,
}

/// Chrome around the screen content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellChrome {
    /// Persistent sidebar beside the content
    Desktop { entries: Vec<SidebarEntry> },
    /// Top bar with logout, bottom navigation bar
    Mobile { selected: usize },
}

/// Everything needed to draw the shell for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedShell {
    pub layout: LayoutClass,
    /// Route whose content fills the shell
    pub route: Route,
    pub chrome: ShellChrome,
}

impl RenderedShell {
    /// Index of the highlighted nav item: the bottom-bar selection on mobile,
    /// the active sidebar entry (if any) on desktop.
    pub fn selected_nav(&self) -> Option<usize> {
        match &self.chrome {
            ShellChrome::Mobile { selected } => Some(*selected),
            ShellChrome::Desktop { entries } => entries.iter().position(|e| e.active),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptiveShell {
    pub classifier: ViewportClassifier,
}

impl AdaptiveShell {
    pub fn new(classifier: ViewportClassifier) -> Self {
        Self { classifier }
    }

    /// Describe the shell for `route` at logical `width`.
    pub fn compose(&self, route: &Route, width: Option<u32>) -> RenderedShell {
        let layout = self.classifier.classify(width);
        let chrome = match layout {
            LayoutClass::Mobile => ShellChrome::Mobile {
                selected: selected_index(route),
            },
            LayoutClass::Desktop => ShellChrome::Desktop {
                entries: NAV_ITEMS
                    .iter()
                    .map(|item| SidebarEntry {
                        item: *item,
                        active: route.screen() == Some(item.target),
                    })
                    .collect(),
            },
        };

        RenderedShell {
            layout,
            route: route.clone(),
            chrome,
        }
    }
}

// ============================================================================
// Drawing
// ============================================================================

/// Draw the shell chrome and return the content area.
pub fn draw_shell(
    frame: &mut Frame,
    area: Rect,
    shell: &RenderedShell,
    sidebar_width: u16,
    hits: &mut HitAreaRegistry,
) -> Rect {
    match &shell.chrome {
        ShellChrome::Desktop { entries } => {
            let [sidebar, content] =
                Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)])
                    .areas(area);
            draw_sidebar(frame, sidebar, entries, hits);
            content
        }
        ShellChrome::Mobile { selected } => {
            let [top, content, bottom] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .areas(area);
            draw_top_bar(frame, top, hits);
            draw_bottom_nav(frame, bottom, *selected, hits);
            content
        }
    }
}

fn hover() -> Style {
    Style::default().fg(COLOR_ACCENT)
}

fn text_style(hits: &HitAreaRegistry, rect: Rect) -> Style {
    if hits.is_hovered(rect) {
        hover()
    } else {
        Style::default().fg(COLOR_TEXT)
    }
}

fn draw_sidebar(frame: &mut Frame, area: Rect, entries: &[SidebarEntry], hits: &mut HitAreaRegistry) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 3 {
        return;
    }

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            BRAND,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(COLOR_DIM))),
    ]);
    frame.render_widget(header, Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(1), 2));

    let mut y = inner.y + 3;
    for (index, entry) in entries.iter().enumerate() {
        if y >= inner.bottom().saturating_sub(1) {
            break;
        }
        let row = Rect::new(inner.x, y, inner.width, 1);
        let style = if entry.active {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            text_style(hits, row)
        };
        let marker = if entry.active { "▌" } else { " " };
        let line = Line::from(vec![
            Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                format!("{} {}", entry.item.icon, entry.item.label),
                style,
            ),
            Span::styled(format!("  F{}", index + 1), Style::default().fg(COLOR_DIM)),
        ]);
        frame.render_widget(Paragraph::new(line), row);
        hits.register(row, ClickAction::Navigate(entry.item.target));
        y += 1;
    }

    let logout = Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1);
    let style = if hits.is_hovered(logout) { hover() } else { Style::default().fg(COLOR_DIM) };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" ⏻ {}  ^O", LOGOUT_LABEL), style))),
        logout,
    );
    hits.register(logout, ClickAction::Logout);
}

fn draw_top_bar(frame: &mut Frame, area: Rect, hits: &mut HitAreaRegistry) {
    let label = format!("{} ^O ", LOGOUT_LABEL);
    let label_width = label.chars().count() as u16;
    let [brand, logout] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(label_width)]).areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", BRAND),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        brand,
    );
    let style = if hits.is_hovered(logout) { hover() } else { Style::default().fg(COLOR_DIM) };
    frame.render_widget(Paragraph::new(Span::styled(label, style)), logout);
    hits.register(logout, ClickAction::Logout);
}

fn draw_bottom_nav(frame: &mut Frame, area: Rect, selected: usize, hits: &mut HitAreaRegistry) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cells = Layout::horizontal(NAV_ITEMS.iter().map(|_| Constraint::Ratio(1, NAV_ITEMS.len() as u32)))
        .split(inner);
    for (index, (item, cell)) in NAV_ITEMS.iter().zip(cells.iter()).enumerate() {
        let style = if index == selected {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            text_style(hits, *cell)
        };
        // Icons only when the cell is too narrow for the label
        let text = if (cell.width as usize) < item.label.len() + 2 {
            item.icon.to_string()
        } else {
            format!("{} {}", item.icon, item.label)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, style)).alignment(Alignment::Center),
            *cell,
        );
        hits.register(*cell, ClickAction::Navigate(item.target));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ScreenId;

    #[test]
    fn test_compose_mobile_selects_nav_index() {
        let shell = AdaptiveShell::default().compose(&Route::Screen(ScreenId::Dashboard), Some(500));
        assert_eq!(shell.layout, LayoutClass::Mobile);
        assert_eq!(shell.chrome, ShellChrome::Mobile { selected: 1 });
    }

    #[test]
    fn test_compose_desktop_highlights_active_entry() {
        let shell = AdaptiveShell::default().compose(&Route::Screen(ScreenId::Alerts), Some(1200));
        assert_eq!(shell.layout, LayoutClass::Desktop);
        assert_eq!(shell.selected_nav(), Some(3));
        match shell.chrome {
            ShellChrome::Desktop { entries } => {
                assert_eq!(entries.len(), NAV_ITEMS.len());
                assert_eq!(entries.iter().filter(|e| e.active).count(), 1);
            }
            other => panic!("expected desktop chrome, got {:?}", other),
        }
    }

    #[test]
    fn test_compose_absent_width_is_desktop() {
        let shell = AdaptiveShell::default().compose(&Route::Screen(ScreenId::Chat), None);
        assert_eq!(shell.layout, LayoutClass::Desktop);
    }

    #[test]
    fn test_compose_unknown_route() {
        let route = Route::parse("reports");
        let mobile = AdaptiveShell::default().compose(&route, Some(320));
        assert_eq!(mobile.selected_nav(), Some(0));
        let desktop = AdaptiveShell::default().compose(&route, Some(1024));
        assert_eq!(desktop.selected_nav(), None);
        assert_eq!(desktop.route, route);
    }

    #[test]
    fn test_compose_is_recomputed_per_width() {
        let shell = AdaptiveShell::default();
        let route = Route::Screen(ScreenId::Inventory);
        assert_eq!(shell.compose(&route, Some(799)).layout, LayoutClass::Mobile);
        assert_eq!(shell.compose(&route, Some(800)).layout, LayoutClass::Desktop);
        assert_eq!(shell.compose(&route, Some(799)).layout, LayoutClass::Mobile);
    }
}
