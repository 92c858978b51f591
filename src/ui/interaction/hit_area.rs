//! Hit areas for mouse interaction.
//!
//! Renderers register clickable regions while drawing a frame; the event
//! loop hit-tests mouse events against the registry from the last frame.

use ratatui::layout::Rect;

use crate::app::ScreenId;

/// What a click on a hit area does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Sidebar or bottom-nav entry
    Navigate(ScreenId),
    /// Logout entry (navigates to login)
    Logout,
    /// Row in the active screen's list
    SelectRow(usize),
    /// Click inside the open dialog
    CloseDialog,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.rect, x, y)
    }
}

#[inline]
fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Registry of the hit areas drawn in the current frame.
///
/// Later registrations sit on top of earlier ones. The pointer position
/// survives [`HitAreaRegistry::clear`] so renderers can style the hovered
/// region before registering it.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all areas. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        self.areas.push(HitArea::new(rect, action));
    }

    /// Action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y).map(|i| self.areas[i].action)
    }

    /// Track the pointer. Returns true if it moved onto a different area.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let before = self.pointer.and_then(|(px, py)| self.find_index(px, py));
        self.pointer = Some((x, y));
        before != self.find_index(x, y)
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }

    /// Whether the pointer is over `rect`.
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.pointer
            .is_some_and(|(x, y)| rect_contains(rect, x, y))
    }

    /// Whether the pointer is over any registered area.
    pub fn is_hovering(&self) -> bool {
        self.pointer
            .is_some_and(|(x, y)| self.find_index(x, y).is_some())
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_area_contains_edges() {
        let area = HitArea::new(Rect::new(10, 10, 20, 10), ClickAction::Logout);
        assert!(area.contains(10, 10));
        assert!(area.contains(29, 19));
        assert!(!area.contains(30, 10));
        assert!(!area.contains(10, 20));
        assert!(!area.contains(9, 10));
    }

    #[test]
    fn test_zero_size_area_never_hit() {
        let area = HitArea::new(Rect::new(5, 5, 0, 0), ClickAction::CloseDialog);
        assert!(!area.contains(5, 5));
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 20, 20), ClickAction::Navigate(ScreenId::Chat));
        registry.register(Rect::new(5, 5, 5, 5), ClickAction::CloseDialog);

        assert_eq!(registry.hit_test(6, 6), Some(ClickAction::CloseDialog));
        assert_eq!(
            registry.hit_test(1, 1),
            Some(ClickAction::Navigate(ScreenId::Chat))
        );
        assert_eq!(registry.hit_test(30, 30), None);
    }

    #[test]
    fn test_hover_tracking() {
        let mut registry = HitAreaRegistry::new();
        let rect = Rect::new(0, 0, 10, 1);
        registry.register(rect, ClickAction::Logout);

        assert!(registry.update_hover(2, 0));
        assert!(!registry.update_hover(3, 0));
        assert!(registry.is_hovered(rect));
        assert!(registry.update_hover(2, 5));
        assert!(!registry.is_hovering());
    }

    #[test]
    fn test_pointer_survives_clear() {
        let mut registry = HitAreaRegistry::new();
        let rect = Rect::new(0, 0, 1, 1);
        registry.register(rect, ClickAction::SelectRow(0));
        registry.update_hover(0, 0);
        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.is_hovering());
        assert!(registry.is_hovered(rect));
    }
}
