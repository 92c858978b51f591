//! Inventory screen state.

use std::fmt;

use super::filter::{FilterableList, ItemId, Searchable, VisibleSnapshot};
use super::{cycle_option, fixtures};
use crate::app::Dialog;

/// Filter name for [`StockStatus`]
pub const FILTER_STATUS: &str = "status";
/// Filter name for product category
pub const FILTER_CATEGORY: &str = "category";

/// Status dropdown options, in display order
pub const STATUS_OPTIONS: &[&str] = &["All", "Low", "OK", "Overstock", "Dead Stock"];
/// Category dropdown options, in display order
pub const CATEGORY_OPTIONS: &[&str] = &[
    "All",
    "Electronics",
    "Furniture",
    "Accessories",
    "Lighting",
    "Stationery",
];

/// Stock level classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Low,
    Ok,
    Overstock,
    DeadStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Low => "Low",
            StockStatus::Ok => "OK",
            StockStatus::Overstock => "Overstock",
            StockStatus::DeadStock => "Dead Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One product row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub status: StockStatus,
    /// Human-readable age of the last update ("2 hours ago")
    pub updated: String,
}

impl Searchable for InventoryItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str(), self.status.label()]
    }

    fn matches_filter(&self, name: &str, value: &str) -> bool {
        match name {
            FILTER_STATUS => self.status.label().eq_ignore_ascii_case(value),
            FILTER_CATEGORY => self.category.eq_ignore_ascii_case(value),
            _ => true,
        }
    }
}

/// State owned by the inventory screen while it is active.
#[derive(Debug, Clone)]
pub struct InventoryState {
    items: FilterableList<InventoryItem>,
    /// Cursor into the visible rows
    pub selected: usize,
}

impl InventoryState {
    pub fn new(items: impl IntoIterator<Item = InventoryItem>) -> Self {
        Self {
            items: FilterableList::with_items(&[FILTER_STATUS, FILTER_CATEGORY], items),
            selected: 0,
        }
    }

    /// State seeded with the demo catalogue.
    pub fn with_mock_items() -> Self {
        Self::new(fixtures::inventory_items())
    }

    pub fn items(&self) -> &FilterableList<InventoryItem> {
        &self.items
    }

    /// Rows currently shown.
    pub fn visible(&self) -> &VisibleSnapshot<InventoryItem> {
        self.items.snapshot()
    }

    /// Number of products in the source collection.
    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    // ========================================================================
    // Search and filters
    // ========================================================================

    pub fn search_text(&self) -> &str {
        self.items.search_text()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.items.set_search_text(text);
        self.clamp_selection();
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut text = self.search_text().to_string();
        text.push(c);
        self.set_search_text(text);
    }

    pub fn pop_search_char(&mut self) {
        let mut text = self.search_text().to_string();
        if text.pop().is_some() {
            self.set_search_text(text);
        }
    }

    pub fn set_filter(&mut self, name: &str, value: &str) {
        self.items.set_filter(name, value);
        self.clamp_selection();
    }

    /// Display value of filter `name` ("All" when unset).
    pub fn filter_label(&self, name: &str) -> String {
        self.items.filter(name).unwrap_or("All").to_string()
    }

    /// Advance the status filter to the next option.
    pub fn cycle_status_filter(&mut self) -> &'static str {
        let next = cycle_option(STATUS_OPTIONS, self.items.filter(FILTER_STATUS));
        self.set_filter(FILTER_STATUS, next);
        next
    }

    /// Advance the category filter to the next option.
    pub fn cycle_category_filter(&mut self) -> &'static str {
        let next = cycle_option(CATEGORY_OPTIONS, self.items.filter(FILTER_CATEGORY));
        self.set_filter(FILTER_CATEGORY, next);
        next
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible().len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Select the visible row at `index`, clamped to the last visible row.
    pub fn select(&mut self, index: usize) {
        self.selected = index;
        self.clamp_selection();
    }

    pub fn selected_id(&self) -> Option<ItemId> {
        self.visible().get(self.selected).map(|(id, _)| id)
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Delete the product with `id`.
    pub fn remove_item(&mut self, id: ItemId) -> Option<InventoryItem> {
        let removed = self.items.remove_item(id);
        if let Some(ref item) = removed {
            tracing::debug!("Inventory: removed {}", item.name);
        }
        self.clamp_selection();
        removed
    }

    pub fn remove_selected(&mut self) -> Option<InventoryItem> {
        let id = self.selected_id()?;
        self.remove_item(id)
    }

    /// Append a product.
    pub fn add_item(&mut self, item: InventoryItem) -> ItemId {
        self.items.insert(item)
    }

    /// Remove every product.
    pub fn clear_all(&mut self) {
        self.items.clear();
        self.selected = 0;
    }

    /// Re-publish the visible rows without changing anything.
    pub fn refresh(&mut self) {
        self.items.publish();
    }

    // ========================================================================
    // Dialogs
    // ========================================================================

    pub fn add_dialog(&self) -> Dialog {
        Dialog::new("Add product", "Product creation form will go here.")
    }

    pub fn edit_dialog(&self, id: ItemId) -> Option<Dialog> {
        let item = self.items.get(id)?;
        Some(Dialog::new(
            format!("Edit {}", item.name),
            "Product edit form will go here.",
        ))
    }

    /// Whether any filter other than "All" is active.
    pub fn has_active_filters(&self) -> bool {
        [FILTER_STATUS, FILTER_CATEGORY]
            .iter()
            .any(|name| self.items.filter(name).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_names(state: &InventoryState) -> Vec<String> {
        state.visible().iter().map(|(_, item)| item.name.clone()).collect()
    }

    #[test]
    fn test_mock_catalogue_loaded() {
        let state = InventoryState::with_mock_items();
        assert_eq!(state.total_count(), 8);
        assert_eq!(state.visible().len(), 8);
    }

    #[test]
    fn test_search_matches_status_label() {
        let mut state = InventoryState::with_mock_items();
        state.set_search_text("dead");
        assert_eq!(visible_names(&state), vec!["Desk Lamp"]);
    }

    #[test]
    fn test_status_filter_cycle() {
        let mut state = InventoryState::with_mock_items();
        assert_eq!(state.cycle_status_filter(), "Low");
        assert_eq!(
            visible_names(&state),
            vec!["Wireless Mouse", "Laptop Stand", "USB Cable"]
        );
        assert!(state.has_active_filters());

        assert_eq!(state.cycle_status_filter(), "OK");
        assert_eq!(state.cycle_status_filter(), "Overstock");
        assert_eq!(state.cycle_status_filter(), "Dead Stock");
        assert_eq!(state.cycle_status_filter(), "All");
        assert_eq!(state.visible().len(), 8);
        assert!(!state.has_active_filters());
    }

    #[test]
    fn test_category_and_search_combine() {
        let mut state = InventoryState::with_mock_items();
        state.set_filter(FILTER_CATEGORY, "furniture");
        state.set_search_text("arm");
        assert_eq!(visible_names(&state), vec!["Monitor Arm"]);
        assert_eq!(state.filter_label(FILTER_CATEGORY), "furniture");
    }

    #[test]
    fn test_remove_selected_clamps_cursor() {
        let mut state = InventoryState::with_mock_items();
        state.set_filter(FILTER_CATEGORY, "Lighting");
        assert_eq!(state.visible().len(), 1);

        let removed = state.remove_selected().unwrap();
        assert_eq!(removed.name, "Desk Lamp");
        assert_eq!(state.total_count(), 7);
        assert!(state.visible().is_empty());
        assert!(state.selected_id().is_none());
        assert!(state.remove_selected().is_none());
    }

    #[test]
    fn test_selection_moves_within_bounds() {
        let mut state = InventoryState::with_mock_items();
        state.select_prev();
        assert_eq!(state.selected, 0);
        for _ in 0..20 {
            state.select_next();
        }
        assert_eq!(state.selected, 7);
    }

    #[test]
    fn test_select_clamps_to_visible_rows() {
        let mut state = InventoryState::with_mock_items();
        state.select(3);
        assert_eq!(state.selected, 3);
        state.select(99);
        assert_eq!(state.selected, 7);

        state.set_filter(FILTER_CATEGORY, "Lighting");
        state.select(5);
        assert_eq!(state.selected, 0);
        let id = state.selected_id().unwrap();
        assert_eq!(state.items().get(id).map(|i| i.name.as_str()), Some("Desk Lamp"));
    }

    #[test]
    fn test_edit_dialog_names_product() {
        let state = InventoryState::with_mock_items();
        let id = state.selected_id().unwrap();
        let dialog = state.edit_dialog(id).unwrap();
        assert_eq!(dialog.title, "Edit Wireless Mouse");
        assert_eq!(state.add_dialog().title, "Add product");
    }

    #[test]
    fn test_backspace_search() {
        let mut state = InventoryState::with_mock_items();
        state.push_search_char('u');
        state.push_search_char('s');
        state.push_search_char('b');
        assert_eq!(visible_names(&state), vec!["USB Cable"]);
        state.pop_search_char();
        state.pop_search_char();
        state.pop_search_char();
        state.pop_search_char();
        assert_eq!(state.search_text(), "");
        assert_eq!(state.visible().len(), 8);
    }

    #[test]
    fn test_clear_all_then_add() {
        let mut state = InventoryState::with_mock_items();
        let before = state.visible().revision();
        state.clear_all();
        assert_eq!(state.total_count(), 0);
        assert!(state.visible().revision() > before);

        let id = state.add_item(fixtures_item());
        assert_eq!(state.items().get(id).map(|i| i.name.as_str()), Some("Shelf Bracket"));
        assert_eq!(state.visible().len(), 1);
    }

    #[test]
    fn test_refresh_keeps_rows() {
        let mut state = InventoryState::with_mock_items();
        let names = visible_names(&state);
        let before = state.visible().revision();
        state.refresh();
        assert_eq!(visible_names(&state), names);
        assert!(state.visible().revision() > before);
    }

    fn fixtures_item() -> InventoryItem {
        InventoryItem {
            name: "Shelf Bracket".to_string(),
            category: "Furniture".to_string(),
            quantity: 20,
            status: StockStatus::Ok,
            updated: "just now".to_string(),
        }
    }
}
