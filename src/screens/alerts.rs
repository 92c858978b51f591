//! Alerts screen state.

use std::fmt;

use super::filter::{FilterableList, ItemId, Searchable, VisibleSnapshot};
use super::{cycle_option, fixtures};
use crate::app::Dialog;

/// Filter name for [`Severity`]
pub const FILTER_SEVERITY: &str = "severity";
/// Filter name for the alert type
pub const FILTER_TYPE: &str = "type";

pub const SEVERITY_OPTIONS: &[&str] = &["all", "critical", "warning", "info"];
pub const TYPE_OPTIONS: &[&str] = &["all", "Low Stock", "Overstock", "Demand Spike", "Mismatch"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Capitalized form for chips ("Critical").
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One alert or anomaly signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertItem {
    /// Backend identifier ("a1"); not used for identity inside the list
    pub code: String,
    /// Alert type ("Low Stock Warning")
    pub kind: String,
    pub product: String,
    pub message: String,
    pub severity: Severity,
    /// Human-readable age ("2 hours ago")
    pub time: String,
    pub resolved: bool,
}

impl Searchable for AlertItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.kind.as_str(),
            self.message.as_str(),
            self.product.as_str(),
        ]
    }

    fn matches_filter(&self, name: &str, value: &str) -> bool {
        match name {
            FILTER_SEVERITY => self.severity.as_str().eq_ignore_ascii_case(value),
            FILTER_TYPE => self.kind.to_lowercase().contains(&value.to_lowercase()),
            _ => true,
        }
    }
}

/// Header counts over the whole alert collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertSummary {
    pub total: usize,
    pub critical: usize,
    pub warning: usize,
}

/// State owned by the alerts screen while it is active.
#[derive(Debug, Clone)]
pub struct AlertsState {
    alerts: FilterableList<AlertItem>,
    /// Cursor into the visible alerts
    pub selected: usize,
}

impl AlertsState {
    pub fn new(alerts: impl IntoIterator<Item = AlertItem>) -> Self {
        Self {
            alerts: FilterableList::with_items(&[FILTER_SEVERITY, FILTER_TYPE], alerts),
            selected: 0,
        }
    }

    /// State seeded with the demo alerts.
    pub fn with_mock_alerts() -> Self {
        Self::new(fixtures::alerts())
    }

    pub fn alerts(&self) -> &FilterableList<AlertItem> {
        &self.alerts
    }

    pub fn visible(&self) -> &VisibleSnapshot<AlertItem> {
        self.alerts.snapshot()
    }

    pub fn summary(&self) -> AlertSummary {
        self.alerts.iter().fold(
            AlertSummary {
                total: self.alerts.len(),
                ..AlertSummary::default()
            },
            |mut summary, (_, alert)| {
                match alert.severity {
                    Severity::Critical => summary.critical += 1,
                    Severity::Warning => summary.warning += 1,
                    Severity::Info => {}
                }
                summary
            },
        )
    }

    // ========================================================================
    // Search and filters
    // ========================================================================

    pub fn search_text(&self) -> &str {
        self.alerts.search_text()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.alerts.set_search_text(text);
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
        self.alerts.set_filter(name, value);
        self.clamp_selection();
    }

    /// Display value of filter `name` ("all" when unset).
    pub fn filter_label(&self, name: &str) -> String {
        self.alerts.filter(name).unwrap_or("all").to_string()
    }

    pub fn cycle_severity_filter(&mut self) -> &'static str {
        let next = cycle_option(SEVERITY_OPTIONS, self.alerts.filter(FILTER_SEVERITY));
        self.set_filter(FILTER_SEVERITY, next);
        next
    }

    pub fn cycle_type_filter(&mut self) -> &'static str {
        let next = cycle_option(TYPE_OPTIONS, self.alerts.filter(FILTER_TYPE));
        self.set_filter(FILTER_TYPE, next);
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

    /// Dismiss exactly the alert with `id`.
    pub fn dismiss(&mut self, id: ItemId) -> Option<AlertItem> {
        let removed = self.alerts.remove_item(id);
        self.clamp_selection();
        removed
    }

    pub fn dismiss_selected(&mut self) -> Option<AlertItem> {
        let id = self.selected_id()?;
        self.dismiss(id)
    }

    /// Acknowledge every alert, emptying the collection.
    pub fn acknowledge_all(&mut self) -> usize {
        let count = self.alerts.len();
        self.alerts.clear();
        self.selected = 0;
        tracing::debug!("Alerts: acknowledged {}", count);
        count
    }

    /// Drop alerts marked resolved. Returns how many were removed.
    pub fn clear_resolved(&mut self) -> usize {
        let removed = self.alerts.retain(|alert| !alert.resolved);
        self.clamp_selection();
        removed
    }

    pub fn refresh(&mut self) {
        self.alerts.publish();
    }

    /// Toast text for the "Take action" button.
    pub fn take_action(&self, id: ItemId) -> Option<String> {
        let alert = self.alerts.get(id)?;
        Some(format!("Action triggered for: {}", alert.kind))
    }

    pub fn details_dialog(&self, id: ItemId) -> Option<Dialog> {
        let alert = self.alerts.get(id)?;
        Some(Dialog::new(alert.kind.clone(), alert.message.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(kind: &str, severity: Severity, resolved: bool) -> AlertItem {
        AlertItem {
            code: "t".to_string(),
            kind: kind.to_string(),
            product: "Desk Lamp".to_string(),
            message: format!("{} on Desk Lamp", kind),
            severity,
            time: "now".to_string(),
            resolved,
        }
    }

    fn visible_codes(state: &AlertsState) -> Vec<String> {
        state.visible().iter().map(|(_, a)| a.code.clone()).collect()
    }

    #[test]
    fn test_summary_counts_source() {
        let mut state = AlertsState::with_mock_alerts();
        let summary = state.summary();
        assert_eq!(summary.total, 5);
        assert_eq!(summary.critical, 3);
        assert_eq!(summary.warning, 2);

        state.set_filter(FILTER_SEVERITY, "warning");
        assert_eq!(state.visible().len(), 2);
        assert_eq!(state.summary(), summary);
    }

    #[test]
    fn test_search_covers_type_message_product() {
        let mut state = AlertsState::with_mock_alerts();
        state.set_search_text("keyboard");
        assert_eq!(visible_codes(&state), vec!["a3"]);

        state.set_search_text("AUDIT");
        assert_eq!(visible_codes(&state), vec!["a5"]);

        state.set_search_text("low stock");
        assert_eq!(visible_codes(&state), vec!["a1", "a4"]);
    }

    #[test]
    fn test_type_filter_is_substring() {
        let mut state = AlertsState::with_mock_alerts();
        assert_eq!(state.cycle_type_filter(), "Low Stock");
        assert_eq!(visible_codes(&state), vec!["a1", "a4"]);
        assert_eq!(state.cycle_type_filter(), "Overstock");
        assert_eq!(visible_codes(&state), vec!["a3"]);
        assert_eq!(state.cycle_type_filter(), "Demand Spike");
        assert_eq!(visible_codes(&state), vec!["a2"]);
        assert_eq!(state.cycle_type_filter(), "Mismatch");
        assert_eq!(visible_codes(&state), vec!["a5"]);
        assert_eq!(state.cycle_type_filter(), "all");
        assert_eq!(state.visible().len(), 5);
    }

    #[test]
    fn test_acknowledge_all_empties() {
        let mut state = AlertsState::with_mock_alerts();
        assert_eq!(state.acknowledge_all(), 5);
        assert!(state.visible().is_empty());
        assert_eq!(state.summary(), AlertSummary::default());
    }

    #[test]
    fn test_clear_resolved_only_drops_resolved() {
        let mut state = AlertsState::new([
            alert("Overstock Alert", Severity::Warning, true),
            alert("Low Stock Warning", Severity::Critical, false),
            alert("Overstock Alert", Severity::Warning, true),
        ]);
        assert_eq!(state.clear_resolved(), 2);
        assert_eq!(state.alerts().len(), 1);
        assert_eq!(state.clear_resolved(), 0);
    }

    #[test]
    fn test_dismiss_identical_alerts_by_identity() {
        let mut state = AlertsState::new([
            alert("Overstock Alert", Severity::Warning, false),
            alert("Overstock Alert", Severity::Warning, false),
        ]);
        let ids = state.visible().ids();
        state.dismiss(ids[0]);
        assert_eq!(state.visible().ids(), vec![ids[1]]);
    }

    #[test]
    fn test_take_action_and_details() {
        let state = AlertsState::with_mock_alerts();
        let id = state.selected_id().unwrap();
        assert_eq!(
            state.take_action(id).as_deref(),
            Some("Action triggered for: Low Stock Warning")
        );
        let dialog = state.details_dialog(id).unwrap();
        assert_eq!(dialog.title, "Low Stock Warning");
        assert!(dialog.body.contains("5 units remaining"));
    }

    #[test]
    fn test_select_clamps_to_visible_rows() {
        let mut state = AlertsState::with_mock_alerts();
        state.select(42);
        assert_eq!(state.selected, 4);
        let id = state.selected_id().unwrap();
        assert_eq!(
            state.take_action(id).as_deref(),
            Some("Action triggered for: Stock Mismatch Detected")
        );
    }

    #[test]
    fn test_refresh_republishes_same_rows() {
        let mut state = AlertsState::with_mock_alerts();
        let ids = state.visible().ids();
        let before = state.visible().revision();
        state.refresh();
        assert_eq!(state.visible().ids(), ids);
        assert_eq!(state.visible().revision(), before + 1);
    }
}
