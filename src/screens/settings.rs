//! Settings screen view model.
//!
//! Every action is a placeholder that only reports what it would do.

/// One card on the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsSection {
    pub title: &'static str,
    pub rows: &'static [(&'static str, &'static str)],
    pub actions: &'static [SettingsAction],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsAction {
    pub label: &'static str,
    pub toast: &'static str,
}

pub const SECTIONS: [SettingsSection; 5] = [
    SettingsSection {
        title: "Profile",
        rows: &[
            ("Full name", "John Doe"),
            ("Email", "john@example.com"),
            ("Role", "Inventory Manager"),
        ],
        actions: &[SettingsAction {
            label: "Edit profile",
            toast: "Profile editing coming soon.",
        }],
    },
    SettingsSection {
        title: "Notifications",
        rows: &[
            ("Low stock alerts", "Enabled"),
            ("Demand predictions", "Enabled"),
            ("Weekly reports", "Disabled"),
        ],
        actions: &[SettingsAction {
            label: "Edit notifications",
            toast: "Notification settings coming soon.",
        }],
    },
    SettingsSection {
        title: "Security",
        rows: &[
            ("Two-factor authentication", "Enabled"),
            ("Session timeout", "30 minutes"),
            ("Last login", "Today at 9:24 AM"),
        ],
        actions: &[SettingsAction {
            label: "Manage security",
            toast: "Security settings coming soon.",
        }],
    },
    SettingsSection {
        title: "Preferences",
        rows: &[
            ("Language", "English (US)"),
            ("Time zone", "GMT-5 (EST)"),
            ("Date format", "MM/DD/YYYY"),
        ],
        actions: &[SettingsAction {
            label: "Edit preferences",
            toast: "Preferences editing coming soon.",
        }],
    },
    SettingsSection {
        title: "Data & storage",
        rows: &[],
        actions: &[
            SettingsAction {
                label: "Export data",
                toast: "Data export request submitted (placeholder).",
            },
            SettingsAction {
                label: "Clear cache",
                toast: "Local cache cleared (placeholder).",
            },
        ],
    },
];

#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    /// Index into [`SettingsState::actions`]
    pub selected: usize,
}

impl SettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &'static [SettingsSection] {
        &SECTIONS
    }

    /// All actions across sections, in display order.
    pub fn actions(&self) -> impl Iterator<Item = &'static SettingsAction> {
        SECTIONS.iter().flat_map(|section| section.actions.iter())
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.actions().count() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Select the action at `index`, clamped to the last action.
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.actions().count().saturating_sub(1));
    }

    pub fn selected_action(&self) -> Option<&'static SettingsAction> {
        self.actions().nth(self.selected)
    }

    /// Trigger the selected action; returns its toast text.
    pub fn activate(&self) -> Option<&'static str> {
        self.selected_action().map(|action| action.toast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_flatten_sections() {
        let settings = SettingsState::new();
        let labels: Vec<_> = settings.actions().map(|a| a.label).collect();
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0], "Edit profile");
        assert_eq!(labels[5], "Clear cache");
    }

    #[test]
    fn test_activate_selected() {
        let mut settings = SettingsState::new();
        assert_eq!(settings.activate(), Some("Profile editing coming soon."));
        for _ in 0..10 {
            settings.select_next();
        }
        assert_eq!(settings.selected, 5);
        assert_eq!(settings.activate(), Some("Local cache cleared (placeholder)."));
    }

    #[test]
    fn test_select_clamps_to_last_action() {
        let mut settings = SettingsState::new();
        settings.select(2);
        assert_eq!(settings.selected, 2);
        settings.select(99);
        assert_eq!(settings.selected, 5);
    }
}
