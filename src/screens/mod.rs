//! Screen states and the registry that builds them.
//!
//! Each route maps to one [`Screen`] variant owning that screen's state.
//! A screen is built fresh by [`ScreenRegistry::resolve`] whenever it is
//! navigated to and dropped when the user navigates away, so nothing here
//! outlives a visit.

pub mod alerts;
pub mod chat;
pub mod filter;
mod fixtures;
pub mod inventory;
pub mod login;
pub mod overview;
pub mod settings;

pub use alerts::AlertsState;
pub use chat::ChatState;
pub use filter::{FilterableList, ItemId, Searchable, VisibleSnapshot};
pub use inventory::InventoryState;
pub use login::LoginState;
pub use overview::{AnalyticsState, DashboardState};
pub use settings::SettingsState;

use crate::app::{Route, ScreenId};

/// Text shown for a route with no registered screen
pub const NOT_FOUND_TEXT: &str = "Page not found";

/// Return the option after `current` in `options`, wrapping around.
///
/// `current` is compared case-insensitively; `None` or an unknown value is
/// treated as the first option.
pub(crate) fn cycle_option(options: &'static [&'static str], current: Option<&str>) -> &'static str {
    if options.is_empty() {
        return "";
    }
    let position = current
        .and_then(|value| options.iter().position(|o| o.eq_ignore_ascii_case(value)))
        .unwrap_or(0);
    options[(position + 1) % options.len()]
}

/// The live state of the active screen.
#[derive(Debug)]
pub enum Screen {
    Login(LoginState),
    Dashboard(DashboardState),
    Chat(ChatState),
    Inventory(InventoryState),
    Alerts(AlertsState),
    Analytics(AnalyticsState),
    Settings(SettingsState),
    /// Fallback for unresolved routes; keeps the requested name for display.
    NotFound { route: String },
}

impl Screen {
    /// Screen identifier, `None` for the fallback screen.
    pub fn id(&self) -> Option<ScreenId> {
        match self {
            Screen::Login(_) => Some(ScreenId::Login),
            Screen::Dashboard(_) => Some(ScreenId::Dashboard),
            Screen::Chat(_) => Some(ScreenId::Chat),
            Screen::Inventory(_) => Some(ScreenId::Inventory),
            Screen::Alerts(_) => Some(ScreenId::Alerts),
            Screen::Analytics(_) => Some(ScreenId::Analytics),
            Screen::Settings(_) => Some(ScreenId::Settings),
            Screen::NotFound { .. } => None,
        }
    }

    /// Whether this screen draws without the navigation shell.
    pub fn is_full_screen(&self) -> bool {
        matches!(self, Screen::Login(_))
    }

    /// Whether printable keys go into a text buffer on this screen.
    pub fn accepts_text(&self) -> bool {
        matches!(
            self,
            Screen::Login(_) | Screen::Chat(_) | Screen::Inventory(_) | Screen::Alerts(_)
        )
    }

    pub fn title(&self) -> &str {
        match self {
            Screen::Login(_) => "Sign in",
            Screen::Dashboard(_) => "Dashboard",
            Screen::Chat(_) => "AI Assistant",
            Screen::Inventory(_) => "Inventory",
            Screen::Alerts(_) => "Alerts",
            Screen::Analytics(_) => "Analytics",
            Screen::Settings(_) => "Settings",
            Screen::NotFound { .. } => NOT_FOUND_TEXT,
        }
    }
}

/// Builds a screen's initial state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenFactory {
    Known(ScreenId),
    NotFound(String),
}

impl ScreenFactory {
    pub fn build(&self) -> Screen {
        match self {
            ScreenFactory::Known(ScreenId::Login) => Screen::Login(LoginState::new()),
            ScreenFactory::Known(ScreenId::Dashboard) => Screen::Dashboard(DashboardState),
            ScreenFactory::Known(ScreenId::Chat) => Screen::Chat(ChatState::new()),
            ScreenFactory::Known(ScreenId::Inventory) => {
                Screen::Inventory(InventoryState::with_mock_items())
            }
            ScreenFactory::Known(ScreenId::Alerts) => Screen::Alerts(AlertsState::with_mock_alerts()),
            ScreenFactory::Known(ScreenId::Analytics) => Screen::Analytics(AnalyticsState::new()),
            ScreenFactory::Known(ScreenId::Settings) => Screen::Settings(SettingsState::new()),
            ScreenFactory::NotFound(route) => Screen::NotFound {
                route: route.clone(),
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ScreenFactory::NotFound(_))
    }
}

/// Maps routes to screen factories.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenRegistry;

impl ScreenRegistry {
    /// Resolve a route. Unknown routes get the "not found" factory.
    pub fn resolve(&self, route: &Route) -> ScreenFactory {
        match route.screen() {
            Some(id) => ScreenFactory::Known(id),
            None => {
                tracing::warn!("No screen registered for route {:?}", route.as_str());
                ScreenFactory::NotFound(route.as_str().to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_option_wraps() {
        let options: &'static [&'static str] = &["All", "Low", "OK"];
        assert_eq!(cycle_option(options, None), "Low");
        assert_eq!(cycle_option(options, Some("low")), "OK");
        assert_eq!(cycle_option(options, Some("OK")), "All");
        assert_eq!(cycle_option(options, Some("bogus")), "Low");
    }

    #[test]
    fn test_resolve_every_known_screen() {
        let registry = ScreenRegistry;
        for id in ScreenId::ALL {
            let factory = registry.resolve(&Route::Screen(id));
            assert_eq!(factory, ScreenFactory::Known(id));
            assert_eq!(factory.build().id(), Some(id));
        }
    }

    #[test]
    fn test_resolve_unknown_falls_back() {
        let factory = ScreenRegistry.resolve(&Route::parse("reports"));
        assert!(factory.is_fallback());
        match factory.build() {
            Screen::NotFound { route } => assert_eq!(route, "reports"),
            other => panic!("expected NotFound, got {:?}", other.id()),
        }
    }

    #[test]
    fn test_only_login_is_full_screen() {
        for id in ScreenId::ALL {
            let screen = ScreenFactory::Known(id).build();
            assert_eq!(screen.is_full_screen(), id == ScreenId::Login);
        }
    }
}
