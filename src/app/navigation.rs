//! Navigation between screens.
//!
//! [`NavigationController::navigate`] is the only writer of the active
//! route in the session. It cannot fail: an unknown route is still recorded
//! and resolves to the "not found" screen.

use super::Route;
use crate::screens::{ScreenFactory, ScreenRegistry};
use crate::state::{keys, SessionStore};

/// Result of one navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: Route,
    pub to: Route,
    /// Builds the state for the destination screen
    pub factory: ScreenFactory,
    /// A signed-in user was cleared by navigating to login
    pub logged_out: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationController {
    registry: ScreenRegistry,
}

impl NavigationController {
    pub fn new(registry: ScreenRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ScreenRegistry {
        &self.registry
    }

    /// Commit `target` as the active screen.
    ///
    /// Navigating to login is a logout and also removes the user email.
    pub fn navigate(&self, session: &mut SessionStore, target: impl Into<Route>) -> Transition {
        let to = target.into();
        let factory = self.registry.resolve(&to);
        let from = session.active_route();

        session.set(keys::ACTIVE_SCREEN, to.as_str());
        let logged_out = to.is_login() && session.remove(keys::USER_EMAIL).is_some();

        tracing::info!("Navigate {} -> {}", from, to);
        if logged_out {
            tracing::info!("Signed out");
        }

        Transition {
            from,
            to,
            factory,
            logged_out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ScreenId;

    #[test]
    fn test_navigate_records_active_screen() {
        let mut session = SessionStore::new();
        let transition = NavigationController::default().navigate(&mut session, ScreenId::Inventory);

        assert_eq!(session.get(keys::ACTIVE_SCREEN), Some("inventory"));
        assert_eq!(transition.from, Route::Screen(ScreenId::Login));
        assert_eq!(transition.factory, ScreenFactory::Known(ScreenId::Inventory));
        assert!(!transition.logged_out);
    }

    #[test]
    fn test_navigate_to_login_clears_email() {
        let mut session = SessionStore::new();
        session.set(keys::USER_EMAIL, "a@b.com");
        let controller = NavigationController::default();
        controller.navigate(&mut session, ScreenId::Dashboard);
        assert_eq!(session.user_email(), Some("a@b.com"));

        let transition = controller.navigate(&mut session, ScreenId::Login);
        assert!(transition.logged_out);
        assert_eq!(session.user_email(), None);
        assert_eq!(session.active_route(), Route::Screen(ScreenId::Login));
    }

    #[test]
    fn test_login_without_user_is_not_a_logout() {
        let mut session = SessionStore::new();
        let transition = NavigationController::default().navigate(&mut session, ScreenId::Login);
        assert!(!transition.logged_out);
    }

    #[test]
    fn test_unknown_route_commits_and_falls_back() {
        let mut session = SessionStore::new();
        let transition = NavigationController::default().navigate(&mut session, "reports");

        assert_eq!(session.get(keys::ACTIVE_SCREEN), Some("reports"));
        assert!(transition.factory.is_fallback());
    }
}
