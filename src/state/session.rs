//! Session store
//!
//! A key/value bag scoped to one running application instance. It holds the
//! active route and the signed-in user's email. It is owned by [`App`] and
//! passed explicitly to the navigation controller; there is no global copy.
//!
//! [`App`]: crate::app::App

use std::collections::HashMap;

use crate::app::Route;

/// Well-known session keys
pub mod keys {
    /// Name of the active route
    pub const ACTIVE_SCREEN: &str = "active_screen";
    /// Email of the signed-in user
    pub const USER_EMAIL: &str = "user_email";
}

/// In-memory session state.
///
/// `get`/`set` perform no validation; typed accessors interpret the
/// well-known keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore {
    values: HashMap<String, String>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create a session positioned on the login screen.
    pub fn new() -> Self {
        let mut values = HashMap::new();
        values.insert(
            keys::ACTIVE_SCREEN.to_string(),
            Route::default().as_str().to_string(),
        );
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The active route. A missing entry reads as the login route.
    pub fn active_route(&self) -> Route {
        self.get(keys::ACTIVE_SCREEN)
            .map(Route::parse)
            .unwrap_or_default()
    }

    pub fn user_email(&self) -> Option<&str> {
        self.get(keys::USER_EMAIL)
    }

    pub fn is_signed_in(&self) -> bool {
        self.contains(keys::USER_EMAIL)
    }
}
