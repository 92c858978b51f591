//! Type definitions for the application state.
//!
//! Contains enums and structs used for routing and transient UI state:
//! - [`ScreenId`] - The closed set of navigable screens
//! - [`Route`] - A requested destination, known or not
//! - [`Toast`] - Transient snack-bar message
//! - [`Dialog`] - Modal dialog contents

use std::fmt;
use std::time::{Duration, Instant};

/// Identifies one top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Login,
    Dashboard,
    Chat,
    Inventory,
    Alerts,
    Analytics,
    Settings,
}

impl ScreenId {
    /// Every screen, in declaration order.
    pub const ALL: [ScreenId; 7] = [
        ScreenId::Login,
        ScreenId::Dashboard,
        ScreenId::Chat,
        ScreenId::Inventory,
        ScreenId::Alerts,
        ScreenId::Analytics,
        ScreenId::Settings,
    ];

    /// Route name used in the session and in paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenId::Login => "login",
            ScreenId::Dashboard => "dashboard",
            ScreenId::Chat => "chat",
            ScreenId::Inventory => "inventory",
            ScreenId::Alerts => "alerts",
            ScreenId::Analytics => "analytics",
            ScreenId::Settings => "settings",
        }
    }

    /// Parse a route name. Matching is exact (`"alerts"`, not `"Alerts"`).
    pub fn from_name(name: &str) -> Option<ScreenId> {
        ScreenId::ALL.into_iter().find(|id| id.as_str() == name)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A navigation target.
///
/// Unknown names are kept verbatim in [`Route::NotFound`] so the session
/// records exactly what was requested while the shell shows the fallback page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Screen(ScreenId),
    NotFound(String),
}

impl Route {
    /// Parse a route name or path. A single leading `/` is accepted.
    pub fn parse(raw: &str) -> Route {
        let name = raw.strip_prefix('/').unwrap_or(raw);
        match ScreenId::from_name(name) {
            Some(id) => Route::Screen(id),
            None => Route::NotFound(name.to_string()),
        }
    }

    /// The name stored in the session for this route.
    pub fn as_str(&self) -> &str {
        match self {
            Route::Screen(id) => id.as_str(),
            Route::NotFound(name) => name,
        }
    }

    pub fn screen(&self) -> Option<ScreenId> {
        match self {
            Route::Screen(id) => Some(*id),
            Route::NotFound(_) => None,
        }
    }

    pub fn is_login(&self) -> bool {
        matches!(self, Route::Screen(ScreenId::Login))
    }

    /// Path form, e.g. `/inventory`.
    pub fn path(&self) -> String {
        format!("/{}", self.as_str())
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Screen(ScreenId::Login)
    }
}

impl From<ScreenId> for Route {
    fn from(id: ScreenId) -> Self {
        Route::Screen(id)
    }
}

impl From<&str> for Route {
    fn from(raw: &str) -> Self {
        Route::parse(raw)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// Transient message shown over the content (snack bar)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            expires_at: Instant::now() + ttl,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Modal dialog (title + body), closed with Esc or Enter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub body: String,
}

impl Dialog {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_id_round_trips_through_name() {
        for id in ScreenId::ALL {
            assert_eq!(ScreenId::from_name(id.as_str()), Some(id));
        }
        assert_eq!(ScreenId::from_name("Alerts"), None);
    }

    #[test]
    fn test_route_parse_accepts_paths() {
        assert_eq!(Route::parse("/inventory"), Route::Screen(ScreenId::Inventory));
        assert_eq!(Route::parse("chat"), Route::Screen(ScreenId::Chat));
        assert_eq!(Route::parse("/reports"), Route::NotFound("reports".to_string()));
    }

    #[test]
    fn test_route_default_is_login() {
        assert!(Route::default().is_login());
        assert_eq!(Route::default().path(), "/login");
    }

    #[test]
    fn test_toast_expiry() {
        let toast = Toast::new("saved", ToastKind::Info, Duration::ZERO);
        assert!(toast.is_expired(Instant::now()));

        let toast = Toast::new("saved", ToastKind::Info, Duration::from_secs(60));
        assert!(!toast.is_expired(Instant::now()));
    }
}
