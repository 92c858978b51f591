//! Static navigation entries shared by the sidebar and the bottom bar.

use crate::app::{Route, ScreenId};

/// One navigation destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: ScreenId,
    pub icon: &'static str,
}

/// Navigation entries in display order
pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        label: "Chat",
        target: ScreenId::Chat,
        icon: "✉",
    },
    NavItem {
        label: "Dashboard",
        target: ScreenId::Dashboard,
        icon: "▦",
    },
    NavItem {
        label: "Inventory",
        target: ScreenId::Inventory,
        icon: "▤",
    },
    NavItem {
        label: "Alerts",
        target: ScreenId::Alerts,
        icon: "⚠",
    },
    NavItem {
        label: "Analytics",
        target: ScreenId::Analytics,
        icon: "▲",
    },
    NavItem {
        label: "Settings",
        target: ScreenId::Settings,
        icon: "⚙",
    },
];

/// Position of `route` in [`NAV_ITEMS`], or 0 when it has no entry.
pub fn selected_index(route: &Route) -> usize {
    route
        .screen()
        .and_then(|id| NAV_ITEMS.iter().position(|item| item.target == id))
        .unwrap_or(0)
}

/// Nav entry at `index`, if any.
pub fn nav_target(index: usize) -> Option<ScreenId> {
    NAV_ITEMS.get(index).map(|item| item.target)
}

/// Entry after (or before) the one for `route`, wrapping.
pub fn cycle_target(route: &Route, forward: bool) -> ScreenId {
    let len = NAV_ITEMS.len();
    let current = selected_index(route);
    let next = if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    };
    NAV_ITEMS[next].target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_index_known_routes() {
        assert_eq!(selected_index(&Route::Screen(ScreenId::Chat)), 0);
        assert_eq!(selected_index(&Route::Screen(ScreenId::Dashboard)), 1);
        assert_eq!(selected_index(&Route::Screen(ScreenId::Alerts)), 3);
        assert_eq!(selected_index(&Route::Screen(ScreenId::Settings)), 5);
    }

    #[test]
    fn test_selected_index_defaults_to_first() {
        assert_eq!(selected_index(&Route::parse("reports")), 0);
        assert_eq!(selected_index(&Route::Screen(ScreenId::Login)), 0);
    }

    #[test]
    fn test_cycle_target_wraps() {
        let settings = Route::Screen(ScreenId::Settings);
        assert_eq!(cycle_target(&settings, true), ScreenId::Chat);
        let chat = Route::Screen(ScreenId::Chat);
        assert_eq!(cycle_target(&chat, false), ScreenId::Settings);
    }

    #[test]
    fn test_nav_target_bounds() {
        assert_eq!(nav_target(2), Some(ScreenId::Inventory));
        assert_eq!(nav_target(6), None);
    }
}
