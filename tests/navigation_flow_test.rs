//! End-to-end navigation through the App: login, shell navigation, logout.

mod common;

use common::*;
use crossterm::event::KeyCode;
use vyapaar::app::{App, Route, ScreenId};
use vyapaar::screens::Screen;
use vyapaar::state::keys;
use vyapaar::ui::interaction::ClickAction;
use vyapaar::ui::shell::ShellChrome;
use vyapaar::ui::LayoutClass;

#[test]
fn test_login_then_dashboard_then_mobile_then_logout() {
    let mut app = App::new(test_config());
    assert_eq!(app.active_route(), Route::Screen(ScreenId::Login));

    sign_in(&mut app);
    assert_eq!(app.active_route(), Route::Screen(ScreenId::Dashboard));
    assert_eq!(app.session.get(keys::USER_EMAIL), Some(TEST_EMAIL));

    // 500 logical units is below the 800 breakpoint
    app.width_override = Some(500);
    let shell = app.compose_shell();
    assert_eq!(shell.layout, LayoutClass::Mobile);
    assert_eq!(shell.chrome, ShellChrome::Mobile { selected: 1 });

    ctrl(&mut app, 'o');
    assert_eq!(app.active_route(), Route::Screen(ScreenId::Login));
    assert_eq!(app.session.get(keys::USER_EMAIL), None);
    assert!(matches!(app.screen, Screen::Login(_)));
}

#[test]
fn test_empty_login_is_rejected() {
    let mut app = App::new(test_config());
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.active_route(), Route::Screen(ScreenId::Login));
    assert!(app.toast.is_some());
    match &app.screen {
        Screen::Login(form) => assert!(form.error.is_some()),
        other => panic!("expected login screen, got {:?}", other),
    }
}

#[test]
fn test_global_navigation_is_disabled_on_login() {
    let mut app = App::new(test_config());
    press(&mut app, KeyCode::F(2));
    assert_eq!(app.active_route(), Route::Screen(ScreenId::Login));
}

#[test]
fn test_function_keys_follow_nav_order() {
    let mut app = signed_in_app();
    let expected = [
        ScreenId::Chat,
        ScreenId::Dashboard,
        ScreenId::Inventory,
        ScreenId::Alerts,
        ScreenId::Analytics,
        ScreenId::Settings,
    ];
    for (index, id) in expected.iter().enumerate() {
        press(&mut app, KeyCode::F(index as u8 + 1));
        assert_eq!(app.active_route(), Route::Screen(*id));
        assert_eq!(app.screen.id(), Some(*id));
    }
}

#[test]
fn test_alerts_highlights_fourth_item_in_both_layouts() {
    let mut app = signed_in_app();
    press(&mut app, KeyCode::F(4));

    app.width_override = Some(400);
    assert_eq!(app.compose_shell().selected_nav(), Some(3));
    app.width_override = Some(1600);
    assert_eq!(app.compose_shell().selected_nav(), Some(3));
}

#[test]
fn test_unknown_route_falls_back_without_error() {
    let mut app = signed_in_app();
    let transition = app.navigate(Route::parse("reports"));

    assert!(transition.factory.is_fallback());
    assert!(matches!(app.screen, Screen::NotFound { .. }));
    assert_eq!(app.active_route(), Route::parse("reports"));

    // Shell navigation still works from the fallback screen
    press(&mut app, KeyCode::F(3));
    assert_eq!(app.active_route(), Route::Screen(ScreenId::Inventory));
}

#[test]
fn test_click_navigation_matches_key_navigation() {
    let mut app = signed_in_app();
    app.handle_click(ClickAction::Navigate(ScreenId::Settings));
    assert!(matches!(app.screen, Screen::Settings(_)));

    app.handle_click(ClickAction::Logout);
    assert_eq!(app.active_route(), Route::Screen(ScreenId::Login));
}

#[test]
fn test_screen_state_is_rebuilt_on_revisit() {
    let mut app = signed_in_app();
    press(&mut app, KeyCode::F(3));
    type_text(&mut app, "lamp");
    match &app.screen {
        Screen::Inventory(inventory) => assert_eq!(inventory.visible().len(), 1),
        other => panic!("expected inventory, got {:?}", other),
    }

    press(&mut app, KeyCode::F(2));
    press(&mut app, KeyCode::F(3));
    match &app.screen {
        Screen::Inventory(inventory) => {
            assert_eq!(inventory.search_text(), "");
            assert_eq!(inventory.visible().len(), 8);
        }
        other => panic!("expected inventory, got {:?}", other),
    }
}
