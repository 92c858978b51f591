//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let mut app = signed_in_app();
//! press(&mut app, KeyCode::F(3));
//! let text = render_to_string(&mut app, 120, 40);
//! ```

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use vyapaar::app::App;
use vyapaar::startup::AppConfig;
use vyapaar::ui;

pub const TEST_EMAIL: &str = "owner@sharmatraders.in";
pub const TEST_PASSWORD: &str = "hunter2";

/// Config with a short reply delay so async tests stay fast.
pub fn test_config() -> AppConfig {
    AppConfig::default().with_reply_delay_ms(10)
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn ctrl(app: &mut App, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Fill the login form and submit it.
pub fn sign_in(app: &mut App) {
    type_text(app, TEST_EMAIL);
    press(app, KeyCode::Tab);
    type_text(app, TEST_PASSWORD);
    press(app, KeyCode::Enter);
}

/// A fresh app past the login screen.
pub fn signed_in_app() -> App {
    let mut app = App::new(test_config());
    sign_in(&mut app);
    app
}

/// Render one frame at `width` x `height` and return the buffer as text.
///
/// The app's terminal size is updated first so the layout class matches
/// the backend.
pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    app.update_terminal_dimensions(width, height);
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
