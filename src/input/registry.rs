//! Command registry for dispatching keyboard input to commands.
//!
//! Priority, highest first:
//! 1. Ctrl+C always quits
//! 2. An open dialog captures every key
//! 3. Screen bindings
//! 4. Global navigation bindings (not on the login screen)
//! 5. Character input on screens with a text buffer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};

#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Translate a key event. `None` means the key is ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        if context.dialog_open {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => Some(Command::CloseDialog),
                _ => Some(Command::Noop),
            };
        }

        let combo = normalize(key);

        if let Some(screen) = context.screen {
            if let Some(cmd) = self.config.get_screen(screen, &combo) {
                return Some(cmd);
            }
        }

        if !context.is_login() {
            if let Some(cmd) = self.config.get_global(&combo) {
                return Some(cmd);
            }
        }

        if context.accepts_text {
            return dispatch_text(key);
        }

        None
    }
}

/// Drop SHIFT where the key code already carries it.
fn normalize(key: KeyEvent) -> KeyCombo {
    let modifiers = match key.code {
        KeyCode::BackTab | KeyCode::Char(_) => key.modifiers - KeyModifiers::SHIFT,
        _ => key.modifiers,
    };
    KeyCombo::new(key.code, modifiers)
}

fn dispatch_text(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
        {
            Some(Command::InsertChar(c))
        }
        KeyCode::Backspace => Some(Command::Backspace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ScreenId;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn on(screen: ScreenId, accepts_text: bool) -> InputContext {
        InputContext::new(Some(screen), false, accepts_text)
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let registry = CommandRegistry::new();
        let dialog = InputContext::new(Some(ScreenId::Inventory), true, true);
        assert_eq!(registry.dispatch(ctrl('c'), &dialog), Some(Command::Quit));
    }

    #[test]
    fn test_dialog_captures_keys() {
        let registry = CommandRegistry::new();
        let dialog = InputContext::new(Some(ScreenId::Inventory), true, true);
        assert_eq!(
            registry.dispatch(key(KeyCode::Esc), &dialog),
            Some(Command::CloseDialog)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('x')), &dialog),
            Some(Command::Noop)
        );
    }

    #[test]
    fn test_function_keys_navigate() {
        let registry = CommandRegistry::new();
        let ctx = on(ScreenId::Dashboard, false);
        assert_eq!(
            registry.dispatch(key(KeyCode::F(1)), &ctx),
            Some(Command::NavigateTo(0))
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::F(6)), &ctx),
            Some(Command::NavigateTo(5))
        );
        assert_eq!(registry.dispatch(key(KeyCode::F(7)), &ctx), None);
    }

    #[test]
    fn test_tab_on_login_toggles_field() {
        let registry = CommandRegistry::new();
        let ctx = on(ScreenId::Login, true);
        assert_eq!(
            registry.dispatch(key(KeyCode::Tab), &ctx),
            Some(Command::ToggleLoginField)
        );
        // Global navigation is off on the login screen
        assert_eq!(registry.dispatch(key(KeyCode::F(2)), &ctx), None);
        assert_eq!(registry.dispatch(ctrl('o'), &ctx), None);
    }

    #[test]
    fn test_backtab_with_shift_cycles_back() {
        let registry = CommandRegistry::new();
        let ctx = on(ScreenId::Alerts, true);
        let back = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(registry.dispatch(back, &ctx), Some(Command::PrevNav));
    }

    #[test]
    fn test_ctrl_bindings_are_screen_specific() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.dispatch(ctrl('a'), &on(ScreenId::Inventory, true)),
            Some(Command::OpenAddDialog)
        );
        assert_eq!(
            registry.dispatch(ctrl('a'), &on(ScreenId::Alerts, true)),
            Some(Command::AcknowledgeAll)
        );
        assert_eq!(
            registry.dispatch(ctrl('r'), &on(ScreenId::Login, true)),
            Some(Command::ToggleRememberMe)
        );
        assert_eq!(registry.dispatch(ctrl('a'), &on(ScreenId::Chat, true)), None);
    }

    #[test]
    fn test_text_input() {
        let registry = CommandRegistry::new();
        let ctx = on(ScreenId::Chat, true);
        let upper = KeyEvent::new(KeyCode::Char('H'), KeyModifiers::SHIFT);
        assert_eq!(registry.dispatch(upper, &ctx), Some(Command::InsertChar('H')));
        assert_eq!(
            registry.dispatch(key(KeyCode::Backspace), &ctx),
            Some(Command::Backspace)
        );

        let settings = on(ScreenId::Settings, false);
        assert_eq!(registry.dispatch(key(KeyCode::Char('h')), &settings), None);
    }

    #[test]
    fn test_not_found_page_keeps_global_nav() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new(None, false, false);
        assert_eq!(registry.dispatch(key(KeyCode::Tab), &ctx), Some(Command::NextNav));
    }
}
