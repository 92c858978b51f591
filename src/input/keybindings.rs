//! Default keybindings for the application.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use crate::app::ScreenId;

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}

/// Key tables: global (outside login) and per screen.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    pub global: HashMap<KeyCombo, Command>,
    pub screen: HashMap<ScreenId, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            screen: HashMap::new(),
        };
        config.setup_global_bindings();
        config.setup_screen_bindings();
        config
    }

    fn setup_global_bindings(&mut self) {
        for index in 0..6u8 {
            self.global.insert(
                KeyCombo::plain(KeyCode::F(index + 1)),
                Command::NavigateTo(index as usize),
            );
        }
        self.global.insert(KeyCombo::plain(KeyCode::Tab), Command::NextNav);
        self.global.insert(KeyCombo::plain(KeyCode::BackTab), Command::PrevNav);
        self.global.insert(KeyCombo::ctrl('o'), Command::Logout);
    }

    fn setup_screen_bindings(&mut self) {
        self.bind(
            ScreenId::Login,
            &[
                (KeyCombo::plain(KeyCode::Tab), Command::ToggleLoginField),
                (KeyCombo::plain(KeyCode::BackTab), Command::ToggleLoginField),
                (KeyCombo::plain(KeyCode::Enter), Command::Confirm),
                (KeyCombo::ctrl('r'), Command::ToggleRememberMe),
                (KeyCombo::ctrl('f'), Command::ForgotPassword),
                (KeyCombo::ctrl('g'), Command::GoogleSignIn),
            ],
        );

        self.bind(
            ScreenId::Chat,
            &[(KeyCombo::plain(KeyCode::Enter), Command::Confirm)],
        );

        self.bind(
            ScreenId::Inventory,
            &[
                (KeyCombo::plain(KeyCode::Up), Command::MoveUp),
                (KeyCombo::plain(KeyCode::Down), Command::MoveDown),
                (KeyCombo::plain(KeyCode::Delete), Command::DeleteSelected),
                (KeyCombo::plain(KeyCode::Enter), Command::Confirm),
                (KeyCombo::ctrl('s'), Command::CycleStatusFilter),
                (KeyCombo::ctrl('k'), Command::CycleCategoryFilter),
                (KeyCombo::ctrl('a'), Command::OpenAddDialog),
            ],
        );

        self.bind(
            ScreenId::Alerts,
            &[
                (KeyCombo::plain(KeyCode::Up), Command::MoveUp),
                (KeyCombo::plain(KeyCode::Down), Command::MoveDown),
                (KeyCombo::plain(KeyCode::Delete), Command::DeleteSelected),
                (KeyCombo::plain(KeyCode::Enter), Command::Confirm),
                (KeyCombo::ctrl('s'), Command::CycleSeverityFilter),
                (KeyCombo::ctrl('t'), Command::CycleTypeFilter),
                (KeyCombo::ctrl('a'), Command::AcknowledgeAll),
                (KeyCombo::ctrl('r'), Command::ClearResolved),
                (KeyCombo::ctrl('x'), Command::TakeAction),
            ],
        );

        self.bind(
            ScreenId::Analytics,
            &[
                (KeyCombo::plain(KeyCode::Left), Command::MoveLeft),
                (KeyCombo::plain(KeyCode::Right), Command::MoveRight),
            ],
        );

        self.bind(
            ScreenId::Settings,
            &[
                (KeyCombo::plain(KeyCode::Up), Command::MoveUp),
                (KeyCombo::plain(KeyCode::Down), Command::MoveDown),
                (KeyCombo::plain(KeyCode::Enter), Command::Confirm),
            ],
        );
    }

    fn bind(&mut self, screen: ScreenId, bindings: &[(KeyCombo, Command)]) {
        self.screen
            .entry(screen)
            .or_default()
            .extend(bindings.iter().copied());
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<Command> {
        self.global.get(combo).copied()
    }

    pub fn get_screen(&self, screen: ScreenId, combo: &KeyCombo) -> Option<Command> {
        self.screen.get(&screen)?.get(combo).copied()
    }
}
