//! Input, click and message handling for the App.

use crossterm::event::KeyEvent;

use super::{App, AppMessage, ScreenId, ToastKind};
use crate::input::{Command, InputContext};
use crate::screens::login::{self, LoginOutcome, LoginState};
use crate::screens::Screen;
use crate::state::keys;
use crate::ui::interaction::ClickAction;
use crate::ui::nav::{cycle_target, nav_target};

impl App {
    /// Handle an incoming async message.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::AssistantReply { chat_session } => {
                let delivered = match &mut self.screen {
                    Screen::Chat(chat) => chat.receive_reply(chat_session),
                    _ => false,
                };
                if delivered {
                    self.mark_dirty();
                } else {
                    tracing::debug!("Dropped reply for stale chat session {:?}", chat_session);
                }
            }
        }
    }

    /// Context the command registry needs for the current state.
    pub fn input_context(&self) -> InputContext {
        InputContext::new(
            self.screen.id(),
            self.dialog.is_some(),
            self.screen.accepts_text(),
        )
    }

    /// Translate and execute a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let context = self.input_context();
        if let Some(cmd) = self.commands.dispatch(key, &context) {
            self.execute_command(cmd);
        }
    }

    /// Handle a click on a registered hit area.
    pub fn handle_click(&mut self, action: ClickAction) {
        tracing::debug!("Click: {:?}", action);
        match action {
            ClickAction::Navigate(target) => {
                self.navigate(target);
            }
            ClickAction::Logout => {
                self.navigate(ScreenId::Login);
            }
            ClickAction::SelectRow(index) => {
                match &mut self.screen {
                    Screen::Inventory(inventory) => inventory.select(index),
                    Screen::Alerts(alerts) => alerts.select(index),
                    Screen::Settings(settings) => settings.select(index),
                    _ => {}
                }
                self.mark_dirty();
            }
            ClickAction::CloseDialog => self.close_dialog(),
        }
    }

    /// Execute one command against the active screen.
    pub fn execute_command(&mut self, cmd: Command) {
        if cmd.needs_redraw() {
            self.mark_dirty();
        }

        match cmd {
            Command::Quit => self.quit(),
            Command::Logout => {
                self.navigate(ScreenId::Login);
            }
            Command::NavigateTo(index) => {
                if let Some(target) = nav_target(index) {
                    self.navigate(target);
                }
            }
            Command::NextNav | Command::PrevNav => {
                let target = cycle_target(&self.active_route(), cmd == Command::NextNav);
                self.navigate(target);
            }
            Command::CloseDialog => self.close_dialog(),
            Command::InsertChar(c) => self.insert_char(c),
            Command::Backspace => self.backspace(),
            Command::Confirm => self.confirm(),
            Command::MoveUp => self.move_selection(false),
            Command::MoveDown => self.move_selection(true),
            Command::MoveLeft | Command::MoveRight => {
                if let Screen::Analytics(analytics) = &mut self.screen {
                    let message = if cmd == Command::MoveRight {
                        analytics.next_range()
                    } else {
                        analytics.prev_range()
                    };
                    self.show_toast(message, ToastKind::Info);
                }
            }
            Command::DeleteSelected => match &mut self.screen {
                Screen::Inventory(inventory) => {
                    inventory.remove_selected();
                }
                Screen::Alerts(alerts) => {
                    alerts.dismiss_selected();
                }
                _ => {}
            },
            Command::ToggleLoginField => {
                if let Screen::Login(form) = &mut self.screen {
                    form.toggle_focus();
                }
            }
            Command::ToggleRememberMe => {
                if let Screen::Login(form) = &mut self.screen {
                    form.toggle_remember_me();
                }
            }
            Command::ForgotPassword => self.show_toast(login::FORGOT_PASSWORD_TOAST, ToastKind::Info),
            Command::GoogleSignIn => {
                self.show_toast(LoginState::social_login_message("google"), ToastKind::Info)
            }
            Command::CycleStatusFilter => {
                if let Screen::Inventory(inventory) = &mut self.screen {
                    let value = inventory.cycle_status_filter();
                    tracing::debug!("Inventory status filter: {}", value);
                }
            }
            Command::CycleCategoryFilter => {
                if let Screen::Inventory(inventory) = &mut self.screen {
                    let value = inventory.cycle_category_filter();
                    tracing::debug!("Inventory category filter: {}", value);
                }
            }
            Command::OpenAddDialog => {
                if let Screen::Inventory(inventory) = &self.screen {
                    let dialog = inventory.add_dialog();
                    self.open_dialog(dialog);
                }
            }
            Command::CycleSeverityFilter => {
                if let Screen::Alerts(alerts) = &mut self.screen {
                    let value = alerts.cycle_severity_filter();
                    tracing::debug!("Alerts severity filter: {}", value);
                }
            }
            Command::CycleTypeFilter => {
                if let Screen::Alerts(alerts) = &mut self.screen {
                    let value = alerts.cycle_type_filter();
                    tracing::debug!("Alerts type filter: {}", value);
                }
            }
            Command::AcknowledgeAll => {
                if let Screen::Alerts(alerts) = &mut self.screen {
                    let count = alerts.acknowledge_all();
                    tracing::info!("Acknowledged {} alerts", count);
                }
            }
            Command::ClearResolved => {
                if let Screen::Alerts(alerts) = &mut self.screen {
                    let count = alerts.clear_resolved();
                    tracing::info!("Cleared {} resolved alerts", count);
                }
            }
            Command::TakeAction => {
                let message = match &self.screen {
                    Screen::Alerts(alerts) => alerts.selected_id().and_then(|id| alerts.take_action(id)),
                    _ => None,
                };
                if let Some(message) = message {
                    self.show_toast(message, ToastKind::Info);
                }
            }
            Command::Noop => {}
        }
    }

    fn insert_char(&mut self, c: char) {
        match &mut self.screen {
            Screen::Login(form) => form.push_char(c),
            Screen::Chat(chat) => chat.push_input_char(c),
            Screen::Inventory(inventory) => inventory.push_search_char(c),
            Screen::Alerts(alerts) => alerts.push_search_char(c),
            _ => {}
        }
    }

    fn backspace(&mut self) {
        match &mut self.screen {
            Screen::Login(form) => form.pop_char(),
            Screen::Chat(chat) => chat.pop_input_char(),
            Screen::Inventory(inventory) => inventory.pop_search_char(),
            Screen::Alerts(alerts) => alerts.pop_search_char(),
            _ => {}
        }
    }

    fn move_selection(&mut self, down: bool) {
        match &mut self.screen {
            Screen::Inventory(inventory) if down => inventory.select_next(),
            Screen::Inventory(inventory) => inventory.select_prev(),
            Screen::Alerts(alerts) if down => alerts.select_next(),
            Screen::Alerts(alerts) => alerts.select_prev(),
            Screen::Settings(settings) if down => settings.select_next(),
            Screen::Settings(settings) => settings.select_prev(),
            _ => {}
        }
    }

    /// Enter on the active screen.
    fn confirm(&mut self) {
        match &mut self.screen {
            Screen::Login(form) => match form.submit() {
                LoginOutcome::SignedIn { email } => {
                    tracing::info!("Signed in as {}", email);
                    self.session.set(keys::USER_EMAIL, email);
                    self.navigate(ScreenId::Dashboard);
                }
                LoginOutcome::Rejected => {
                    self.show_toast(login::MISSING_FIELDS_TOAST, ToastKind::Error);
                }
            },
            Screen::Chat(chat) => {
                if chat.send() {
                    let session = chat.session();
                    self.replies.schedule(session, self.message_tx.clone());
                }
            }
            Screen::Inventory(inventory) => {
                if let Some(dialog) = inventory.selected_id().and_then(|id| inventory.edit_dialog(id)) {
                    self.open_dialog(dialog);
                }
            }
            Screen::Alerts(alerts) => {
                if let Some(dialog) = alerts.selected_id().and_then(|id| alerts.details_dialog(id)) {
                    self.open_dialog(dialog);
                }
            }
            Screen::Settings(settings) => {
                if let Some(message) = settings.activate() {
                    self.show_toast(message, ToastKind::Info);
                }
            }
            _ => {}
        }
    }
}
