//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`ScreenId`] / [`Route`] - Where the user is
//! - [`NavigationController`] - The single way to change screens
//! - [`ReplyScheduler`] - Delayed assistant replies for chat
//! - [`AppMessage`] - Messages from background tasks

mod assistant;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use assistant::ReplyScheduler;
pub use messages::AppMessage;
pub use navigation::{NavigationController, Transition};
pub use types::{Dialog, Route, ScreenId, Toast, ToastKind};

use std::time::Instant;

use tokio::sync::mpsc;

use crate::input::CommandRegistry;
use crate::screens::{Screen, ScreenRegistry};
use crate::startup::AppConfig;
use crate::state::SessionStore;
use crate::ui::interaction::HitAreaRegistry;
use crate::ui::layout::{logical_width, LayoutClass, ViewportClassifier};
use crate::ui::shell::{AdaptiveShell, RenderedShell};

/// Main application state
pub struct App {
    /// Session key/value context (active screen, signed-in user)
    pub session: SessionStore,
    pub navigator: NavigationController,
    /// State of the active screen, rebuilt on every navigation
    pub screen: Screen,
    pub shell: AdaptiveShell,
    pub toast: Option<Toast>,
    pub dialog: Option<Dialog>,
    /// Clickable regions from the last frame
    pub hit_registry: HitAreaRegistry,
    pub commands: CommandRegistry,
    pub replies: ReplyScheduler,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub config: AppConfig,
    /// Set when state changed since the last draw
    pub needs_redraw: bool,
    pub should_quit: bool,
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Forced logical width (`--width`), bypassing the terminal size
    pub width_override: Option<u32>,
    /// Frames ticked so far, drives the typing spinner
    pub tick_count: u64,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let navigator = NavigationController::new(ScreenRegistry);
        let session = SessionStore::new();
        let screen = navigator.registry().resolve(&session.active_route()).build();

        Self {
            session,
            navigator,
            screen,
            shell: AdaptiveShell::new(ViewportClassifier::new(config.breakpoint)),
            toast: None,
            dialog: None,
            hit_registry: HitAreaRegistry::new(),
            commands: CommandRegistry::new(),
            replies: ReplyScheduler::new(config.reply_delay()),
            message_tx,
            message_rx: Some(message_rx),
            config,
            needs_redraw: true,
            should_quit: false,
            terminal_width: 0,
            terminal_height: 0,
            width_override: None,
            tick_count: 0,
        }
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance one frame: expire the toast and animate the typing spinner.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.toast.as_ref().is_some_and(|t| t.is_expired(Instant::now())) {
            self.toast = None;
            self.mark_dirty();
        }

        if let Screen::Chat(chat) = &self.screen {
            if chat.is_typing() {
                self.mark_dirty();
            }
        }
    }

    // ========================================================================
    // Viewport
    // ========================================================================

    /// Record a new terminal size. The layout class is recomputed on the next
    /// frame.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        let before = self.layout_class();
        self.terminal_width = width;
        self.terminal_height = height;
        let after = self.layout_class();

        tracing::debug!("Resize to {}x{} ({} logical)", width, height, self.logical_width().unwrap_or(0));
        if before != after {
            tracing::info!("Layout changed {} -> {}", before.as_str(), after.as_str());
        }
        self.mark_dirty();
    }

    /// Viewport width in logical units, `None` when the size is unknown.
    pub fn logical_width(&self) -> Option<u32> {
        self.width_override
            .or_else(|| logical_width(self.terminal_width, self.config.cell_width))
    }

    /// Lay out as if the terminal were `columns` wide. Zero columns clears
    /// the override.
    pub fn force_width_columns(&mut self, columns: u16) {
        self.width_override = logical_width(columns, self.config.cell_width);
        self.mark_dirty();
    }

    pub fn layout_class(&self) -> LayoutClass {
        self.shell.classifier.classify(self.logical_width())
    }

    /// Shell description for the active route at the current width.
    pub fn compose_shell(&self) -> RenderedShell {
        self.shell.compose(&self.active_route(), self.logical_width())
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn active_route(&self) -> Route {
        self.session.active_route()
    }

    /// Navigate to `target`, tearing down the current screen.
    pub fn navigate(&mut self, target: impl Into<Route>) -> Transition {
        let transition = self.navigator.navigate(&mut self.session, target);

        if matches!(self.screen, Screen::Chat(_)) {
            self.replies.cancel_all();
        }
        self.screen = transition.factory.build();
        self.dialog = None;
        self.toast = None;
        self.mark_dirty();
        transition
    }

    // ========================================================================
    // Overlays
    // ========================================================================

    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        let toast = Toast::new(message, kind, self.config.toast_duration());
        tracing::debug!("Toast: {}", toast.message);
        self.toast = Some(toast);
        self.mark_dirty();
    }

    pub fn open_dialog(&mut self, dialog: Dialog) {
        self.dialog = Some(dialog);
        self.mark_dirty();
    }

    pub fn close_dialog(&mut self) {
        if self.dialog.take().is_some() {
            self.mark_dirty();
        }
    }
}
