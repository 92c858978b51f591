//! Input context for determining which commands are available.

use crate::app::ScreenId;

/// The parts of application state that change how keys are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputContext {
    /// Active screen, `None` on the "not found" page
    pub screen: Option<ScreenId>,
    /// A modal dialog is open
    pub dialog_open: bool,
    /// Printable characters are routed into a text buffer
    pub accepts_text: bool,
}

impl InputContext {
    pub fn new(screen: Option<ScreenId>, dialog_open: bool, accepts_text: bool) -> Self {
        Self {
            screen,
            dialog_open,
            accepts_text,
        }
    }

    pub fn is_login(&self) -> bool {
        self.screen == Some(ScreenId::Login)
    }
}
