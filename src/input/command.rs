//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects: keys are
//! translated into commands by the registry, and the app executes commands.

/// Every user action reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (Ctrl+C)
    Quit,
    /// Navigate to login, clearing the signed-in user (Ctrl+O)
    Logout,
    /// Jump to the nav entry at this index (F1..F6)
    NavigateTo(usize),
    /// Next nav entry (Tab)
    NextNav,
    /// Previous nav entry (Shift+Tab)
    PrevNav,
    /// Close the open dialog (Esc, Enter)
    CloseDialog,

    // =========================================================================
    // Editing
    // =========================================================================
    InsertChar(char),
    Backspace,
    /// Enter on the active screen
    Confirm,

    // =========================================================================
    // Lists
    // =========================================================================
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Delete (inventory) or dismiss (alerts) the selected row
    DeleteSelected,

    // =========================================================================
    // Login
    // =========================================================================
    ToggleLoginField,
    ToggleRememberMe,
    ForgotPassword,
    GoogleSignIn,

    // =========================================================================
    // Inventory
    // =========================================================================
    CycleStatusFilter,
    CycleCategoryFilter,
    OpenAddDialog,

    // =========================================================================
    // Alerts
    // =========================================================================
    CycleSeverityFilter,
    CycleTypeFilter,
    AcknowledgeAll,
    ClearResolved,
    TakeAction,

    /// Swallow the key without doing anything
    Noop,
}

impl Command {
    /// Whether executing this command can change what is drawn.
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Command::Noop)
    }
}
