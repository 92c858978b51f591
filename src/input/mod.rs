//! Input handling module.
//!
//! Every key event goes through the same pipeline:
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> App::execute_command()
//! ```
//!
//! - [`command`] - The [`Command`] enum with all user actions
//! - [`context`] - [`InputContext`], the state that changes key meaning
//! - [`keybindings`] - Default key tables
//! - [`registry`] - [`CommandRegistry`], mapping keys to commands

pub mod command;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::InputContext;
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;
