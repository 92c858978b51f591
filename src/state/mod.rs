//! Application state management
//!
//! - [`SessionStore`]: process-wide session values (active route, user email)

pub mod session;

pub use session::{keys, SessionStore};
