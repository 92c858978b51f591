//! AppMessage enum for async communication within the application.

use crate::screens::chat::ChatSessionId;

/// Messages delivered to the event loop from background tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// A simulated assistant reply is ready for the given conversation
    AssistantReply { chat_session: ChatSessionId },
}
