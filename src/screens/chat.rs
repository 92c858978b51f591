//! Chat assistant screen state.
//!
//! Replies are simulated: [`ChatState::send`] records the user message and
//! reports that a reply is owed. The app schedules the reply and hands it back
//! through [`ChatState::receive_reply`].

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

/// First message shown in a new conversation
pub const GREETING: &str = "Hello! I'm your AI inventory assistant. I can help you check stock \
levels, analyze trends, manage alerts, and answer questions about your inventory. How can I \
help you today?";

/// Text of every simulated reply
pub const DEMO_REPLY: &str = "This is a demo reply. Soon this will connect to your inventory AI \
backend to fetch real-time stock, sales and forecast insights.";

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

/// Identifies one chat screen instance. Replies addressed to an older
/// instance are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatSessionId(u64);

impl ChatSessionId {
    fn next() -> Self {
        Self(NEXT_SESSION.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: Author,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(author: Author, text: impl Into<String>) -> Self {
        Self {
            author,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }
}

#[derive(Debug, Clone)]
pub struct ChatState {
    session: ChatSessionId,
    pub messages: Vec<ChatMessage>,
    /// Text being composed
    pub input: String,
    pending_replies: usize,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    /// New conversation containing only the greeting.
    pub fn new() -> Self {
        Self {
            session: ChatSessionId::next(),
            messages: vec![ChatMessage::new(Author::Assistant, GREETING)],
            input: String::new(),
            pending_replies: 0,
        }
    }

    pub fn session(&self) -> ChatSessionId {
        self.session
    }

    /// Whether the "thinking" indicator is shown.
    pub fn is_typing(&self) -> bool {
        self.pending_replies > 0
    }

    pub fn pending_replies(&self) -> usize {
        self.pending_replies
    }

    pub fn push_input_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_input_char(&mut self) {
        self.input.pop();
    }

    /// Send the composed message.
    ///
    /// Returns `false` (and changes nothing) when the trimmed input is empty.
    /// On success the input is cleared and one reply becomes pending.
    pub fn send(&mut self) -> bool {
        let text = self.input.trim();
        if text.is_empty() {
            return false;
        }

        self.messages.push(ChatMessage::new(Author::User, text));
        self.input.clear();
        self.pending_replies += 1;
        true
    }

    /// Append the simulated reply if it belongs to this conversation.
    ///
    /// Returns `false` for replies addressed to another session.
    pub fn receive_reply(&mut self, session: ChatSessionId) -> bool {
        if session != self.session {
            return false;
        }

        self.messages.push(ChatMessage::new(Author::Assistant, DEMO_REPLY));
        self.pending_replies = self.pending_replies.saturating_sub(1);
        true
    }
}
