//! Delayed assistant replies for the chat screen.
//!
//! Each send spawns one tokio task that sleeps for the configured delay and
//! then posts [`AppMessage::AssistantReply`] to the app channel. Tasks are
//! aborted when the chat screen is torn down.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::AppMessage;
use crate::screens::chat::ChatSessionId;

#[derive(Debug)]
pub struct ReplyScheduler {
    delay: Duration,
    tasks: Vec<JoinHandle<()>>,
}

impl ReplyScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            tasks: Vec::new(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule one reply for `session`.
    ///
    /// Outside a tokio runtime the reply is posted immediately.
    pub fn schedule(&mut self, session: ChatSessionId, tx: mpsc::UnboundedSender<AppMessage>) {
        self.tasks.retain(|task| !task.is_finished());

        let message = AppMessage::AssistantReply {
            chat_session: session,
        };

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("No async runtime; delivering assistant reply without delay");
            let _ = tx.send(message);
            return;
        };

        let delay = self.delay;
        self.tasks.push(handle.spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the app is shutting down
            let _ = tx.send(message);
        }));
        tracing::debug!("Scheduled assistant reply for chat session {:?}", session);
    }

    /// Replies still waiting on their delay.
    pub fn pending(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_finished()).count()
    }

    /// Abort every pending reply. Returns how many were still running.
    pub fn cancel_all(&mut self) -> usize {
        let pending = self.pending();
        for task in self.tasks.drain(..) {
            task.abort();
        }
        if pending > 0 {
            tracing::debug!("Cancelled {} pending assistant replies", pending);
        }
        pending
    }
}

impl Drop for ReplyScheduler {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}
