//! Chat view state: the message list and the send lifecycle.

use std::sync::Arc;

use crate::api::{ChatApi, DEFAULT_HISTORY_LIMIT};
use crate::models::{Message, Session};

/// Fixed assistant reply appended when a send fails.
pub const APOLOGY: &str = "Sorry, something went wrong. Please try again.";

/// Outcome of submitting input to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Message sent; an assistant reply was appended.
    Sent,
    /// Input was empty after trimming, or a send was already in flight.
    Rejected,
    /// The send failed; the apology reply and error banner are set.
    Failed,
}

/// State for one chat session.
///
/// Each send runs idle -> sending -> success/failure -> idle. The user
/// message is appended optimistically before the request goes out and is
/// never rolled back; a failed send appends the apology reply instead.
pub struct ChatView {
    api: Arc<dyn ChatApi>,
    session: Session,
    messages: Vec<Message>,
    sending: bool,
    loading: bool,
    error: Option<String>,
}

impl ChatView {
    pub fn new(api: Arc<dyn ChatApi>, session: Session) -> Self {
        Self {
            api,
            session,
            messages: Vec::new(),
            sending: false,
            loading: false,
            error: None,
        }
    }

    /// Messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Current error banner, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a send is in flight.
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Whether the initial history fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Restore conversation history from the backend.
    ///
    /// Failures are swallowed: an empty chat is a normal first-run state
    /// and the view stays usable either way. The loading flag clears on
    /// every path.
    pub async fn load_history(&mut self) {
        self.loading = true;
        match self
            .api
            .conversation_history(
                &self.session.user_id,
                &self.session.token,
                DEFAULT_HISTORY_LIMIT,
            )
            .await
        {
            Ok(history) => {
                if !history.messages.is_empty() {
                    self.messages = history.messages.into_iter().map(Message::from).collect();
                }
            }
            Err(err) => {
                tracing::warn!("failed to load history: {err}");
            }
        }
        self.loading = false;
    }

    /// Submit user input.
    ///
    /// Empty input and overlapping sends are rejected without touching the
    /// message list. The sending flag clears on both remaining paths.
    pub async fn submit(&mut self, input: &str) -> SendOutcome {
        let trimmed = input.trim();
        if trimmed.is_empty() || self.sending {
            return SendOutcome::Rejected;
        }

        self.messages.push(Message::user(trimmed));
        self.sending = true;
        self.error = None;

        let result = self
            .api
            .send_chat_message(&self.session.user_id, trimmed, &self.session.token)
            .await;
        self.sending = false;

        match result {
            Ok(reply) => {
                tracing::debug!(conversation = %reply.conversation_id, "assistant replied");
                self.messages.push(Message::assistant(reply.message));
                SendOutcome::Sent
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.messages.push(Message::assistant(APOLOGY));
                SendOutcome::Failed
            }
        }
    }
}
