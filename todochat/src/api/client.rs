//! Client for the authenticated chat endpoints.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::models::{Message, MessageRole};

use super::error::{server_message, ApiError};

/// Default timeout for chat completion requests.
const CHAT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default timeout for history fetches.
const HISTORY_TIMEOUT: Duration = Duration::from_secs(10);
/// Default number of messages returned by a history fetch.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Reply to a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    /// Assistant response text.
    pub message: String,
    /// Conversation the exchange belongs to.
    pub conversation_id: String,
}

/// A message as returned by the history endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<HistoryMessage> for Message {
    fn from(msg: HistoryMessage) -> Self {
        Self {
            id: msg.id,
            role: msg.role,
            content: msg.content,
        }
    }
}

/// Stored conversation history for a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConversationHistory {
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub messages: Vec<HistoryMessage>,
}

/// Backend liveness report.
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
}

/// Chat operations needed by the chat view.
///
/// The view is written against this trait so tests can drive it with a
/// scripted fake instead of a live backend.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Send a chat message on behalf of a user.
    async fn send_chat_message(
        &self,
        user_id: &str,
        message: &str,
        token: &str,
    ) -> Result<ChatReply, ApiError>;

    /// Fetch up to `limit` messages of conversation history.
    async fn conversation_history(
        &self,
        user_id: &str,
        token: &str,
        limit: usize,
    ) -> Result<ConversationHistory, ApiError>;
}

/// HTTP client for the chat endpoints.
///
/// Every request carries its own timeout; reqwest disarms the timer on all
/// exit paths, so a settled request never leaves a cancellation pending.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    chat_timeout: Duration,
    history_timeout: Duration,
}

impl ApiClient {
    /// Create a client with the default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeouts(base_url, CHAT_TIMEOUT, HISTORY_TIMEOUT)
    }

    /// Create a client with explicit timeouts.
    pub fn with_timeouts(
        base_url: impl Into<String>,
        chat_timeout: Duration,
        history_timeout: Duration,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            chat_timeout,
            history_timeout,
        }
    }

    /// Probe backend liveness. Unauthenticated.
    pub async fn check_health(&self) -> Result<Health, ApiError> {
        let url = format!("{}/health", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(classify_transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::health_check(status.as_u16()));
        }
        resp.json().await.map_err(classify_transport)
    }
}

#[async_trait]
impl ChatApi for ApiClient {
    async fn send_chat_message(
        &self,
        user_id: &str,
        message: &str,
        token: &str,
    ) -> Result<ChatReply, ApiError> {
        let url = format!("{}/api/{user_id}/chat", self.base_url);
        let resp = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&serde_json::json!({ "message": message }))
            .timeout(self.chat_timeout)
            .send()
            .await
            .map_err(classify_transport)?;
        decode(resp).await
    }

    async fn conversation_history(
        &self,
        user_id: &str,
        token: &str,
        limit: usize,
    ) -> Result<ConversationHistory, ApiError> {
        let url = format!("{}/api/{user_id}/conversations", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("limit", limit)])
            .bearer_auth(token)
            .timeout(self.history_timeout)
            .send()
            .await
            .map_err(classify_transport)?;
        decode(resp).await
    }
}

/// Map a failed response to a typed error, or decode a successful one.
async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(
            status.as_u16(),
            server_message(&body),
        ));
    }
    resp.json().await.map_err(classify_transport)
}

/// Classify a transport-level failure. A fired timeout is reported
/// distinctly from never reaching the server.
fn classify_transport(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::timeout()
    } else {
        tracing::debug!("transport failure: {err}");
        ApiError::network()
    }
}
