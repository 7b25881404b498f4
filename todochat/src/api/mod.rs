//! HTTP client for the AI Todo Assistant chat endpoints.

mod client;
mod error;

pub use client::{
    ApiClient, ChatApi, ChatReply, ConversationHistory, Health, HistoryMessage,
    DEFAULT_HISTORY_LIMIT,
};
pub use error::{ApiError, ErrorCode};
