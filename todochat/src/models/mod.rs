//! Data models for todochat entities.

mod message;
mod session;

pub use message::{Message, MessageRole};
pub use session::Session;
