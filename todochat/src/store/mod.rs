//! Session persistence.
//!
//! Storage is an injected abstraction rather than ambient global state, so
//! commands and tests can run against an in-memory store instead of the
//! real file.

mod file;
#[cfg(test)]
mod memory;

pub use file::FileStore;
#[cfg(test)]
pub use memory::MemoryStore;

use anyhow::Result;

use crate::models::Session;

/// Storage for the signed-in session.
///
/// The three logical fields (token, user id, email) live in one record and
/// are written or cleared together, so a visible session is always
/// complete. No token validation or expiry checking happens here.
pub trait SessionStore {
    /// The current session, if one is stored.
    fn session(&self) -> Option<Session>;

    /// Replace the stored session.
    fn set_session(&mut self, session: &Session) -> Result<()>;

    /// Remove the stored session.
    fn clear_session(&mut self) -> Result<()>;

    /// Bearer token of the stored session.
    fn token(&self) -> Option<String> {
        self.session().map(|s| s.token)
    }

    /// User id of the stored session.
    fn user_id(&self) -> Option<String> {
        self.session().map(|s| s.user_id)
    }

    /// Email of the stored session.
    fn email(&self) -> Option<String> {
        self.session().map(|s| s.email)
    }

    /// Whether a token is present.
    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
