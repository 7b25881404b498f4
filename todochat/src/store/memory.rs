//! In-memory session store for tests.

use anyhow::Result;

use crate::models::Session;

use super::SessionStore;

/// Session store that keeps the session in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    session: Option<Session>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: Some(session),
        }
    }
}

impl SessionStore for MemoryStore {
    fn session(&self) -> Option<Session> {
        self.session.clone()
    }

    fn set_session(&mut self, session: &Session) -> Result<()> {
        self.session = Some(session.clone());
        Ok(())
    }

    fn clear_session(&mut self) -> Result<()> {
        self.session = None;
        Ok(())
    }
}
