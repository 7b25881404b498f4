//! File-backed session store.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::models::Session;

use super::SessionStore;

/// Session store backed by a single JSON file, `~/.todochat/session.json`
/// by default.
///
/// Keeping the whole session in one document means the token, user id and
/// email are always written and cleared together.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the default location.
    pub fn default_location() -> Result<Self> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(Self::new(home.join(".todochat").join("session.json")))
    }
}

impl SessionStore for FileStore {
    fn session(&self) -> Option<Session> {
        if !self.path.exists() {
            return None;
        }
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("failed to read session file: {err}");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!("ignoring corrupt session file: {err}");
                None
            }
        }
    }

    fn set_session(&mut self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json =
            serde_json::to_string_pretty(session).context("Failed to serialize session")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    fn clear_session(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Session {
        Session::new("user-1", "kim@example.com", "tok-abc")
    }

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("session.json"));
        assert!(!store.is_authenticated());

        store.set_session(&sample()).unwrap();
        assert_eq!(store.session(), Some(sample()));
        assert_eq!(store.token().as_deref(), Some("tok-abc"));
        assert_eq!(store.user_id().as_deref(), Some("user-1"));
        assert_eq!(store.email().as_deref(), Some("kim@example.com"));
        assert!(store.is_authenticated());
    }

    #[test]
    fn clear_removes_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut store = FileStore::new(path.clone());
        store.set_session(&sample()).unwrap();

        store.clear_session().unwrap();
        assert_eq!(store.session(), None);
        assert_eq!(store.token(), None);
        assert_eq!(store.user_id(), None);
        assert_eq!(store.email(), None);
        assert!(!path.exists());
    }

    #[test]
    fn clear_without_session_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("session.json"));
        store.clear_session().unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn corrupt_file_reads_as_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        let store = FileStore::new(path);
        assert_eq!(store.session(), None);
        assert!(!store.is_authenticated());
    }
}
