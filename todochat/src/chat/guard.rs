//! Authentication guard for protected views.

use crate::models::Session;
use crate::store::SessionStore;

/// Authentication state of a protected view.
///
/// A view starts out `Checking` and renders nothing until the store has
/// been consulted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    /// The store has not been consulted yet.
    #[default]
    Checking,
    /// A session is present; the protected view may render.
    Authenticated(Session),
    /// No session; the caller sends the user to sign-in.
    Unauthenticated,
}

impl AuthState {
    /// Resolve the state from the store.
    pub fn check(store: &dyn SessionStore) -> Self {
        match store.session() {
            Some(session) => Self::Authenticated(session),
            None => Self::Unauthenticated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn initial_state_renders_nothing() {
        assert_eq!(AuthState::default(), AuthState::Checking);
    }

    #[test]
    fn missing_token_sends_the_user_to_sign_in() {
        let store = MemoryStore::new();
        assert_eq!(AuthState::check(&store), AuthState::Unauthenticated);
    }

    #[test]
    fn present_token_renders_the_view() {
        let session = Session::new("u-1", "kim@example.com", "tok-1");
        let store = MemoryStore::with_session(session.clone());
        assert_eq!(AuthState::check(&store), AuthState::Authenticated(session));
    }
}
