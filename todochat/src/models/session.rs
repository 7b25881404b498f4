//! Session model for the signed-in user.

use serde::{Deserialize, Serialize};

/// The authenticated identity and bearer token held for a signed-in user.
///
/// No expiry is tracked locally; a stale token is discovered when the
/// backend rejects a request with 401.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Backend user id.
    pub user_id: String,
    /// Email the account was registered with.
    pub email: String,
    /// Bearer token attached to authenticated requests.
    pub token: String,
}

impl Session {
    /// Create a new session.
    pub fn new(
        user_id: impl Into<String>,
        email: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            token: token.into(),
        }
    }
}
