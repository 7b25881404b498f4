//! Typed errors for backend API requests.

use serde_json::Value;

/// Classification of an API failure.
///
/// `RateLimited`, `ServerError`, `Timeout` and `NetworkError` are transient
/// (the user can resend); `Unauthorized` means the session is no longer
/// valid and the user has to sign in again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Unauthorized,
    Forbidden,
    NotFound,
    RateLimited,
    ServerError,
    Timeout,
    NetworkError,
    HealthCheckFailed,
    Unknown,
}

/// Error produced at the API boundary for a failed request.
///
/// `status` is the HTTP status that produced the error, 408 for a
/// client-side timeout, or 0 when no response was received at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    /// Map a non-2xx response to a typed error.
    ///
    /// A server-provided message overrides the default text, never the code.
    pub fn from_status(status: u16, server_message: Option<String>) -> Self {
        let (code, default) = match status {
            401 => (
                ErrorCode::Unauthorized,
                "Session expired. Please sign in again.".to_string(),
            ),
            403 => (
                ErrorCode::Forbidden,
                "You don't have permission to perform this action.".to_string(),
            ),
            404 => (
                ErrorCode::NotFound,
                "The requested resource was not found.".to_string(),
            ),
            429 => (
                ErrorCode::RateLimited,
                "Too many requests. Please try again in a moment.".to_string(),
            ),
            500 | 502 | 503 => (
                ErrorCode::ServerError,
                "The server is temporarily unavailable. Please try again later.".to_string(),
            ),
            _ => (
                ErrorCode::Unknown,
                format!("Request failed with status {status}"),
            ),
        };
        Self {
            code,
            status,
            message: server_message.unwrap_or(default),
        }
    }

    /// A request cancelled by its client-side timeout.
    pub fn timeout() -> Self {
        Self {
            code: ErrorCode::Timeout,
            status: 408,
            message: "Request timed out. Please try again.".to_string(),
        }
    }

    /// A request that received no response at all.
    pub fn network() -> Self {
        Self {
            code: ErrorCode::NetworkError,
            status: 0,
            message: "Network error. Please check your connection.".to_string(),
        }
    }

    /// A failed liveness probe.
    pub fn health_check(status: u16) -> Self {
        Self {
            code: ErrorCode::HealthCheckFailed,
            status,
            message: "Backend is unavailable".to_string(),
        }
    }
}

/// Pull a human-readable message out of an error response body.
///
/// Checks `detail`, then `error`, then `message`. Non-JSON bodies yield
/// nothing.
pub fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    for key in ["detail", "error", "message"] {
        if let Some(text) = value.get(key).and_then(Value::as_str) {
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_status_in_the_table() {
        let cases = [
            (
                401,
                ErrorCode::Unauthorized,
                "Session expired. Please sign in again.",
            ),
            (
                403,
                ErrorCode::Forbidden,
                "You don't have permission to perform this action.",
            ),
            (
                404,
                ErrorCode::NotFound,
                "The requested resource was not found.",
            ),
            (
                429,
                ErrorCode::RateLimited,
                "Too many requests. Please try again in a moment.",
            ),
            (
                500,
                ErrorCode::ServerError,
                "The server is temporarily unavailable. Please try again later.",
            ),
            (
                502,
                ErrorCode::ServerError,
                "The server is temporarily unavailable. Please try again later.",
            ),
            (
                503,
                ErrorCode::ServerError,
                "The server is temporarily unavailable. Please try again later.",
            ),
            (418, ErrorCode::Unknown, "Request failed with status 418"),
        ];
        for (status, code, message) in cases {
            let err = ApiError::from_status(status, None);
            assert_eq!(err.code, code, "status {status}");
            assert_eq!(err.status, status);
            assert_eq!(err.message, message, "status {status}");
        }
    }

    #[test]
    fn server_message_overrides_text_but_not_code() {
        let err = ApiError::from_status(401, Some("Token revoked".to_string()));
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(err.message, "Token revoked");
    }

    #[test]
    fn timeout_and_network_are_distinct() {
        let timeout = ApiError::timeout();
        assert_eq!(timeout.code, ErrorCode::Timeout);
        assert_eq!(timeout.status, 408);
        assert_eq!(timeout.message, "Request timed out. Please try again.");

        let network = ApiError::network();
        assert_eq!(network.code, ErrorCode::NetworkError);
        assert_eq!(network.status, 0);
        assert_eq!(
            network.message,
            "Network error. Please check your connection."
        );
    }

    #[test]
    fn body_fields_are_checked_in_order() {
        assert_eq!(
            server_message(r#"{"detail":"a","error":"b","message":"c"}"#).as_deref(),
            Some("a")
        );
        assert_eq!(
            server_message(r#"{"error":"b","message":"c"}"#).as_deref(),
            Some("b")
        );
        assert_eq!(server_message(r#"{"message":"c"}"#).as_deref(), Some("c"));
    }

    #[test]
    fn non_json_and_empty_bodies_are_tolerated() {
        assert_eq!(server_message("<html>502</html>"), None);
        assert_eq!(server_message(""), None);
        assert_eq!(server_message(r#"{"detail":""}"#), None);
        assert_eq!(server_message(r#"{"detail":42}"#), None);
    }

    #[test]
    fn display_is_the_message() {
        let err = ApiError::from_status(404, None);
        assert_eq!(err.to_string(), "The requested resource was not found.");
    }
}
