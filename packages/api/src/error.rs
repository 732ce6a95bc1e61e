//! Error type for backend calls.
//!
//! Two failure classes exist: the request never completed (transport), or
//! the backend answered with a non-2xx status. Failed responses carry a
//! JSON body of the form `{"detail": "..."}`; [`detail_or`] pulls that
//! message out so the UI can show the server's own wording, falling back to
//! a generic per-action message when the body is not in that shape.
//!
//! Every error is terminal for the user action that caused it — no retry,
//! no backoff, no rollback.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response; `detail` is what the UI shows.
    #[error("{detail}")]
    Api { status: u16, detail: String },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    pub fn api(status: u16, detail: impl Into<String>) -> Self {
        Self::Api {
            status,
            detail: detail.into(),
        }
    }
}

/// Extract the backend's `detail` message from an error body, or fall back
/// to the supplied generic message.
pub(crate) fn detail_or(body: &str, fallback: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: String,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.detail,
        Err(_) => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_server_detail() {
        let body = r#"{"detail": "Email already registered"}"#;
        assert_eq!(
            detail_or(body, "Registration failed"),
            "Email already registered"
        );
    }

    #[test]
    fn falls_back_on_non_json_body() {
        assert_eq!(
            detail_or("<html>Bad Gateway</html>", "Login failed"),
            "Login failed"
        );
        assert_eq!(detail_or("", "Login failed"), "Login failed");
    }

    #[test]
    fn falls_back_when_detail_is_missing_or_not_a_string() {
        assert_eq!(detail_or(r#"{"error": "nope"}"#, "Failed"), "Failed");
        assert_eq!(detail_or(r#"{"detail": 42}"#, "Failed"), "Failed");
    }

    #[test]
    fn error_display_shows_detail_text() {
        let err = ApiError::api(401, "Incorrect email or password");
        assert_eq!(err.to_string(), "Incorrect email or password");
    }
}
