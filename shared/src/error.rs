//! Error taxonomy for calls against the content API.

use serde::Deserialize;
use thiserror::Error;

/// Body shape the API uses for failures. FastAPI style `detail`, with
/// `message` used by a few endpoints such as logout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    /// Primary error text.
    #[serde(default)]
    pub detail: Option<String>,
    /// Secondary error text.
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiMessage {
    /// Parse an error body, tolerating non-JSON payloads.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str::<Self>(body).unwrap_or_default()
    }

    /// The first non-empty text carried by the body.
    pub fn text(&self) -> Option<String> {
        self.detail
            .iter()
            .chain(self.message.iter())
            .map(|value| value.trim())
            .find(|value| !value.is_empty())
            .map(str::to_string)
    }
}

/// Failure of a request against the content API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP error: {status}")]
    Http {
        /// Response status code.
        status: u16,
        /// `detail`/`message` text from the response body, if any.
        detail: Option<String>,
    },
    /// The response body did not match the expected shape.
    #[error("parse error: {0}")]
    Decode(String),
    /// Missing or rejected admin token, or refused credentials at login.
    #[error("not signed in")]
    Unauthorized,
}

impl ApiError {
    /// Build an [`ApiError::Http`] from a status code and the raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Http {
            status,
            detail: ApiMessage::from_body(body).text(),
        }
    }

    /// Message shown to an admin after a failed write: the server's own
    /// explanation when it sent one, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Unauthorized => "Your session has ended. Please sign in again.".to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Whether the server reported the record as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_wins_over_fallback() {
        let err = ApiError::from_response(400, r#"{"detail":"Slug already exists"}"#);
        assert_eq!(err.user_message("Failed to add news"), "Slug already exists");
    }

    #[test]
    fn message_is_used_when_detail_is_missing() {
        let err = ApiError::from_response(500, r#"{"message":"Logout failed upstream"}"#);
        assert_eq!(err.user_message("Logout failed"), "Logout failed upstream");
    }

    #[test]
    fn non_json_body_falls_back() {
        let err = ApiError::from_response(502, "<html>Bad gateway</html>");
        assert_eq!(
            err,
            ApiError::Http {
                status: 502,
                detail: None
            }
        );
        assert_eq!(err.user_message("Failed to update banner"), "Failed to update banner");
    }

    #[test]
    fn blank_detail_is_ignored() {
        let body = ApiMessage::from_body(r#"{"detail":"   ","message":"fallback text"}"#);
        assert_eq!(body.text().as_deref(), Some("fallback text"));
    }

    #[test]
    fn network_errors_use_fallback() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.user_message("Something went wrong"), "Something went wrong");
        assert!(!err.is_not_found());
        assert!(ApiError::from_response(404, "{}").is_not_found());
    }
}
