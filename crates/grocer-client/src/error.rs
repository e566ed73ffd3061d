//! Error types for the storefront client.

use grocer_types::ValidationError;
use thiserror::Error;

/// Errors that can occur when calling the storefront API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never reached the server, or the response body could
    /// not be read.
    #[error("Network error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-provided `error`/`message` text, or `HTTP <status>`.
        message: String,
        /// Parsed response payload (JSON, or the raw text as a string).
        payload: serde_json::Value,
    },

    /// A local check failed before or after the network call.
    #[error("{0}")]
    Validation(String),

    /// A successful response did not have the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Builds a [`ClientError::Status`] from a failed response payload.
    ///
    /// The message comes from the payload's `error` field, then its
    /// `message` field, then falls back to `HTTP <status>`.
    pub fn from_status(status: u16, payload: serde_json::Value) -> Self {
        let message = ["error", "message"]
            .iter()
            .find_map(|key| payload.get(key).and_then(|v| v.as_str()).filter(|s| !s.is_empty()))
            .map_or_else(|| format!("HTTP {status}"), str::to_string);
        Self::Status { status, message, payload }
    }

    /// HTTP status, when the server answered at all.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 401/403 responses.
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Plain text shown next to the action that failed.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_prefers_error_field() {
        let err = ClientError::from_status(400, json!({"error": "bad", "message": "ignored"}));
        assert_eq!(err.user_message(), "bad");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_message_falls_back_to_message_field() {
        let err = ClientError::from_status(409, json!({"message": "Email already used"}));
        assert_eq!(err.user_message(), "Email already used");
    }

    #[test]
    fn test_message_falls_back_to_status() {
        let err = ClientError::from_status(404, json!("404 page not found\n"));
        assert_eq!(err.user_message(), "HTTP 404");

        let err = ClientError::from_status(500, json!({"error": 12}));
        assert_eq!(err.user_message(), "HTTP 500");
    }

    #[test]
    fn test_unauthorized() {
        assert!(ClientError::from_status(401, serde_json::Value::Null).is_unauthorized());
        assert!(!ClientError::Transport("refused".to_string()).is_unauthorized());
    }

    #[test]
    fn test_validation_conversion() {
        let err: ClientError = ValidationError::Required { field: "email".to_string() }.into();
        assert_eq!(err, ClientError::Validation("email is required".to_string()));
    }
}
