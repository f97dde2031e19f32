//! Error types for the storefront API gateway.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when calling the storefront service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, TLS...).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        status: StatusCode,
        /// Message extracted from the error body, if it carried one.
        message: Option<String>,
    },

    /// The response body did not match the expected schema.
    #[error("unexpected response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// Rejected on the client before anything was sent.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Builds a `Status` error, pulling a human readable message out of the body.
    ///
    /// Accepts `{"message": "..."}`, a bare JSON string, or a plain-text body.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let trimmed = body.trim();
        let message = match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::Object(map)) => map
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            Ok(Value::String(s)) => Some(s),
            Ok(_) => None,
            Err(_) if !trimmed.is_empty() && !trimmed.starts_with('<') => {
                Some(trimmed.to_string())
            }
            Err(_) => None,
        };
        ApiError::Status {
            status,
            message: message.filter(|m| !m.trim().is_empty()),
        }
    }

    /// The message to show the user, or `default` when the failure carries none.
    pub fn user_message(&self, default: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Validation(message) => message.clone(),
            _ => default.to_string(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            _ => None,
        }
    }
}
