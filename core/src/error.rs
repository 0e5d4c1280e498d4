//! Error types for the blog API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the post does not exist" from "the server returned an unexpected status."
//! `Transport` covers requests that never got an HTTP response (status `0`).
//! Every HTTP variant keeps the raw body so the server's own error message can
//! be reported.

use serde_json::Value;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by `BlogClient` build and parse methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never reached the server (refused, DNS, timeout).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server returned 404.
    #[error("post not found: {body}")]
    NotFound { body: String },

    /// The server returned a status other than the expected one.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body did not match the expected envelope.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    /// Status code behind the failure: `0` for transport failures, `None`
    /// for JSON errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport(_) => Some(0),
            ApiError::NotFound { .. } => Some(404),
            ApiError::HttpError { status, .. } => Some(*status),
            ApiError::DeserializationError(_) | ApiError::SerializationError(_) => None,
        }
    }

    /// Human-readable failure detail, preferring the server-reported error.
    pub fn detail(&self) -> String {
        match self {
            ApiError::NotFound { body } | ApiError::HttpError { body, .. } => {
                server_message(body).unwrap_or_else(|| {
                    if body.trim().is_empty() {
                        format!("HTTP {}", self.status().unwrap_or_default())
                    } else {
                        body.clone()
                    }
                })
            }
            ApiError::Transport(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Pull `error`, `error.message` or `message` out of a JSON error body.
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("error") {
        Some(Value::String(s)) => return Some(s.clone()),
        Some(Value::Object(obj)) => {
            if let Some(Value::String(s)) = obj.get("message") {
                return Some(s.clone());
            }
        }
        _ => {}
    }
    value.get("message").and_then(Value::as_str).map(str::to_string)
}
