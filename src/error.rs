//! Error types for the API client and the session store.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` keeps the transport/HTTP distinction for logging. The store
//! collapses every `ApiError` into an `AuthFailure` carrying one message the
//! UI can show as-is, so nothing past the store has to match on transport
//! details.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure talking to the backend API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status. `message` is the `error`
    /// field of the body when the server supplied one.
    #[error("request failed ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Status { status: u16, message: Option<String> },
    /// A 2xx body did not match the expected shape.
    #[error("response error: {0}")]
    Parse(String),
    /// The request body could not be encoded.
    #[error("request error: {0}")]
    Serialization(String),
    /// HTTP is only wired up in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Human-readable message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Message to show the user: the server's when present, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

/// Failed login or registration, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthFailure {
    pub message: String,
}

impl AuthFailure {
    /// Uses the server's message when present, otherwise `fallback`.
    pub fn from_api(err: &ApiError, fallback: &str) -> Self {
        Self {
            message: err.user_message(fallback),
        }
    }
}
