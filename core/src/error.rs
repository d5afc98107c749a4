//! Error types for the HTTP client.
//!
//! # Design
//! This layer adds no taxonomy of its own: network and timeout failures
//! carry the underlying transport's error text unmodified, and HTTP status
//! codes only become `HttpError` when a caller opts in via
//! `HttpResponse::ok`.

use std::fmt;

/// Errors returned by `ApiClient` request methods and response helpers.
#[derive(Debug)]
pub enum ApiError {
    /// The request could not be dispatched — connection, DNS, timeout, or a
    /// malformed URL, as reported by the underlying HTTP library.
    Transport(String),

    /// The server returned a non-2xx status (only raised by
    /// `HttpResponse::ok`).
    HttpError { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    SerializationError(String),

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
