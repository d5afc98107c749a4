//! HTTP transport types shared by the client and the transport.
//!
//! # Design
//! Requests and responses are plain data. `ApiClient::build_*` methods
//! produce `HttpRequest` values without touching the network, which keeps
//! request construction deterministic and unit-testable; `Transport`
//! executes them and hands back an `HttpResponse`.
//!
//! Status codes come back as data, never as implicit errors — callers that
//! want "non-2xx is an error" semantics opt in through [`HttpResponse::ok`].

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

/// An HTTP request described as plain data.
///
/// Built by `ApiClient::build_*` methods. `url` is always the full URL to
/// dispatch to — base-URL resolution happens at build time, not in the
/// transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Consume the response, turning any non-2xx status into
    /// `ApiError::HttpError` with the raw status and body.
    pub fn ok(self) -> Result<HttpResponse, ApiError> {
        if self.is_success() {
            return Ok(self);
        }
        Err(ApiError::HttpError {
            status: self.status,
            body: self.body,
        })
    }

    /// Deserialize the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}
