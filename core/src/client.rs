//! HTTP client with an optional base URL.
//!
//! # Design
//! `ApiClient` comes in two shapes built from the same type: the generic
//! client (`new`) expects callers to supply absolute URLs, and the bound
//! client (`with_base_url`) resolves relative paths against a base URL that
//! never changes after construction. An absolute URL passed to a bound
//! client bypasses the base entirely.
//!
//! Each method is split into a `build_*` step that produces an
//! `HttpRequest` without touching the network, and an executing method that
//! dispatches the built request through the shared `Transport`.

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;

/// An HTTP client, optionally pre-configured with a base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    transport: Transport,
    base_url: Option<String>,
}

impl ApiClient {
    /// A generic client — callers supply full URLs.
    pub fn new() -> Self {
        Self {
            transport: Transport::new(),
            base_url: None,
        }
    }

    /// A client bound to `base_url`; relative paths resolve against it.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            transport: Transport::new(),
            base_url: Some(base_url.trim_end_matches('/').to_string()),
        }
    }

    /// The base URL this client resolves relative paths against, if any.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Resolve `path` to a full URL. Absolute URLs are used verbatim;
    /// relative paths join onto the base URL when one is configured, and
    /// pass through unchanged otherwise (the transport rejects them).
    fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        match &self.base_url {
            Some(base) if path.starts_with('/') => format!("{base}{path}"),
            Some(base) => format!("{base}/{path}"),
            None => path.to_string(),
        }
    }

    pub fn build_get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.resolve(path),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_delete(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.resolve(path),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_post<T: Serialize>(&self, path: &str, body: &T) -> Result<HttpRequest, ApiError> {
        self.build_with_body(HttpMethod::Post, path, body)
    }

    pub fn build_put<T: Serialize>(&self, path: &str, body: &T) -> Result<HttpRequest, ApiError> {
        self.build_with_body(HttpMethod::Put, path, body)
    }

    pub fn build_patch<T: Serialize>(&self, path: &str, body: &T) -> Result<HttpRequest, ApiError> {
        self.build_with_body(HttpMethod::Patch, path, body)
    }

    fn build_with_body<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            url: self.resolve(path),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn get(&self, path: &str) -> Result<HttpResponse, ApiError> {
        self.transport.execute(self.build_get(path))
    }

    pub fn delete(&self, path: &str) -> Result<HttpResponse, ApiError> {
        self.transport.execute(self.build_delete(path))
    }

    pub fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<HttpResponse, ApiError> {
        self.transport.execute(self.build_post(path, body)?)
    }

    pub fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<HttpResponse, ApiError> {
        self.transport.execute(self.build_put(path, body)?)
    }

    pub fn patch<T: Serialize>(&self, path: &str, body: &T) -> Result<HttpResponse, ApiError> {
        self.transport.execute(self.build_patch(path, body)?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound() -> ApiClient {
        ApiClient::with_base_url("https://jsonplaceholder.typicode.com")
    }

    #[test]
    fn bound_get_joins_base_and_path() {
        let req = bound().build_get("/users/1");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "https://jsonplaceholder.typicode.com/users/1");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn bound_inserts_missing_leading_slash() {
        let req = bound().build_get("users/1");
        assert_eq!(req.url, "https://jsonplaceholder.typicode.com/users/1");
    }

    #[test]
    fn trailing_slash_on_base_is_stripped() {
        let client = ApiClient::with_base_url("https://jsonplaceholder.typicode.com/");
        let req = client.build_get("/posts");
        assert_eq!(req.url, "https://jsonplaceholder.typicode.com/posts");
    }

    #[test]
    fn absolute_url_bypasses_base() {
        let req = bound().build_get("http://localhost:3000/health");
        assert_eq!(req.url, "http://localhost:3000/health");
    }

    #[test]
    fn generic_client_uses_url_verbatim() {
        let client = ApiClient::new();
        let req = client.build_get("https://example.com/ping");
        assert_eq!(req.url, "https://example.com/ping");
        assert!(client.base_url().is_none());
    }

    #[test]
    fn generic_client_passes_relative_path_through() {
        let req = ApiClient::new().build_get("/users/1");
        assert_eq!(req.url, "/users/1");
    }

    #[test]
    fn post_serializes_json_body() {
        let body = serde_json::json!({ "title": "hello", "body": "world", "userId": 1 });
        let req = bound().build_post("/posts", &body).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "https://jsonplaceholder.typicode.com/posts");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let parsed: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(parsed["title"], "hello");
        assert_eq!(parsed["userId"], 1);
    }

    #[test]
    fn put_and_patch_carry_method_and_body() {
        let body = serde_json::json!({ "title": "renamed" });
        let put = bound().build_put("/posts/1", &body).unwrap();
        assert_eq!(put.method, HttpMethod::Put);
        assert_eq!(put.url, "https://jsonplaceholder.typicode.com/posts/1");

        let patch = bound().build_patch("/posts/1", &body).unwrap();
        assert_eq!(patch.method, HttpMethod::Patch);
        assert!(patch.body.as_deref().unwrap().contains("renamed"));
    }

    #[test]
    fn delete_has_no_body() {
        let req = bound().build_delete("/posts/1");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "https://jsonplaceholder.typicode.com/posts/1");
        assert!(req.body.is_none());
    }
}
