//! Application context holding the provisioned HTTP clients.
//!
//! # Design
//! Provisioning happens once at application startup: `AppContext::new`
//! constructs a generic client and a client bound to the jsonplaceholder
//! origin, and the resulting context is passed by reference to whichever
//! components need HTTP access. There is no global registry and no mutation
//! API — fields are private and only reachable through `&self` accessors,
//! so the bound client's base URL cannot change after initialization.
//!
//! Provisioning is infallible and synchronous; re-running it just yields a
//! fresh context with identical configuration.

use crate::client::ApiClient;

/// Origin all bound-client requests resolve against.
pub const JSONPLACEHOLDER_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// The two HTTP client capabilities shared across the application.
#[derive(Debug, Clone)]
pub struct AppContext {
    http: ApiClient,
    api: ApiClient,
}

impl AppContext {
    /// Provision both clients against the fixed jsonplaceholder origin.
    pub fn new() -> Self {
        Self::with_base_url(JSONPLACEHOLDER_BASE_URL)
    }

    /// Provision against a caller-supplied origin. This is the seam tests
    /// use to point the bound client at a local server.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: ApiClient::new(),
            api: ApiClient::with_base_url(base_url),
        }
    }

    /// The generic client — callers supply absolute URLs.
    pub fn http(&self) -> &ApiClient {
        &self.http
    }

    /// The bound client — relative paths resolve against the configured
    /// base URL.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_binds_api_client_to_jsonplaceholder() {
        let ctx = AppContext::new();
        assert_eq!(ctx.api().base_url(), Some(JSONPLACEHOLDER_BASE_URL));
    }

    #[test]
    fn generic_client_has_no_base_url() {
        let ctx = AppContext::new();
        assert!(ctx.http().base_url().is_none());
    }

    #[test]
    fn bound_client_resolves_relative_paths_against_origin() {
        let ctx = AppContext::new();
        let req = ctx.api().build_get("/users/1");
        assert_eq!(req.url, "https://jsonplaceholder.typicode.com/users/1");
    }

    #[test]
    fn reprovisioning_yields_identical_configuration() {
        let first = AppContext::new();
        let second = AppContext::new();
        assert_eq!(first.api().base_url(), second.api().base_url());
        assert_eq!(first.http().base_url(), second.http().base_url());
        assert_eq!(
            first.api().build_get("/users/1").url,
            second.api().build_get("/users/1").url
        );
    }

    #[test]
    fn with_base_url_overrides_origin() {
        let ctx = AppContext::with_base_url("http://localhost:3000");
        let req = ctx.api().build_get("/users/1");
        assert_eq!(req.url, "http://localhost:3000/users/1");
    }
}
