//! Request execution over ureq.
//!
//! # Design
//! `Transport` owns a `ureq::Agent` configured with status-as-error
//! disabled, so 4xx/5xx responses come back as `HttpResponse` data rather
//! than `Err` — status interpretation belongs to the caller. Only transport
//! failures (connection, DNS, timeout, malformed URL) become
//! `ApiError::Transport`.

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes `HttpRequest` values over the network.
///
/// Cloning shares the underlying agent and its connection pool.
#[derive(Debug, Clone)]
pub struct Transport {
    agent: ureq::Agent,
}

impl Transport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Dispatch a request and return the raw response.
    pub fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = ?req.method, url = %req.url, "dispatching request");

        let agent = &self.agent;
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => agent.get(&req.url).call(),
            (HttpMethod::Delete, _) => agent.delete(&req.url).call(),
            (HttpMethod::Post, Some(body)) => {
                agent.post(&req.url).content_type("application/json").send(body.as_bytes())
            }
            (HttpMethod::Post, None) => agent.post(&req.url).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                agent.put(&req.url).content_type("application/json").send(body.as_bytes())
            }
            (HttpMethod::Put, None) => agent.put(&req.url).send_empty(),
            (HttpMethod::Patch, Some(body)) => {
                agent.patch(&req.url).content_type("application/json").send(body.as_bytes())
            }
            (HttpMethod::Patch, None) => agent.patch(&req.url).send_empty(),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_url_is_a_transport_error() {
        let transport = Transport::new();
        let req = HttpRequest {
            method: HttpMethod::Get,
            url: "/users/1".to_string(),
            headers: Vec::new(),
            body: None,
        };
        let err = transport.execute(req).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
