//! HTTP client provisioning for the jsonplaceholder API.
//!
//! # Overview
//! At application startup, [`AppContext::new`] provisions two HTTP client
//! capabilities: a generic client for absolute URLs and a client bound to
//! `https://jsonplaceholder.typicode.com`. The context is built once and
//! passed by reference to whichever components need HTTP access — explicit
//! dependency injection instead of a global registry.
//!
//! # Design
//! - `ApiClient` holds only a transport handle and an optional base URL;
//!   the base URL is immutable after construction.
//! - Each request method is split into `build_*` (produces an
//!   `HttpRequest`, no I/O) and an executing method that dispatches through
//!   `Transport`, so request construction stays unit-testable.
//! - Non-2xx statuses are returned as data; `HttpResponse::ok` converts
//!   them to errors only when the caller asks.

pub mod client;
pub mod context;
pub mod error;
pub mod http;
pub mod transport;

pub use client::ApiClient;
pub use context::{AppContext, JSONPLACEHOLDER_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::Transport;
