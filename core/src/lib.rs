//! Synchronous API client core for the blog posts API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `BlogClient` is stateless: it holds only the base URL and fixed headers
//!   (`content-type` and `x-api-key`), both taken from a `ClientConfig`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Every parse returns `Result<_, ApiError>`; a refused connection arrives
//!   as a status-0 response and leaves as `ApiError::Transport`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use client::{BlogClient, API_KEY_HEADER};
pub use config::{ClientConfig, DEFAULT_API_KEY, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreatePost, Post, UpdatePost};
