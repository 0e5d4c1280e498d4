//! Blocking demo client for the blog posts API.
//!
//! # Overview
//! Pairs the I/O-free `blog-core` client with a `ureq` transport, reports
//! every call through `tracing`, and scripts a full walkthrough of the API
//! (create, list, fetch, update, seed samples).
//!
//! # Design
//! - `Transport` is the only place that touches the network; failures there
//!   become status-0 responses, never panics.
//! - `BlogApiClient` returns the core `ApiResult` unchanged; status lines are
//!   a side channel.
//! - Everything runs sequentially with one request in flight. The only pacing
//!   is a fixed sleep between sample-post creations.

pub mod api;
pub mod config;
pub mod samples;
pub mod scenario;
pub mod transport;

pub use api::BlogApiClient;
pub use config::DemoConfig;
pub use samples::{sample_posts, seed_sample_posts};
pub use scenario::{run, DemoReport};
pub use transport::{Transport, UreqTransport};
