//! Static client configuration.

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Placeholder key; real deployments supply their own.
pub const DEFAULT_API_KEY: &str = "demo-api-key";

/// Base URL and API key for one API deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_API_KEY)
    }
}
