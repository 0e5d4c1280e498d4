//! Environment configuration for the demo binary.
//!
//! Variables (a `.env` file is honored):
//! - `BLOG_API_BASE_URL` (default `http://localhost:3000/api`)
//! - `BLOG_API_KEY` (default placeholder key)
//! - `BLOG_SEED_PACING_MS` (default `1000`)

use std::time::Duration;

use anyhow::Context;
use blog_core::{ClientConfig, DEFAULT_API_KEY, DEFAULT_BASE_URL};

pub const BASE_URL_VAR: &str = "BLOG_API_BASE_URL";
pub const API_KEY_VAR: &str = "BLOG_API_KEY";
pub const PACING_VAR: &str = "BLOG_SEED_PACING_MS";

pub const DEFAULT_PACING: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub client: ClientConfig,
    /// Fixed pause between sample-post creations.
    pub pacing: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            pacing: DEFAULT_PACING,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name: &str| std::env::var(name).ok())
    }

    /// Build from any variable source; unset variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = lookup(API_KEY_VAR).unwrap_or_else(|| DEFAULT_API_KEY.to_string());
        let pacing = match lookup(PACING_VAR) {
            Some(raw) => {
                let millis: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{PACING_VAR} must be milliseconds, got {raw:?}"))?;
                Duration::from_millis(millis)
            }
            None => DEFAULT_PACING,
        };
        Ok(Self {
            client: ClientConfig::new(base_url, api_key),
            pacing,
        })
    }

    /// Public site root: the base URL without its trailing `/api`.
    pub fn site_url(&self) -> &str {
        let base = self.client.base_url.trim_end_matches('/');
        base.strip_suffix("/api").unwrap_or(base)
    }

    pub fn blog_url(&self) -> String {
        format!("{}/blog", self.site_url())
    }

    pub fn post_url(&self, slug: &str) -> String {
        format!("{}/blog/{slug}", self.site_url())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = DemoConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.client.base_url, "http://localhost:3000/api");
        assert_eq!(config.pacing, Duration::from_secs(1));
    }

    #[test]
    fn reads_overrides() {
        let config = DemoConfig::from_lookup(lookup(&[
            (BASE_URL_VAR, "https://blog.example.com/api/"),
            (API_KEY_VAR, "secret"),
            (PACING_VAR, "250"),
        ]))
        .unwrap();
        assert_eq!(config.client.api_key, "secret");
        assert_eq!(config.pacing, Duration::from_millis(250));
        assert_eq!(config.site_url(), "https://blog.example.com");
    }

    #[test]
    fn rejects_bad_pacing() {
        let err = DemoConfig::from_lookup(lookup(&[(PACING_VAR, "soon")])).unwrap_err();
        assert!(err.to_string().contains(PACING_VAR));
    }

    #[test]
    fn builds_public_urls() {
        let config = DemoConfig::default();
        assert_eq!(config.blog_url(), "http://localhost:3000/blog");
        assert_eq!(
            config.post_url("rust-api-guide"),
            "http://localhost:3000/blog/rust-api-guide"
        );
    }

    #[test]
    fn site_url_without_api_suffix_is_unchanged() {
        let config = DemoConfig {
            client: ClientConfig::new("http://127.0.0.1:4000", "k"),
            ..DemoConfig::default()
        };
        assert_eq!(config.site_url(), "http://127.0.0.1:4000");
    }
}
