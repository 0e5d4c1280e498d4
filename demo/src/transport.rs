//! Executes core `HttpRequest` values over the network.
//!
//! # Design
//! `Transport::execute` cannot fail: anything that keeps a request from
//! producing an HTTP response (refused connection, DNS, timeout) comes back
//! as `HttpResponse::transport_failure`, status `0`. Once a status line has
//! arrived that status is kept, even if the body then fails to read.
//! Status interpretation stays in the core client.

use blog_core::{HttpMethod, HttpRequest, HttpResponse};
use tracing::{debug, warn};

/// Performs one blocking HTTP round-trip.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> HttpResponse;
}

impl<F> Transport for F
where
    F: Fn(HttpRequest) -> HttpResponse,
{
    fn execute(&self, request: HttpRequest) -> HttpResponse {
        self(request)
    }
}

/// `ureq` agent with status-as-error disabled, so 4xx/5xx arrive as data.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ureq::Error> {
        let HttpRequest {
            method,
            path,
            headers,
            body,
        } = request;

        let mut response = match method {
            HttpMethod::Get | HttpMethod::Delete => {
                let mut builder = if method == HttpMethod::Get {
                    self.agent.get(&path)
                } else {
                    self.agent.delete(&path)
                };
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()?
            }
            HttpMethod::Post | HttpMethod::Put => {
                let mut builder = if method == HttpMethod::Post {
                    self.agent.post(&path)
                } else {
                    self.agent.put(&path)
                };
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                let body = body.unwrap_or_default();
                builder.send(body.as_bytes())?
            }
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        // No size cap: a listing is returned exactly as the server sent it.
        let body = match response.body_mut().with_config().limit(u64::MAX).read_to_string() {
            Ok(body) => body,
            Err(err) => {
                warn!(status, error = %err, "response body could not be read");
                String::new()
            }
        };

        Ok(HttpResponse {
            status,
            headers,
            body,
            error: None,
        })
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> HttpResponse {
        let method = request.method.as_str();
        let path = request.path.clone();
        match self.send(request) {
            Ok(response) => {
                debug!(method, %path, status = response.status, "request finished");
                response
            }
            Err(err) => {
                debug!(method, %path, error = %err, "request failed before a response");
                HttpResponse::transport_failure(err.to_string())
            }
        }
    }
}
