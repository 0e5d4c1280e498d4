//! Reporting client: one HTTP call per operation, with status lines on the
//! `tracing` side channel and the core `ApiResult` returned untouched.

use blog_core::{ApiError, ApiResult, BlogClient, ClientConfig, CreatePost, Post, UpdatePost};
use tracing::{info, warn};

use crate::transport::{Transport, UreqTransport};

const PREVIEW_CHARS: usize = 100;

pub struct BlogApiClient<T = UreqTransport> {
    core: BlogClient,
    transport: T,
}

impl BlogApiClient<UreqTransport> {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl<T: Transport> BlogApiClient<T> {
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self {
            core: BlogClient::new(config),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.core.base_url()
    }

    pub fn create_post(&self, input: &CreatePost) -> ApiResult<Post> {
        info!(title = %input.title, "creating post");
        let result = self
            .core
            .build_create_post(input)
            .and_then(|req| self.core.parse_create_post(self.transport.execute(req)));
        match &result {
            Ok(post) => info!(title = %post.title, slug = %post.slug, "post created"),
            Err(err) => report_failure("create post", err),
        }
        result
    }

    /// Posts exactly as the server ordered them.
    pub fn list_posts(&self) -> ApiResult<Vec<Post>> {
        info!("listing posts");
        let response = self.transport.execute(self.core.build_list_posts());
        let result = self.core.parse_list_posts(response);
        match &result {
            Ok(posts) => {
                info!(total = posts.len(), "posts listed");
                for (i, post) in posts.iter().enumerate() {
                    info!("{}. {} ({})", i + 1, post.title, post.slug);
                }
            }
            Err(err) => report_failure("list posts", err),
        }
        result
    }

    pub fn get_post_by_slug(&self, slug: &str) -> ApiResult<Post> {
        info!(slug, "fetching post");
        let response = self.transport.execute(self.core.build_get_post(slug));
        let result = self.core.parse_get_post(response);
        match &result {
            Ok(post) => info!(
                title = %post.title,
                preview = %preview(&post.content),
                "post fetched"
            ),
            Err(err) => report_failure("get post", err),
        }
        result
    }

    pub fn update_post(&self, slug: &str, updates: &UpdatePost) -> ApiResult<Post> {
        info!(slug, "updating post");
        let result = self
            .core
            .build_update_post(slug, updates)
            .and_then(|req| self.core.parse_update_post(self.transport.execute(req)));
        match &result {
            Ok(post) => info!(title = %post.title, "post updated"),
            Err(err) => report_failure("update post", err),
        }
        result
    }

    /// Succeeds only when the server answers exactly 200.
    pub fn delete_post(&self, slug: &str) -> ApiResult<()> {
        info!(slug, "deleting post");
        let response = self.transport.execute(self.core.build_delete_post(slug));
        let result = self.core.parse_delete_post(response);
        match &result {
            Ok(()) => info!(slug, "post deleted"),
            Err(err) => report_failure("delete post", err),
        }
        result
    }
}

fn report_failure(operation: &str, err: &ApiError) {
    warn!(
        operation,
        status = err.status(),
        detail = %err.detail(),
        "request failed"
    );
}

fn preview(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use blog_core::{HttpMethod, HttpRequest, HttpResponse};

    use super::*;

    const POST: &str = r#"{"post":{"slug":"hello","title":"Hello","content":"Body","author":"Ann"}}"#;

    fn config() -> ClientConfig {
        ClientConfig::new("http://blog.test/api", "k")
    }

    fn answering(status: u16, body: &'static str) -> impl Fn(HttpRequest) -> HttpResponse {
        move |_| HttpResponse::new(status, body)
    }

    #[test]
    fn create_post_returns_server_post() {
        let client = BlogApiClient::with_transport(&config(), answering(201, POST));
        let post = client
            .create_post(&CreatePost::new("Hello", "Body", "Ann"))
            .unwrap();
        assert_eq!(post.title, "Hello");
        assert_eq!(post.author, "Ann");
    }

    #[test]
    fn create_post_non_201_is_error_with_server_detail() {
        let client = BlogApiClient::with_transport(
            &config(),
            answering(400, r#"{"success":false,"error":"title is required"}"#),
        );
        let err = client
            .create_post(&CreatePost::new("", "Body", "Ann"))
            .unwrap_err();
        assert_eq!(err.detail(), "title is required");
    }

    #[test]
    fn requests_carry_method_path_and_headers() {
        let seen = RefCell::new(Vec::new());
        let transport = |req: HttpRequest| {
            seen.borrow_mut()
                .push((req.method, req.path.clone(), req.headers.clone()));
            HttpResponse::new(200, r#"{"success":true}"#)
        };
        let client = BlogApiClient::with_transport(&config(), transport);
        client.delete_post("hello").unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, HttpMethod::Delete);
        assert_eq!(seen[0].1, "http://blog.test/api/posts/hello");
        assert!(seen[0].2.contains(&("x-api-key".to_string(), "k".to_string())));
    }

    #[test]
    fn delete_post_only_200_succeeds() {
        for (status, ok) in [(200, true), (204, false), (404, false), (500, false)] {
            let client = BlogApiClient::with_transport(&config(), answering(status, ""));
            assert_eq!(client.delete_post("hello").is_ok(), ok, "status {status}");
        }
    }

    #[test]
    fn transport_failure_is_returned_not_raised() {
        let client = BlogApiClient::with_transport(&config(), |_req: HttpRequest| {
            HttpResponse::transport_failure("connection refused")
        });
        let err = client.list_posts().unwrap_err();
        assert_eq!(err.status(), Some(0));
        assert_eq!(err.detail(), "connection refused");
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        let long = "é".repeat(150);
        let short = preview(&long);
        assert_eq!(short.chars().count(), PREVIEW_CHARS + 3);
        assert!(short.ends_with("..."));
        assert_eq!(preview("short"), "short");
    }
}
