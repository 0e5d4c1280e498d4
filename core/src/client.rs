//! Stateless HTTP request builder and response parser for the blog posts API.
//!
//! # Design
//! `BlogClient` holds only a `base_url` and the fixed header set, and carries
//! no mutable state between calls. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`. The caller executes the actual HTTP round-trip.
//!
//! Single-post endpoints answer `{"post": {...}}`, the list endpoint answers
//! `{"posts": [...]}`.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreatePost, Post, UpdatePost};

pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Deserialize)]
struct PostEnvelope {
    post: Post,
}

#[derive(Deserialize)]
struct PostsEnvelope {
    posts: Vec<Post>,
}

/// Synchronous, stateless client for the blog posts API.
#[derive(Debug, Clone)]
pub struct BlogClient {
    base_url: String,
    headers: Vec<(String, String)>,
}

impl BlogClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                (API_KEY_HEADER.to_string(), config.api_key.clone()),
            ],
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_create_post(&self, input: &CreatePost) -> ApiResult<HttpRequest> {
        let body = to_json(input)?;
        Ok(self.request(HttpMethod::Post, "/posts".to_string(), Some(body)))
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/posts".to_string(), None)
    }

    pub fn build_get_post(&self, slug: &str) -> HttpRequest {
        self.request(HttpMethod::Get, format!("/posts/{slug}"), None)
    }

    pub fn build_update_post(&self, slug: &str, input: &UpdatePost) -> ApiResult<HttpRequest> {
        let body = to_json(input)?;
        Ok(self.request(HttpMethod::Put, format!("/posts/{slug}"), Some(body)))
    }

    pub fn build_delete_post(&self, slug: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("/posts/{slug}"), None)
    }

    pub fn parse_create_post(&self, response: HttpResponse) -> ApiResult<Post> {
        check_status(&response, 201)?;
        from_json::<PostEnvelope>(&response.body).map(|env| env.post)
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> ApiResult<Vec<Post>> {
        check_status(&response, 200)?;
        from_json::<PostsEnvelope>(&response.body).map(|env| env.posts)
    }

    pub fn parse_get_post(&self, response: HttpResponse) -> ApiResult<Post> {
        check_status(&response, 200)?;
        from_json::<PostEnvelope>(&response.body).map(|env| env.post)
    }

    pub fn parse_update_post(&self, response: HttpResponse) -> ApiResult<Post> {
        check_status(&response, 200)?;
        from_json::<PostEnvelope>(&response.body).map(|env| env.post)
    }

    /// Only status 200 counts as deleted; the body is ignored.
    pub fn parse_delete_post(&self, response: HttpResponse) -> ApiResult<()> {
        check_status(&response, 200)
    }

    fn request(&self, method: HttpMethod, endpoint: String, body: Option<String>) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{endpoint}", self.base_url),
            headers: self.headers.clone(),
            body,
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> ApiResult<String> {
    serde_json::to_string(value).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map transport failures and unexpected status codes to `ApiError`.
fn check_status(response: &HttpResponse, expected: u16) -> ApiResult<()> {
    if let Some(message) = &response.error {
        return Err(ApiError::Transport(message.clone()));
    }
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound {
            body: response.body.clone(),
        });
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST_JSON: &str =
        r#"{"id":"1","slug":"hello","title":"Hello","content":"Body","author":"Ann"}"#;

    fn client() -> BlogClient {
        BlogClient::new(&ClientConfig::new("http://localhost:3000/api", "secret"))
    }

    fn expected_headers() -> Vec<(String, String)> {
        vec![
            ("content-type".to_string(), "application/json".to_string()),
            ("x-api-key".to_string(), "secret".to_string()),
        ]
    }

    #[test]
    fn build_list_posts_produces_correct_request() {
        let req = client().build_list_posts();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/posts");
        assert!(req.body.is_none());
        assert_eq!(req.headers, expected_headers());
    }

    #[test]
    fn build_get_post_uses_slug_in_path() {
        let req = client().build_get_post("hello-world");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/posts/hello-world");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_post_produces_correct_request() {
        let input = CreatePost::new("Hello", "Body", "Ann");
        let req = client().build_create_post(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/api/posts");
        assert_eq!(req.headers, expected_headers());
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Hello");
        assert_eq!(body["author"], "Ann");
        assert!(body.get("slug").is_none());
    }

    #[test]
    fn build_update_post_sends_only_present_fields() {
        let req = client()
            .build_update_post("hello", &UpdatePost::content("Edited"))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/api/posts/hello");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"content": "Edited"}));
    }

    #[test]
    fn build_delete_post_produces_correct_request() {
        let req = client().build_delete_post("hello");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/api/posts/hello");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = BlogClient::new(&ClientConfig::new("http://localhost:3000/api/", "k"));
        assert_eq!(client.build_list_posts().path, "http://localhost:3000/api/posts");
    }

    #[test]
    fn parse_create_post_success() {
        let response = HttpResponse::new(201, format!(r#"{{"post":{POST_JSON}}}"#));
        let post = client().parse_create_post(response).unwrap();
        assert_eq!(post.title, "Hello");
        assert_eq!(post.author, "Ann");
    }

    #[test]
    fn parse_create_post_rejects_200() {
        let response = HttpResponse::new(200, format!(r#"{{"post":{POST_JSON}}}"#));
        let err = client().parse_create_post(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 200, .. }));
    }

    #[test]
    fn parse_create_post_keeps_server_error() {
        let response = HttpResponse::new(401, r#"{"success":false,"error":"invalid API key"}"#);
        let err = client().parse_create_post(response).unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.detail(), "invalid API key");
    }

    #[test]
    fn parse_list_posts_keeps_server_order() {
        let response = HttpResponse::new(
            200,
            r#"{"posts":[
                {"slug":"b","title":"B","content":"","author":"x"},
                {"slug":"a","title":"A","content":"","author":"x"},
                {"slug":"c","title":"C","content":"","author":"x"}
            ]}"#,
        );
        let posts = client().parse_list_posts(response).unwrap();
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["b", "a", "c"]);
    }

    #[test]
    fn parse_list_posts_bad_envelope() {
        let response = HttpResponse::new(200, "[]");
        let err = client().parse_list_posts(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_get_post_not_found() {
        let response = HttpResponse::new(404, r#"{"error":"post not found"}"#);
        let err = client().parse_get_post(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
        assert_eq!(err.detail(), "post not found");
    }

    #[test]
    fn parse_update_post_success() {
        let response = HttpResponse::new(
            200,
            r#"{"post":{"slug":"hello","title":"Hello","content":"Edited","author":"Ann","status":"draft"}}"#,
        );
        let post = client().parse_update_post(response).unwrap();
        assert_eq!(post.content, "Edited");
        assert_eq!(post.extra["status"], "draft");
    }

    #[test]
    fn parse_delete_post_requires_exactly_200() {
        let c = client();
        assert!(c.parse_delete_post(HttpResponse::new(200, "{}")).is_ok());
        for status in [204, 404, 500] {
            assert!(
                c.parse_delete_post(HttpResponse::new(status, "")).is_err(),
                "status {status} must not count as deleted"
            );
        }
    }

    #[test]
    fn transport_failure_becomes_transport_error() {
        let response = HttpResponse::transport_failure("connection refused");
        let err = client().parse_list_posts(response).unwrap_err();
        assert!(matches!(err, ApiError::Transport(ref m) if m == "connection refused"));
    }
}
