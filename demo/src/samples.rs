//! Fixed sample posts and the paced seeding loop.

use std::thread;
use std::time::Duration;

use blog_core::{CreatePost, Post};
use tracing::info;

use crate::api::BlogApiClient;
use crate::transport::Transport;

const RUST_GUIDE: &str = r#"# Rust Beginner Guide

Rust is a systems language that is friendly to careful beginners.

## Basic syntax

```rust
fn main() {
    let name = "Rust";
    println!("Hello, {name}!");
}
```

## What stands out

- **Ownership**: memory safety without a garbage collector
- **Rich ecosystem**: crates for almost every need
- **Cross-platform**: Windows, macOS and Linux

## Where it is used

1. Command-line tools
2. Web services (axum, actix-web)
3. Embedded systems
4. WebAssembly"#;

const API_DESIGN: &str = r#"# API Design Best Practices

Key points for designing a good API.

## 1. RESTful principles

### Resource-oriented URLs
```
GET    /api/posts         # list posts
POST   /api/posts         # create a post
GET    /api/posts/{slug}  # fetch one post
PUT    /api/posts/{slug}  # update a post
DELETE /api/posts/{slug}  # delete a post
```

### Meaningful status codes
- `200 OK`: success
- `201 Created`: resource created
- `400 Bad Request`: invalid request
- `401 Unauthorized`: authentication failed
- `404 Not Found`: no such resource
- `500 Internal Server Error`: server failure

## 2. Authentication and security

- API key authentication
- Rate limiting
- HTTPS everywhere
- Input validation

## 3. Consistent response shape

```json
{
  "success": true,
  "data": {},
  "message": "done"
}
```"#;

const WEB_TOOLS: &str = r#"# Handy Web Development Tools

Tools that make web development efficient.

## Frontend

- **React**: building user interfaces
- **Vite**: fast dev server
- **Webpack**: powerful bundler

## Backend

```rust
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello, World!" }))
}

fn app() -> Router {
    Router::new().route("/api/hello", get(hello))
}
```

## Productivity

1. **Git**: version control
2. **VS Code**: editor
3. **curl**: API testing
4. **Docker**: containers
5. **GitHub Actions**: CI/CD"#;

/// Three posts; only the first picks its own slug.
pub fn sample_posts() -> Vec<CreatePost> {
    vec![
        CreatePost::new("Rust Beginner Guide", RUST_GUIDE, "Rust Expert")
            .with_slug("rust-beginner-guide"),
        CreatePost::new("API Design Best Practices", API_DESIGN, "API Architect"),
        CreatePost::new("Handy Web Development Tools", WEB_TOOLS, "Full Stack Developer"),
    ]
}

/// Create every sample post in order, sleeping `pacing` between requests.
///
/// Failed creations are skipped; the returned posts are the ones the server
/// accepted, in creation order.
pub fn seed_sample_posts<T: Transport>(client: &BlogApiClient<T>, pacing: Duration) -> Vec<Post> {
    let samples = sample_posts();
    info!(count = samples.len(), "seeding sample posts");

    let mut created = Vec::with_capacity(samples.len());
    for (i, sample) in samples.iter().enumerate() {
        if i > 0 && !pacing.is_zero() {
            thread::sleep(pacing);
        }
        if let Ok(post) = client.create_post(sample) {
            created.push(post);
        }
    }
    created
}
