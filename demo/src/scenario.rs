//! The scripted walkthrough: create, list, fetch, update, seed, list again.
//!
//! Every step runs regardless of earlier failures, except the fetch and the
//! update, which need the post an earlier step created.

use blog_core::{CreatePost, Post, UpdatePost};
use tracing::info;

use crate::api::BlogApiClient;
use crate::config::DemoConfig;
use crate::samples::seed_sample_posts;
use crate::transport::Transport;

const BASIC_CONTENT: &str = r#"# A post written from Rust

This post was created by calling the blog API from a Rust program.

## Why Rust

- **Readable code**: types document intent
- **Rich crates**: HTTP, JSON and logging out of the box
- **Community**: an active, welcoming ecosystem

```rust
let client = BlogApiClient::new(&ClientConfig::default());
client.create_post(&CreatePost::new("Title", "Body", "Author"))?;
```

Happy hacking!"#;

const CUSTOM_CONTENT: &str = r#"# API usage guide

## Getting an API key

1. Sign in to the admin console
2. Open the API key page
3. Create a new key
4. Grant the permissions you need

## Example

Choosing a custom slug, like this post does, gives you an SEO-friendly URL.

**URL**: `/blog/rust-api-guide`"#;

const UPDATE_NOTES: &str = "\n\n## Update notes\n\nThis post was updated by the Rust API client.";

pub const CUSTOM_SLUG: &str = "rust-api-guide";

/// Outcome of each step; `None` means the step failed or was skipped.
#[derive(Debug, Default)]
pub struct DemoReport {
    pub basic: Option<Post>,
    pub custom: Option<Post>,
    pub listed: Option<Vec<Post>>,
    pub fetched: Option<Post>,
    pub updated: Option<Post>,
    pub seeded: Vec<Post>,
    pub final_listing: Option<Vec<Post>>,
}

pub fn basic_post() -> CreatePost {
    CreatePost::new("A post written from Rust", BASIC_CONTENT, "Rust Script")
}

pub fn custom_slug_post() -> CreatePost {
    CreatePost::new("A Rust post with a custom slug", CUSTOM_CONTENT, "API Developer")
        .with_slug(CUSTOM_SLUG)
}

pub fn run<T: Transport>(client: &BlogApiClient<T>, config: &DemoConfig) -> DemoReport {
    let mut report = DemoReport::default();

    // 1. basic post, slug left to the server
    report.basic = client.create_post(&basic_post()).ok();
    if let Some(post) = &report.basic {
        info!(url = %config.post_url(&post.slug), "post published");
    }

    // 2. post with a custom slug
    report.custom = client.create_post(&custom_slug_post()).ok();
    if let Some(post) = &report.custom {
        info!(url = %config.post_url(&post.slug), "post published");
    }

    // 3. listing
    report.listed = client.list_posts().ok();

    // 4. fetch the basic post back by slug
    if let Some(post) = &report.basic {
        report.fetched = client.get_post_by_slug(&post.slug).ok();
    }

    // 5. append update notes to the custom post
    if let Some(post) = &report.custom {
        let updates = UpdatePost::content(format!("{}{UPDATE_NOTES}", post.content));
        report.updated = client.update_post(&post.slug, &updates).ok();
    }

    // 6. paced sample seeding
    report.seeded = seed_sample_posts(client, config.pacing);
    info!(created = report.seeded.len(), "sample posts created");

    // 7. final listing
    info!("final post listing");
    report.final_listing = client.list_posts().ok();

    info!(url = %config.blog_url(), "all steps finished; view the blog");
    report
}
