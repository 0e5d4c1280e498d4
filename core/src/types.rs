//! Domain DTOs for the blog posts API.
//!
//! # Design
//! `Post` models the fields the client reads and keeps every other field the
//! server sends in `extra`, so server-side attributes survive a fetch or an
//! update untouched. Input types skip absent optional fields entirely; the
//! server decides what an omitted slug or field means.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A blog post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub slug: String,
    pub title: String,
    /// Empty when the server's post shape has no `content` field.
    #[serde(default)]
    pub content: String,
    /// Empty when the server names the author some other way (kept in `extra`).
    #[serde(default)]
    pub author: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request payload for creating a post. Without a slug the server derives one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    pub author: String,
    /// An empty slug is never sent; the server derives one instead.
    #[serde(default, skip_serializing_if = "slug_is_empty")]
    pub slug: Option<String>,
}

fn slug_is_empty(slug: &Option<String>) -> bool {
    slug.as_deref().unwrap_or_default().is_empty()
}

impl CreatePost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
            slug: None,
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }
}

/// Partial update payload. Only present fields are sent; `extra` carries any
/// additional fields verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdatePost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UpdatePost {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }
}
