use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub status: String,
}

#[derive(Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub slug: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub slug: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostEnvelope {
    pub post: Post,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostsEnvelope {
    pub posts: Vec<Post>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

/// Posts in insertion order plus the one accepted API key.
#[derive(Clone)]
pub struct AppState {
    posts: Arc<RwLock<Vec<Post>>>,
    api_key: Arc<str>,
}

type Failure = (StatusCode, Json<ErrorBody>);

fn failure(status: StatusCode, message: &str) -> Failure {
    (
        status,
        Json(ErrorBody {
            success: false,
            error: message.to_string(),
        }),
    )
}

pub fn app(api_key: &str) -> Router {
    let state = AppState {
        posts: Arc::new(RwLock::new(Vec::new())),
        api_key: Arc::from(api_key),
    };
    let posts = Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{slug}", get(get_post).put(update_post).delete(delete_post));
    Router::new().nest("/api", posts).with_state(state)
}

pub async fn run(listener: TcpListener, api_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api_key)).await
}

/// Lowercase ASCII alphanumerics joined by `-`; random when nothing survives.
pub fn slugify(title: &str) -> String {
    let mut slug = String::new();
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        format!("post-{}", &Uuid::new_v4().simple().to_string()[..8])
    } else {
        slug.to_string()
    }
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), Failure> {
    match headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok()) {
        Some(key) if key == &*state.api_key => Ok(()),
        Some(_) => Err(failure(StatusCode::UNAUTHORIZED, "invalid API key")),
        None => Err(failure(StatusCode::UNAUTHORIZED, "API key required")),
    }
}

fn unique_slug(posts: &[Post], base: String) -> String {
    let mut candidate = base.clone();
    let mut n = 2;
    while posts.iter().any(|p| p.slug == candidate) {
        candidate = format!("{base}-{n}");
        n += 1;
    }
    candidate
}

async fn list_posts(State(state): State<AppState>) -> Json<PostsEnvelope> {
    let posts = state.posts.read().await;
    Json(PostsEnvelope {
        posts: posts.clone(),
    })
}

async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<CreatePost>,
) -> Result<(StatusCode, Json<PostEnvelope>), Failure> {
    authorize(&state, &headers)?;
    if [&input.title, &input.content, &input.author]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            "title, content and author are required",
        ));
    }

    let mut posts = state.posts.write().await;
    let slug = match input.slug.filter(|slug| !slug.trim().is_empty()) {
        Some(slug) => {
            if posts.iter().any(|p| p.slug == slug) {
                return Err(failure(StatusCode::CONFLICT, "a post with this slug already exists"));
            }
            slug
        }
        None => unique_slug(&posts, slugify(&input.title)),
    };
    let post = Post {
        id: Uuid::new_v4().to_string(),
        slug,
        title: input.title,
        content: input.content,
        author: input.author,
        status: "draft".to_string(),
    };
    posts.push(post.clone());
    Ok((StatusCode::CREATED, Json(PostEnvelope { post })))
}

async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PostEnvelope>, Failure> {
    let posts = state.posts.read().await;
    posts
        .iter()
        .find(|p| p.slug == slug)
        .cloned()
        .map(|post| Json(PostEnvelope { post }))
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "post not found"))
}

async fn update_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    Json(input): Json<UpdatePost>,
) -> Result<Json<PostEnvelope>, Failure> {
    authorize(&state, &headers)?;
    let mut posts = state.posts.write().await;
    if let Some(new_slug) = &input.slug {
        if *new_slug != slug && posts.iter().any(|p| p.slug == *new_slug) {
            return Err(failure(StatusCode::CONFLICT, "a post with this slug already exists"));
        }
    }
    let post = posts
        .iter_mut()
        .find(|p| p.slug == slug)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "post not found"))?;
    if let Some(title) = input.title {
        post.title = title;
    }
    if let Some(content) = input.content {
        post.content = content;
    }
    if let Some(author) = input.author {
        post.author = author;
    }
    if let Some(new_slug) = input.slug {
        post.slug = new_slug;
    }
    Ok(Json(PostEnvelope { post: post.clone() }))
}

async fn delete_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, Failure> {
    authorize(&state, &headers)?;
    let mut posts = state.posts.write().await;
    let index = posts
        .iter()
        .position(|p| p.slug == slug)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "post not found"))?;
    posts.remove(index);
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "post deleted",
    })))
}
