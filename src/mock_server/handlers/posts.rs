//! Post endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::{check_auth, wp_error};
use crate::mock_server::state::MockState;

/// Body for creating a post.
#[derive(Debug, Deserialize)]
pub struct CreatePostBody {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
    pub featured_media: Option<u64>,
}

/// Body for updating a post.
#[derive(Debug, Deserialize)]
pub struct UpdatePostBody {
    pub featured_media: Option<u64>,
}

fn invalid_post_id() -> Response {
    wp_error(StatusCode::NOT_FOUND, "rest_post_invalid_id", "Invalid post ID.")
}

/// POST /wp-json/wp/v2/posts
pub async fn create_post(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Json(body): Json<CreatePostBody>,
) -> Response {
    let mut state = state.write().await;
    if let Err(rejection) = check_auth(&state, &headers) {
        return rejection;
    }

    let status = body.status.unwrap_or_else(|| "draft".to_string());
    if !matches!(status.as_str(), "draft" | "publish" | "pending" | "private" | "future") {
        return wp_error(
            StatusCode::BAD_REQUEST,
            "rest_invalid_param",
            "Invalid parameter(s): status",
        );
    }

    let featured_media = body.featured_media.unwrap_or(0);
    if featured_media != 0 && !state.media.contains_key(&featured_media) {
        return wp_error(
            StatusCode::BAD_REQUEST,
            "rest_invalid_featured_media",
            "Invalid featured media ID.",
        );
    }

    let base_url = state.base_url.clone();
    let post = state.create_post(
        body.title.unwrap_or_default(),
        body.content.unwrap_or_default(),
        status,
        featured_media,
    );

    (StatusCode::CREATED, Json(post.to_wire(&base_url))).into_response()
}

/// GET /wp-json/wp/v2/posts/{id}
pub async fn get_post(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = check_auth(&state, &headers) {
        return rejection;
    }

    match state.posts.get(&id) {
        Some(post) => (StatusCode::OK, Json(post.to_wire(&state.base_url))).into_response(),
        None => invalid_post_id(),
    }
}

/// POST /wp-json/wp/v2/posts/{id}
pub async fn update_post(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(body): Json<UpdatePostBody>,
) -> Response {
    let mut state = state.write().await;
    if let Err(rejection) = check_auth(&state, &headers) {
        return rejection;
    }

    let Some(media_id) = body.featured_media else {
        return match state.posts.get(&id) {
            Some(post) => (StatusCode::OK, Json(post.to_wire(&state.base_url))).into_response(),
            None => invalid_post_id(),
        };
    };

    if media_id != 0 && !state.media.contains_key(&media_id) {
        return wp_error(
            StatusCode::BAD_REQUEST,
            "rest_invalid_featured_media",
            "Invalid featured media ID.",
        );
    }

    let base_url = state.base_url.clone();
    match state.set_featured_media(id, media_id) {
        Some(post) => (StatusCode::OK, Json(post.to_wire(&base_url))).into_response(),
        None => invalid_post_id(),
    }
}
