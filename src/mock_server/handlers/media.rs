//! Media endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use super::{check_auth, wp_error};
use crate::mock_server::state::MockState;

/// POST /wp-json/wp/v2/media
///
/// Accepts the multipart `file`, `title` and `alt_text` fields. Files sent as
/// `application/octet-stream` are refused like an unknown type would be.
pub async fn upload_media(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    if let Err(rejection) = check_auth(&*state.read().await, &headers) {
        return rejection;
    }

    let mut file: Option<(String, String, usize)> = None;
    let mut title = None;
    let mut alt_text = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let mime = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let size = field.bytes().await.map(|b| b.len()).unwrap_or(0);
                file = Some((file_name, mime, size));
            }
            Some("title") => title = field.text().await.ok(),
            Some("alt_text") => alt_text = field.text().await.ok(),
            _ => {}
        }
    }

    let Some((file_name, mime_type, size)) = file else {
        return wp_error(StatusCode::BAD_REQUEST, "rest_upload_no_data", "No data supplied.");
    };

    if !mime_type.starts_with("image/") {
        return wp_error(
            StatusCode::BAD_REQUEST,
            "rest_upload_sideload_error",
            "Sorry, you are not allowed to upload this file type.",
        );
    }

    let mut state = state.write().await;
    let base_url = state.base_url.clone();
    let title = title.unwrap_or_else(|| file_name.clone());
    let alt_text = alt_text.unwrap_or_default();
    let media = state.create_media(title, alt_text, file_name, mime_type, size);

    (StatusCode::CREATED, Json(media.to_wire(&base_url))).into_response()
}
