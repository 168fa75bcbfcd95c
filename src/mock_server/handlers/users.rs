//! Users endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use super::check_auth;
use crate::mock_server::state::MockState;

/// GET /wp-json/wp/v2/users/me
pub async fn get_current_user(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = check_auth(&state, &headers) {
        return rejection;
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "id": state.user.id,
            "name": state.user.name,
            "slug": crate::mock_server::state::slugify(&state.user.name),
        })),
    )
        .into_response()
}
