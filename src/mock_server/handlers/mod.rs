//! HTTP request handlers for the mock server.

pub mod media;
pub mod posts;
pub mod users;

pub use media::*;
pub use posts::*;
pub use users::*;

use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::mock_server::state::MockState;

/// WordPress-style error body.
pub(crate) fn wp_error(status: StatusCode, code: &str, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "code": code,
            "message": message,
            "data": {"status": status.as_u16()}
        })),
    )
        .into_response()
}

/// Reject the request unless its credentials match the state's.
pub(crate) fn check_auth(state: &MockState, headers: &HeaderMap) -> Result<(), Response> {
    let header = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    if state.is_authorized(header) {
        Ok(())
    } else {
        Err(wp_error(
            StatusCode::UNAUTHORIZED,
            "incorrect_password",
            "The provided password is an invalid application password.",
        ))
    }
}
