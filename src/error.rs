//! Error types for CMS and image operations.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Maximum characters of a raw response body kept as an error message.
pub const ERROR_BODY_LIMIT: usize = 500;

/// Tighter limit used for the identity pre-flight.
pub const AUTH_ERROR_BODY_LIMIT: usize = 200;

/// A non-success response from the CMS, reduced to status and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    /// HTTP status code returned by the server.
    pub status: u16,
    /// The server's `message` field, or the head of the raw body.
    pub message: String,
}

impl ApiFailure {
    /// Build a failure from a status code and the raw response body.
    ///
    /// Reads the `message` field when the body is a JSON object carrying one,
    /// otherwise keeps the first `limit` characters of the body. HTML error
    /// pages from a misconfigured server end up truncated here.
    pub fn from_body(status: u16, body: &str, limit: usize) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| match json.get("message")? {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Null => None,
                other => Some(other.to_string()),
            })
            .unwrap_or_else(|| body.chars().take(limit).collect());

        Self { status, message }
    }

    /// Consume a response and extract its failure detail.
    pub async fn from_response(response: reqwest::Response, limit: usize) -> Self {
        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => Self::from_body(status, &body, limit),
            Err(_) => Self {
                status,
                message: format!("HTTP {status}"),
            },
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}): {}", self.status, self.message)
    }
}

/// The CMS operation a remote failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    UploadMedia,
    CreatePost,
    SetFeaturedImage,
    FetchPost,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::UploadMedia => "Upload failed",
            Operation::CreatePost => "Failed to create post",
            Operation::SetFeaturedImage => "Failed to set featured image",
            Operation::FetchPost => "Failed to fetch post",
        };
        f.write_str(label)
    }
}

/// Errors that can occur while running presskit operations.
#[derive(Debug, Error)]
pub enum PressError {
    /// One or more credential variables are unset or empty.
    #[error("Missing required configuration: {}", .0.join(", "))]
    ConfigMissing(Vec<&'static str>),

    /// Configuration is present but unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// User input rejected before any side effect.
    #[error("{0}")]
    InvalidInput(String),

    /// An input file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Aspect ratio string is not `W:H` with positive integers.
    #[error("Invalid aspect ratio format: {0} (use W:H)")]
    InvalidAspectRatio(String),

    /// The identity pre-flight was rejected.
    #[error("Authentication failed {0}")]
    AuthenticationFailed(ApiFailure),

    /// A CMS endpoint answered with an unexpected status.
    #[error("{operation} {failure}")]
    Api {
        operation: Operation,
        failure: ApiFailure,
    },

    /// HTTP transport error (connection refused, timeout, ...).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Local file I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decode or encode error.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl PressError {
    /// The remote failure detail, for authentication and API errors.
    pub fn api_failure(&self) -> Option<&ApiFailure> {
        match self {
            PressError::AuthenticationFailed(failure) | PressError::Api { failure, .. } => {
                Some(failure)
            }
            _ => None,
        }
    }

    /// HTTP status code, when the error came from the server.
    pub fn status_code(&self) -> Option<u16> {
        self.api_failure().map(|f| f.status)
    }
}

/// Result type alias for presskit operations.
pub type Result<T> = core::result::Result<T, PressError>;
