//! WordPress REST API client.
//!
//! Low-level HTTP client that handles authentication and raw requests.
//! Higher-level operations are implemented via traits on model types.

use std::sync::Arc;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use url::Url;

use crate::credentials::Credentials;
use crate::error::{ApiFailure, Operation, PressError, Result, AUTH_ERROR_BODY_LIMIT, ERROR_BODY_LIMIT};
use crate::models::CurrentUser;

const API_PREFIX: &str = "wp-json/wp/v2/";
const USER_AGENT: &str = concat!("presskit/", env!("CARGO_PKG_VERSION"));

/// Timeout for small JSON exchanges (identity, fetch, featured image).
pub const METADATA_TIMEOUT: Duration = Duration::from_secs(30);
/// Timeout for post creation, whose body carries the full content.
pub const CREATE_POST_TIMEOUT: Duration = Duration::from_secs(60);
/// Timeout for binary media uploads.
pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(120);

/// Build the `Authorization` value for HTTP Basic auth.
pub fn basic_auth_value(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

/// Low-level WordPress API client.
///
/// Every request carries the Basic `Authorization` header derived from the
/// [`Credentials`] it was built with. Operations such as uploading media or
/// creating posts live on the model types via the `Create`, `Get` and
/// `Update` traits.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use presskit::{Credentials, WpClient};
///
/// # fn example() -> presskit::Result<()> {
/// let credentials = Credentials::from_env()?;
/// let client = WpClient::new(&credentials)?;
/// println!("{}", client.api_root());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct WpClient {
    http: Client,
    api_root: Arc<Url>,
    auth: HeaderValue,
}

impl std::fmt::Debug for WpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WpClient")
            .field("api_root", &self.api_root.as_str())
            .finish_non_exhaustive()
    }
}

impl WpClient {
    /// Create a client for the site described by `credentials`.
    ///
    /// # Errors
    ///
    /// Returns an error if the site URL is invalid.
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let root = format!(
            "{}/{API_PREFIX}",
            credentials.site_url().trim_end_matches('/')
        );
        let api_root = Url::parse(&root)?;

        let mut auth = HeaderValue::from_str(&basic_auth_value(
            credentials.username(),
            credentials.app_password(),
        ))
        .map_err(|e| PressError::InvalidConfig(format!("unusable credentials: {e}")))?;
        auth.set_sensitive(true);

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(PressError::HttpError)?;

        Ok(Self {
            http,
            api_root: Arc::new(api_root),
            auth,
        })
    }

    /// The REST API root, e.g. `https://example.com/wp-json/wp/v2/`.
    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    /// Make an authenticated GET request.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str, timeout: Duration) -> Result<Response> {
        let url = self.api_root.join(path)?;

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, self.auth.clone())
            .timeout(timeout)
            .send()
            .await
            .map_err(PressError::HttpError)?;

        tracing::debug!(status = response.status().as_u16(), "GET complete");
        Ok(response)
    }

    /// Make an authenticated POST request with a JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        timeout: Duration,
    ) -> Result<Response> {
        let url = self.api_root.join(path)?;

        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, self.auth.clone())
            .json(body)
            .timeout(timeout)
            .send()
            .await
            .map_err(PressError::HttpError)?;

        tracing::debug!(status = response.status().as_u16(), "POST complete");
        Ok(response)
    }

    /// Make an authenticated multipart POST request.
    #[tracing::instrument(skip(self, form))]
    pub async fn post_multipart(
        &self,
        path: &str,
        form: Form,
        timeout: Duration,
    ) -> Result<Response> {
        let url = self.api_root.join(path)?;

        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, self.auth.clone())
            .multipart(form)
            .timeout(timeout)
            .send()
            .await
            .map_err(PressError::HttpError)?;

        tracing::debug!(
            status = response.status().as_u16(),
            content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("unknown"),
            "multipart POST complete"
        );
        Ok(response)
    }

    /// Check the identity endpoint before an expensive request.
    ///
    /// # Errors
    ///
    /// Returns [`PressError::AuthenticationFailed`] on any status but 200.
    #[tracing::instrument(skip(self))]
    pub async fn verify_identity(&self) -> Result<CurrentUser> {
        let response = self.get("users/me", METADATA_TIMEOUT).await?;

        if response.status() != StatusCode::OK {
            let failure = ApiFailure::from_response(response, AUTH_ERROR_BODY_LIMIT).await;
            return Err(PressError::AuthenticationFailed(failure));
        }

        let user: CurrentUser = response.json().await.map_err(PressError::HttpError)?;
        tracing::info!(name = %user.display_name(), "authenticated");
        Ok(user)
    }

    /// Pass the response through when it has the `expected` status.
    ///
    /// Anything else is turned into [`PressError::Api`] for `operation`.
    pub async fn expect_status(
        response: Response,
        expected: StatusCode,
        operation: Operation,
    ) -> Result<Response> {
        if response.status() == expected {
            return Ok(response);
        }

        let failure = ApiFailure::from_response(response, ERROR_BODY_LIMIT).await;
        tracing::warn!(%operation, status = failure.status, "request rejected");
        Err(PressError::Api { operation, failure })
    }
}
