//! WordPress publishing toolkit.
//!
//! Two independent pieces share this crate:
//!
//! - A client for the WordPress REST API that uploads media, creates posts,
//!   sets featured images and snapshots post metadata. Operations are
//!   traits ([`Create`], [`Get`], [`Update`]) implemented by the model types,
//!   with free-function shortcuts for the common calls.
//! - An image crop tool: [`compute_crop_box`] finds the centered box for an
//!   aspect ratio, and [`crop_image`] applies it and re-encodes the file.
//!
//! # Quick Start
//!
//! ```no_run
//! use presskit::{Credentials, PostStatus, WpClient};
//!
//! #[tokio::main]
//! async fn main() -> presskit::Result<()> {
//!     // Read WP_SITE_URL, WP_USERNAME and WP_APP_PASSWORD
//!     let credentials = Credentials::from_env()?;
//!     let client = WpClient::new(&credentials)?;
//!
//!     let media = presskit::upload_media(&client, "hero.png", None).await?;
//!     let post = presskit::create_post(
//!         &client,
//!         "Hello",
//!         "<p>First post</p>",
//!         PostStatus::Draft,
//!         Some(media.id),
//!     )
//!     .await?;
//!
//!     let meta = presskit::fetch_post_metadata(&client, post.id).await?;
//!     meta.save(std::path::Path::new("posts/hello"))?;
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! [`Credentials::from_env`] reads (after loading `.env` if present):
//!
//! - `WP_SITE_URL` - Site base URL (e.g. `https://example.com`)
//! - `WP_USERNAME` - Account username
//! - `WP_APP_PASSWORD` - Application password

pub mod cli;
mod client;
mod convert;
mod credentials;
mod crop;
mod error;
mod models;
mod output;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export core types
pub use client::{
    basic_auth_value, WpClient, CREATE_POST_TIMEOUT, METADATA_TIMEOUT, UPLOAD_TIMEOUT,
};
pub use credentials::{Credentials, APP_PASSWORD_VAR, SITE_URL_VAR, USERNAME_VAR};
pub use error::{
    ApiFailure, Operation, PressError, Result, AUTH_ERROR_BODY_LIMIT, ERROR_BODY_LIMIT,
};
pub use output::PrettyPrint;

// Re-export traits
pub use traits::{Create, Get, Update};

// Re-export models
pub use models::{
    // Media types
    content_type_for,
    title_from_stem,
    Media,
    MediaUpload,
    // Post types
    FeaturedImage,
    FeaturedMediaParams,
    Post,
    PostParams,
    PostStatus,
    // Metadata types
    ContentFields,
    DateFields,
    PostMetadata,
    SeoFields,
    WordpressFields,
    META_FILE_NAME,
    SEO_DESCRIPTION_KEY,
    SEO_TITLE_KEY,
    // User types
    CurrentUser,
};

// Re-export convenience functions
pub use models::{
    create_post, fetch_post_metadata, resolve_content, set_featured_image, upload_media,
};

// Re-export image tooling
pub use convert::{crop_image, default_output_path, CropReport, DEFAULT_QUALITY};
pub use crop::{compute_crop_box, AspectRatio, CropBox};
