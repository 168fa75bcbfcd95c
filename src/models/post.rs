//! Post model and trait implementations.

use std::path::Path;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use clap::ValueEnum;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::client::{WpClient, CREATE_POST_TIMEOUT, METADATA_TIMEOUT};
use crate::error::{Operation, PressError, Result};
use crate::models::rendered;
use crate::traits::{Create, Get, Update};

/// Status a post can be created with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Publish,
    Pending,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Publish => "publish",
            PostStatus::Pending => "pending",
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A WordPress post.
///
/// Title and excerpt are flattened from their `{"rendered": ...}` wire form;
/// the excerpt is trimmed. Local dates carry no offset, GMT dates may be
/// null for unscheduled drafts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Post ID.
    pub id: u64,

    /// Rendered title.
    #[serde(deserialize_with = "rendered::text")]
    pub title: String,

    /// Status as reported by the server (`draft`, `publish`, `private`, ...).
    pub status: String,

    /// Permalink.
    pub link: String,

    pub slug: String,

    /// Featured media ID, 0 when none is set.
    #[serde(default)]
    pub featured_media: u64,

    /// Creation time in the site's timezone.
    pub date: NaiveDateTime,

    /// Creation time in UTC.
    #[serde(default)]
    pub date_gmt: Option<NaiveDateTime>,

    /// Last modification in the site's timezone.
    pub modified: NaiveDateTime,

    /// Last modification in UTC.
    #[serde(default)]
    pub modified_gmt: Option<NaiveDateTime>,

    /// Rendered excerpt, trimmed.
    #[serde(default, deserialize_with = "rendered::trimmed")]
    pub excerpt: String,

    /// Author user ID.
    #[serde(default)]
    pub author: Option<u64>,

    /// Category IDs.
    #[serde(default)]
    pub categories: Vec<u64>,

    /// Tag IDs.
    #[serde(default)]
    pub tags: Vec<u64>,

    /// Registered custom meta. An empty list on sites with none registered.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub meta: serde_json::Value,
}

impl Post {
    /// A string value from the custom meta map.
    pub fn meta_str(&self, key: &str) -> Option<&str> {
        self.meta.get(key).and_then(|v| v.as_str())
    }

    /// Whether a featured image is set.
    pub fn has_featured_media(&self) -> bool {
        self.featured_media != 0
    }
}

/// Body for creating a post.
#[derive(Debug, Clone, Serialize)]
pub struct PostParams {
    pub title: String,
    pub content: String,
    pub status: PostStatus,

    /// Omitted from the request when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_media: Option<u64>,
}

impl PostParams {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            status: PostStatus::default(),
            featured_media: None,
        }
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the featured media; `None` and `Some(0)` both leave it out.
    pub fn with_featured_media(mut self, media_id: Option<u64>) -> Self {
        self.featured_media = media_id.filter(|&id| id != 0);
        self
    }
}

/// Body for setting a post's featured image.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeaturedMediaParams {
    pub featured_media: u64,
}

/// Result of setting a featured image.
///
/// Decoded straight from the update response, which only has to carry the
/// post ID, the featured media ID and the title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedImage {
    #[serde(rename(deserialize = "id"))]
    pub post_id: u64,
    pub featured_media: u64,
    #[serde(deserialize_with = "rendered::text")]
    pub title: String,
}

#[async_trait]
impl Create for Post {
    type Params = PostParams;

    #[tracing::instrument(skip(client, params), fields(title = %params.title, status = %params.status))]
    async fn create(client: &WpClient, params: PostParams) -> Result<Self> {
        let response = client
            .post_json("posts", &params, CREATE_POST_TIMEOUT)
            .await?;
        let response =
            WpClient::expect_status(response, StatusCode::CREATED, Operation::CreatePost).await?;

        let post: Post = response.json().await.map_err(PressError::HttpError)?;
        Ok(post)
    }
}

#[async_trait]
impl Get for Post {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &WpClient, id: u64) -> Result<Self> {
        let path = format!("posts/{id}");

        let response = client.get(&path, METADATA_TIMEOUT).await?;
        let response =
            WpClient::expect_status(response, StatusCode::OK, Operation::FetchPost).await?;

        let post: Post = response.json().await.map_err(PressError::HttpError)?;
        Ok(post)
    }
}

#[async_trait]
impl Update for FeaturedImage {
    type Id = u64;
    type Params = FeaturedMediaParams;

    #[tracing::instrument(skip(client))]
    async fn update(client: &WpClient, id: u64, params: Self::Params) -> Result<Self> {
        let path = format!("posts/{id}");

        let response = client.post_json(&path, &params, METADATA_TIMEOUT).await?;
        let response =
            WpClient::expect_status(response, StatusCode::OK, Operation::SetFeaturedImage)
                .await?;

        let featured: FeaturedImage = response.json().await.map_err(PressError::HttpError)?;
        Ok(featured)
    }
}

/// Pick the body for a new post.
///
/// A file, when given, wins over inline content and must exist. Empty or
/// absent content is rejected before anything is sent.
pub async fn resolve_content(content: Option<String>, file: Option<&Path>) -> Result<String> {
    let content = match file {
        Some(path) => {
            if !path.exists() {
                return Err(PressError::FileNotFound(path.to_path_buf()));
            }
            Some(tokio::fs::read_to_string(path).await?)
        }
        None => content,
    };

    content
        .filter(|c| !c.is_empty())
        .ok_or_else(|| PressError::InvalidInput("Must provide --content or --file".to_string()))
}

/// Create a post. `featured_media` of `None` or 0 is left out of the request.
pub async fn create_post(
    client: &WpClient,
    title: &str,
    content: &str,
    status: PostStatus,
    featured_media: Option<u64>,
) -> Result<Post> {
    let params = PostParams::new(title, content)
        .with_status(status)
        .with_featured_media(featured_media);
    Post::create(client, params).await
}

/// Point a post's featured image at `media_id`.
pub async fn set_featured_image(
    client: &WpClient,
    post_id: u64,
    media_id: u64,
) -> Result<FeaturedImage> {
    FeaturedImage::update(
        client,
        post_id,
        FeaturedMediaParams {
            featured_media: media_id,
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::wire_post;

    #[test]
    fn test_post_from_wire_format() {
        let post: Post = serde_json::from_value(wire_post()).unwrap();

        assert_eq!(post.id, 1234);
        assert_eq!(post.title, "Hello World");
        assert_eq!(post.excerpt, "<p>Hi</p>");
        assert_eq!(post.author, Some(3));
        assert_eq!(post.categories, vec![1]);
        assert!(!post.has_featured_media());
        assert_eq!(post.date.to_string(), "2026-01-13 09:30:00");
        assert!(post.meta_str("_seopress_titles_title").is_none());
    }

    #[test]
    fn test_post_tolerates_null_gmt_and_missing_optionals() {
        let mut wire = wire_post();
        wire["date_gmt"] = serde_json::Value::Null;
        let obj = wire.as_object_mut().unwrap();
        obj.remove("author");
        obj.remove("tags");
        obj.remove("meta");

        let post: Post = serde_json::from_value(wire).unwrap();
        assert!(post.date_gmt.is_none());
        assert!(post.author.is_none());
        assert!(post.tags.is_empty());
    }

    #[test]
    fn test_post_params_omit_unset_featured_media() {
        let params = PostParams::new("T", "C");
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "T", "content": "C", "status": "draft"})
        );

        let params = PostParams::new("T", "C").with_featured_media(Some(0));
        assert!(params.featured_media.is_none());

        let params = PostParams::new("T", "C")
            .with_status(PostStatus::Publish)
            .with_featured_media(Some(42));
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["status"], "publish");
        assert_eq!(json["featured_media"], 42);
    }

    #[test]
    fn test_featured_image_from_full_post() {
        let mut wire = wire_post();
        wire["featured_media"] = serde_json::json!(42);
        let featured: FeaturedImage = serde_json::from_value(wire).unwrap();

        assert_eq!(
            featured,
            FeaturedImage {
                post_id: 1234,
                featured_media: 42,
                title: "Hello World".to_string(),
            }
        );
    }

    #[test]
    fn test_featured_image_needs_only_three_fields() {
        let featured: FeaturedImage = serde_json::from_value(serde_json::json!({
            "id": 7,
            "featured_media": 42,
            "title": {"rendered": "Short"}
        }))
        .unwrap();

        assert_eq!(featured.post_id, 7);
        assert_eq!(featured.featured_media, 42);
        assert_eq!(featured.title, "Short");
    }
}
