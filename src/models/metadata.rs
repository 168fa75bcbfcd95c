//! Post metadata document, saved as `meta.json` next to a post's sources.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::WpClient;
use crate::error::Result;
use crate::models::Post;
use crate::traits::Get;

/// File name written by [`PostMetadata::save`].
pub const META_FILE_NAME: &str = "meta.json";

/// Custom-meta key holding the SEO title.
pub const SEO_TITLE_KEY: &str = "_seopress_titles_title";
/// Custom-meta key holding the SEO description.
pub const SEO_DESCRIPTION_KEY: &str = "_seopress_titles_desc";

/// Snapshot of a post's CMS-side state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMetadata {
    pub wordpress: WordpressFields,
    pub content: ContentFields,
    pub dates: DateFields,
    pub seo: SeoFields,
    /// When this document was built.
    pub meta_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordpressFields {
    pub post_id: u64,
    pub slug: String,
    pub status: String,
    pub link: String,
    pub featured_media_id: u64,
    pub author_id: Option<u64>,
    pub categories: Vec<u64>,
    pub tags: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentFields {
    pub title: String,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFields {
    pub created: NaiveDateTime,
    pub modified: NaiveDateTime,
    pub created_gmt: Option<NaiveDateTime>,
    pub modified_gmt: Option<NaiveDateTime>,
}

/// SEO fields. Empty strings when unknown.
///
/// The open-graph pair has no source in the post payload and stays empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoFields {
    pub meta_title: String,
    pub meta_description: String,
    pub og_title: String,
    pub og_description: String,
}

impl SeoFields {
    /// Read the SEO title and description from the post's custom meta.
    pub fn from_post_meta(post: &Post) -> Self {
        Self {
            meta_title: post.meta_str(SEO_TITLE_KEY).unwrap_or_default().to_string(),
            meta_description: post
                .meta_str(SEO_DESCRIPTION_KEY)
                .unwrap_or_default()
                .to_string(),
            ..Self::default()
        }
    }
}

impl PostMetadata {
    /// Build the document for `post`, stamped with the current UTC time.
    pub fn from_post(post: &Post, seo: SeoFields) -> Self {
        Self {
            wordpress: WordpressFields {
                post_id: post.id,
                slug: post.slug.clone(),
                status: post.status.clone(),
                link: post.link.clone(),
                featured_media_id: post.featured_media,
                author_id: post.author,
                categories: post.categories.clone(),
                tags: post.tags.clone(),
            },
            content: ContentFields {
                title: post.title.clone(),
                excerpt: post.excerpt.clone(),
            },
            dates: DateFields {
                created: post.date,
                modified: post.modified,
                created_gmt: post.date_gmt,
                modified_gmt: post.modified_gmt,
            },
            seo,
            meta_updated: Utc::now(),
        }
    }

    /// Write `meta.json` into `dir`, creating it if needed.
    ///
    /// Returns the path of the written file.
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(META_FILE_NAME);
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        tracing::debug!(path = %path.display(), "metadata saved");
        Ok(path)
    }
}

/// Fetch a post and build its metadata document, SEO fields included.
pub async fn fetch_post_metadata(client: &WpClient, post_id: u64) -> Result<PostMetadata> {
    let post = Post::get(client, post_id).await?;
    let seo = SeoFields::from_post_meta(&post);
    Ok(PostMetadata::from_post(&post, seo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{wire_post, wire_post_with_seo};

    #[test]
    fn test_document_layout() {
        let post: Post = serde_json::from_value(wire_post()).unwrap();
        let meta = PostMetadata::from_post(&post, SeoFields::default());
        let json = serde_json::to_value(&meta).unwrap();

        assert_eq!(json["wordpress"]["post_id"], 1234);
        assert_eq!(json["wordpress"]["featured_media_id"], 0);
        assert_eq!(json["wordpress"]["author_id"], 3);
        assert_eq!(json["content"]["title"], "Hello World");
        assert_eq!(json["content"]["excerpt"], "<p>Hi</p>");
        assert_eq!(json["dates"]["created"], "2026-01-13T09:30:00");
        assert_eq!(json["dates"]["modified_gmt"], "2026-01-13T15:00:00");
        assert_eq!(json["seo"]["og_title"], "");

        let stamp = json["meta_updated"].as_str().unwrap();
        assert!(stamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[test]
    fn test_seo_from_meta() {
        let post: Post = serde_json::from_value(wire_post_with_seo()).unwrap();
        let seo = SeoFields::from_post_meta(&post);

        assert_eq!(seo.meta_title, "Hello | Example");
        assert_eq!(seo.meta_description, "A first post");
        assert_eq!(seo.og_title, "");
        assert_eq!(seo.og_description, "");
    }

    #[test]
    fn test_seo_defaults_when_meta_is_a_list() {
        let post: Post = serde_json::from_value(wire_post()).unwrap();
        assert_eq!(SeoFields::from_post_meta(&post), SeoFields::default());
    }

    #[test]
    fn test_save_writes_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("posts").join("2026-01-13-hello");

        let post: Post = serde_json::from_value(wire_post()).unwrap();
        let meta = PostMetadata::from_post(&post, SeoFields::default());
        let path = meta.save(&target).unwrap();

        assert_eq!(path, target.join("meta.json"));
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"wordpress\": {\n    \"post_id\": 1234,"));

        let back: PostMetadata = serde_json::from_str(&text).unwrap();
        assert_eq!(back, meta);
    }
}
