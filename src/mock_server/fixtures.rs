//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use chrono::NaiveDate;
use serde_json::json;

use super::state::{slugify, MockMedia, MockPost};

/// Collection of fixture factories for test data.
pub struct Fixtures;

/// The data a default mock server starts with.
pub struct DefaultScenario {
    pub posts: Vec<MockPost>,
    pub media: Vec<MockMedia>,
}

impl Fixtures {
    // =========================================================================
    // Post Fixtures
    // =========================================================================

    /// A published post with no featured image and no custom meta.
    pub fn post(id: u64, title: &str) -> MockPost {
        let date = NaiveDate::from_ymd_opt(2026, 1, 13)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap_or_default();
        MockPost {
            id,
            title: title.to_string(),
            content: format!("<p>{title}</p>"),
            excerpt: title.to_string(),
            status: "publish".to_string(),
            slug: slugify(title),
            featured_media: 0,
            author: 1,
            categories: vec![1],
            tags: vec![],
            meta: json!([]),
            date,
            modified: date,
        }
    }

    /// A post carrying SEO title/description meta.
    pub fn post_with_seo(id: u64, title: &str, meta_title: &str, meta_description: &str) -> MockPost {
        let mut post = Self::post(id, title);
        post.meta = json!({
            "_seopress_titles_title": meta_title,
            "_seopress_titles_desc": meta_description,
            "footnotes": "",
        });
        post.tags = vec![7, 9];
        post
    }

    // =========================================================================
    // Media Fixtures
    // =========================================================================

    /// A PNG attachment.
    pub fn media(id: u64, title: &str) -> MockMedia {
        let slug = slugify(title);
        MockMedia {
            id,
            title: title.to_string(),
            alt_text: title.to_string(),
            file_name: format!("{slug}.png"),
            slug,
            mime_type: "image/png".to_string(),
            size: 1024,
        }
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// One SEO-annotated post (ID 1) and one image (ID 10).
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario {
            posts: vec![Self::post_with_seo(
                1,
                "Hello world!",
                "Hello world | Mock Site",
                "The first post on the mock site",
            )],
            media: vec![Self::media(10, "Header Image")],
        }
    }
}
