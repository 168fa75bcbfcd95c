//! Mock server state management.
//!
//! Provides the in-memory data store for the mock WordPress server. Records
//! are kept in a server-side shape and rendered to wire JSON on the way out.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};
use serde_json::{json, Value};
use tokio::sync::RwLock;

/// The user `users/me` reports.
#[derive(Debug, Clone)]
pub struct MockUser {
    pub id: u64,
    pub name: String,
}

/// A stored post.
#[derive(Debug, Clone)]
pub struct MockPost {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub status: String,
    pub slug: String,
    pub featured_media: u64,
    pub author: u64,
    pub categories: Vec<u64>,
    pub tags: Vec<u64>,
    /// Custom meta map, or an empty list when none is registered.
    pub meta: Value,
    pub date: NaiveDateTime,
    pub modified: NaiveDateTime,
}

impl MockPost {
    /// Render as the REST API does.
    pub fn to_wire(&self, base_url: &str) -> Value {
        let stamp = |t: &NaiveDateTime| t.format("%Y-%m-%dT%H:%M:%S").to_string();
        json!({
            "id": self.id,
            "date": stamp(&self.date),
            "date_gmt": stamp(&self.date),
            "modified": stamp(&self.modified),
            "modified_gmt": stamp(&self.modified),
            "slug": self.slug,
            "status": self.status,
            "type": "post",
            "link": format!("{base_url}/?p={}", self.id),
            "title": {"rendered": self.title},
            "content": {"rendered": self.content, "protected": false},
            "excerpt": {"rendered": format!("<p>{}</p>\n", self.excerpt), "protected": false},
            "author": self.author,
            "featured_media": self.featured_media,
            "categories": self.categories,
            "tags": self.tags,
            "meta": self.meta,
        })
    }
}

/// A stored media attachment.
#[derive(Debug, Clone)]
pub struct MockMedia {
    pub id: u64,
    pub title: String,
    pub alt_text: String,
    pub slug: String,
    pub file_name: String,
    pub mime_type: String,
    pub size: usize,
}

impl MockMedia {
    /// Render as the REST API does.
    pub fn to_wire(&self, base_url: &str) -> Value {
        json!({
            "id": self.id,
            "slug": self.slug,
            "type": "attachment",
            "title": {"rendered": self.title},
            "alt_text": self.alt_text,
            "media_type": "image",
            "mime_type": self.mime_type,
            "source_url": format!("{base_url}/wp-content/uploads/{}", self.file_name),
            "media_details": {"filesize": self.size},
        })
    }
}

/// Shared state for the mock server.
///
/// Wrapped in `Arc<RwLock<_>>` for concurrent access from handlers.
#[derive(Debug)]
pub struct MockState {
    /// Posts indexed by ID.
    pub posts: BTreeMap<u64, MockPost>,

    /// Media indexed by ID.
    pub media: BTreeMap<u64, MockMedia>,

    /// Account behind every accepted request.
    pub user: MockUser,

    /// If set, requests must carry exactly this `Authorization` value.
    pub required_auth: Option<String>,

    /// Base URL used for links; filled in by the server on start.
    pub base_url: String,

    next_id: u64,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            posts: BTreeMap::new(),
            media: BTreeMap::new(),
            user: MockUser {
                id: 1,
                name: "Mock Editor".to_string(),
            },
            required_auth: None,
            base_url: String::new(),
            next_id: 100,
        }
    }
}

/// Lowercase, dash-separated slug.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a post to the state.
    pub fn with_post(mut self, post: MockPost) -> Self {
        self.next_id = self.next_id.max(post.id + 1);
        self.posts.insert(post.id, post);
        self
    }

    /// Add a media attachment to the state.
    pub fn with_media(mut self, media: MockMedia) -> Self {
        self.next_id = self.next_id.max(media.id + 1);
        self.media.insert(media.id, media);
        self
    }

    /// Require HTTP Basic credentials on every request.
    pub fn with_required_credentials(mut self, username: &str, password: &str) -> Self {
        self.required_auth = Some(crate::basic_auth_value(username, password));
        self
    }

    /// Whether a request with this `Authorization` value is accepted.
    pub fn is_authorized(&self, header: Option<&str>) -> bool {
        match &self.required_auth {
            Some(expected) => header == Some(expected.as_str()),
            None => true,
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Store a new post and return it.
    pub fn create_post(
        &mut self,
        title: String,
        content: String,
        status: String,
        featured_media: u64,
    ) -> &MockPost {
        let id = self.allocate_id();
        let now = Utc::now().naive_utc();
        let post = MockPost {
            id,
            slug: slugify(&title),
            excerpt: String::new(),
            title,
            content,
            status,
            featured_media,
            author: self.user.id,
            categories: vec![1],
            tags: vec![],
            meta: json!([]),
            date: now,
            modified: now,
        };
        self.posts.entry(id).or_insert(post)
    }

    /// Store a new attachment and return it.
    pub fn create_media(
        &mut self,
        title: String,
        alt_text: String,
        file_name: String,
        mime_type: String,
        size: usize,
    ) -> &MockMedia {
        let id = self.allocate_id();
        let media = MockMedia {
            id,
            slug: slugify(&title),
            title,
            alt_text,
            file_name,
            mime_type,
            size,
        };
        self.media.entry(id).or_insert(media)
    }

    /// Set a post's featured media. `None` when the post doesn't exist.
    pub fn set_featured_media(&mut self, post_id: u64, media_id: u64) -> Option<&MockPost> {
        let post = self.posts.get_mut(&post_id)?;
        post.featured_media = media_id;
        post.modified = Utc::now().naive_utc();
        Some(post)
    }
}
