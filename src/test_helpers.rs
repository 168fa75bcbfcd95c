//! Shared test fixtures for unit tests.
//!
//! Wire-format JSON as the WordPress REST API returns it, so model tests
//! exercise the same shapes the client parses.

/// A draft post in wire format, no featured image, empty meta list.
pub(crate) fn wire_post() -> serde_json::Value {
    serde_json::json!({
        "id": 1234,
        "date": "2026-01-13T09:30:00",
        "date_gmt": "2026-01-13T14:30:00",
        "modified": "2026-01-13T10:00:00",
        "modified_gmt": "2026-01-13T15:00:00",
        "slug": "hello-world",
        "status": "draft",
        "link": "https://example.com/?p=1234",
        "title": {"rendered": "Hello World"},
        "content": {"rendered": "<p>Hi</p>", "protected": false},
        "excerpt": {"rendered": "\n<p>Hi</p>\n", "protected": false},
        "author": 3,
        "featured_media": 0,
        "categories": [1],
        "tags": [],
        "meta": []
    })
}

/// [`wire_post`] with SEO meta keys filled in.
pub(crate) fn wire_post_with_seo() -> serde_json::Value {
    let mut post = wire_post();
    post["meta"] = serde_json::json!({
        "_seopress_titles_title": "Hello | Example",
        "_seopress_titles_desc": "A first post",
        "footnotes": ""
    });
    post
}
