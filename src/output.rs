//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable summaries
//! as an alternative to JSON serialization.

use crate::convert::CropReport;
use crate::{FeaturedImage, Media, Post, PostMetadata};

/// Trait for human-readable key-value output.
///
/// Implemented by result types to provide the short summary printed
/// when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Media {
    fn pretty_print(&self) -> String {
        [
            "Upload successful!".to_string(),
            format!("  Media ID: {}", self.id),
            format!("  URL: {}", self.url),
            format!("  Title: {}", self.title),
        ]
        .join("\n")
    }
}

impl PrettyPrint for Post {
    fn pretty_print(&self) -> String {
        let mut lines = vec![
            "Post created!".to_string(),
            format!("  Post ID: {}", self.id),
            format!("  Title: {}", self.title),
            format!("  Status: {}", self.status),
            format!("  Link: {}", self.link),
        ];

        if self.has_featured_media() {
            lines.push(format!("  Featured Media: {}", self.featured_media));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for FeaturedImage {
    fn pretty_print(&self) -> String {
        [
            "Featured image set!".to_string(),
            format!("  Post ID: {}", self.post_id),
            format!("  Media ID: {}", self.featured_media),
            format!("  Post Title: {}", self.title),
        ]
        .join("\n")
    }
}

impl PrettyPrint for PostMetadata {
    fn pretty_print(&self) -> String {
        [
            "Metadata saved!".to_string(),
            format!("  Post ID: {}", self.wordpress.post_id),
            format!("  Title: {}", self.content.title),
        ]
        .join("\n")
    }
}

impl PrettyPrint for CropReport {
    fn pretty_print(&self) -> String {
        [
            format!("Original: {}x{}", self.original.0, self.original.1),
            format!("Cropped:  {}x{}", self.cropped.0, self.cropped.1),
            format!("Output:   {}", self.output.display()),
        ]
        .join("\n")
    }
}
