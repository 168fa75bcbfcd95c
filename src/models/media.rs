//! Media model and upload.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::client::{WpClient, UPLOAD_TIMEOUT};
use crate::error::{Operation, PressError, Result};
use crate::models::rendered;
use crate::traits::Create;

/// An uploaded media attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    /// Attachment ID, usable as a post's featured media.
    pub id: u64,

    /// Public URL of the uploaded file.
    #[serde(alias = "source_url")]
    pub url: String,

    /// Rendered title.
    #[serde(deserialize_with = "rendered::text")]
    pub title: String,

    pub slug: String,
}

/// A local file to upload, with an optional title.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub path: PathBuf,
    pub title: Option<String>,
}

impl MediaUpload {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The explicit title, or one derived from the file stem.
    pub fn resolved_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => {
                let stem = self
                    .path
                    .file_stem()
                    .map(|s| s.to_string_lossy())
                    .unwrap_or_default();
                title_from_stem(&stem)
            }
        }
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string())
    }
}

/// MIME type for an upload, from its extension.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Turn a file stem like `hero-image_v2` into `Hero Image V2`.
///
/// Dashes and underscores become spaces. A letter starts a new word when the
/// character before it is not a letter, so `iphone12pro` becomes `Iphone12Pro`.
pub fn title_from_stem(stem: &str) -> String {
    let mut title = String::with_capacity(stem.len());
    let mut prev_is_letter = false;

    for c in stem.chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };
        if prev_is_letter {
            title.extend(c.to_lowercase());
        } else {
            title.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }

    title
}

#[async_trait]
impl Create for Media {
    type Params = MediaUpload;

    /// Verifies the credentials against `users/me`, then uploads the file as
    /// multipart form data with `title` and `alt_text` set to the title.
    #[tracing::instrument(skip(client))]
    async fn create(client: &WpClient, upload: MediaUpload) -> Result<Self> {
        if !upload.path.exists() {
            return Err(PressError::FileNotFound(upload.path.clone()));
        }

        client.verify_identity().await?;

        let title = upload.resolved_title();
        let bytes = tokio::fs::read(&upload.path).await?;
        let part = Part::bytes(bytes)
            .file_name(upload.file_name())
            .mime_str(content_type_for(&upload.path))
            .map_err(PressError::HttpError)?;

        let form = Form::new()
            .part("file", part)
            .text("title", title.clone())
            .text("alt_text", title);

        let response = client.post_multipart("media", form, UPLOAD_TIMEOUT).await?;
        let response =
            WpClient::expect_status(response, StatusCode::CREATED, Operation::UploadMedia).await?;

        let media: Media = response.json().await.map_err(PressError::HttpError)?;
        Ok(media)
    }
}

/// Upload an image, titling it from the file name when `title` is `None`.
pub async fn upload_media(
    client: &WpClient,
    image_path: impl AsRef<Path>,
    title: Option<&str>,
) -> Result<Media> {
    let mut upload = MediaUpload::new(image_path.as_ref());
    if let Some(title) = title {
        upload = upload.with_title(title);
    }
    Media::create(client, upload).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_from_wire_format() {
        let media: Media = serde_json::from_value(serde_json::json!({
            "id": 42,
            "source_url": "https://x/42.png",
            "title": {"rendered": "Foo"},
            "slug": "foo",
            "media_type": "image"
        }))
        .unwrap();

        assert_eq!(
            media,
            Media {
                id: 42,
                url: "https://x/42.png".to_string(),
                title: "Foo".to_string(),
                slug: "foo".to_string(),
            }
        );
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for(Path::new("a.png")), "image/png");
        assert_eq!(content_type_for(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("a.gif")), "image/gif");
        assert_eq!(content_type_for(Path::new("a.webp")), "image/webp");
        assert_eq!(content_type_for(Path::new("a.tiff")), "application/octet-stream");
        assert_eq!(content_type_for(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn test_title_from_stem() {
        assert_eq!(title_from_stem("hero-image_v2"), "Hero Image V2");
        assert_eq!(title_from_stem("SUNSET"), "Sunset");
        assert_eq!(title_from_stem("a--b"), "A  B");
        assert_eq!(title_from_stem("img.final"), "Img.Final");
        assert_eq!(title_from_stem("iphone12pro-shot"), "Iphone12Pro Shot");
        assert_eq!(title_from_stem("o'neil_portrait"), "O'Neil Portrait");
    }

    #[test]
    fn test_resolved_title_prefers_explicit() {
        let upload = MediaUpload::new("/tmp/blog_header-final.png");
        assert_eq!(upload.resolved_title(), "Blog Header Final");

        let upload = upload.with_title("Custom");
        assert_eq!(upload.resolved_title(), "Custom");
    }
}
