//! Crop-and-convert of image files.
//!
//! Decodes with the `image` crate, applies the box from
//! [`compute_crop_box`](crate::crop::compute_crop_box), and re-encodes to the
//! format implied by the output extension.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader};

use crate::crop::{compute_crop_box, AspectRatio};
use crate::error::{PressError, Result};

/// Default encoder quality.
pub const DEFAULT_QUALITY: u8 = 90;

/// Outcome of a crop, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropReport {
    /// Source dimensions (width, height).
    pub original: (u32, u32),
    /// Output dimensions (width, height).
    pub cropped: (u32, u32),
    /// Where the result was written.
    pub output: PathBuf,
}

/// Default output path: `<dir>/<stem>-<W>x<H>.jpg` next to the input.
pub fn default_output_path(input: &Path, aspect: AspectRatio) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!(
        "{stem}-{}x{}.jpg",
        aspect.width(),
        aspect.height()
    ))
}

fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e.to_ascii_lowercase().as_str(), "jpg" | "jpeg"))
        .unwrap_or(false)
}

/// Crop `input` to `aspect` and write the result to `output`.
///
/// JPEG outputs drop any alpha channel and honour `quality`; other formats
/// are written with the encoder defaults.
#[tracing::instrument]
pub fn crop_image(
    input: &Path,
    output: &Path,
    aspect: AspectRatio,
    quality: u8,
) -> Result<CropReport> {
    if !input.exists() {
        return Err(PressError::FileNotFound(input.to_path_buf()));
    }

    // Format comes from the file contents; the extension may be wrong or absent.
    let img = ImageReader::open(input)?.with_guessed_format()?.decode()?;
    let original = (img.width(), img.height());

    let crop_box = compute_crop_box(original.0, original.1, aspect.width(), aspect.height())?;
    tracing::debug!(?crop_box, "computed crop box");

    let cropped = img.crop_imm(
        crop_box.left,
        crop_box.top,
        crop_box.width(),
        crop_box.height(),
    );

    save(&cropped, output, quality)?;

    Ok(CropReport {
        original,
        cropped: (cropped.width(), cropped.height()),
        output: output.to_path_buf(),
    })
}

fn save(img: &DynamicImage, path: &Path, quality: u8) -> Result<()> {
    if is_jpeg(path) {
        let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
        let writer = BufWriter::new(File::create(path)?);
        let encoder = JpegEncoder::new_with_quality(writer, quality.clamp(1, 100));
        rgb.write_with_encoder(encoder)?;
    } else {
        img.save(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let aspect = AspectRatio::new(16, 9).unwrap();
        assert_eq!(
            default_output_path(Path::new("photos/sunset.png"), aspect),
            PathBuf::from("photos/sunset-16x9.jpg")
        );
        assert_eq!(
            default_output_path(Path::new("a.b.webp"), AspectRatio::new(4, 5).unwrap()),
            PathBuf::from("a.b-4x5.jpg")
        );
    }

    #[test]
    fn test_jpeg_detection_ignores_case() {
        assert!(is_jpeg(Path::new("out.JPG")));
        assert!(is_jpeg(Path::new("out.jpeg")));
        assert!(!is_jpeg(Path::new("out.png")));
        assert!(!is_jpeg(Path::new("out")));
    }

    #[test]
    fn test_missing_input_is_reported() {
        let err = crop_image(
            Path::new("/definitely/not/here.png"),
            Path::new("/tmp/out.jpg"),
            AspectRatio::default(),
            DEFAULT_QUALITY,
        )
        .unwrap_err();
        assert!(matches!(err, PressError::FileNotFound(_)));
        assert_eq!(err.to_string(), "File not found: /definitely/not/here.png");
    }
}
