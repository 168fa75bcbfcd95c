//! Center-crop geometry.
//!
//! Pure functions with no I/O: given image dimensions and a target aspect
//! ratio, compute the rectangle to keep. Applying it is left to
//! [`crate::convert`].

use std::fmt;
use std::str::FromStr;

use crate::error::{PressError, Result};

/// A target width:height ratio with both components positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    width: u32,
    height: u32,
}

impl AspectRatio {
    /// Create a ratio, rejecting zero components.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PressError::InvalidAspectRatio(format!("{width}:{height}")));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self {
            width: 16,
            height: 9,
        }
    }
}

impl FromStr for AspectRatio {
    type Err = PressError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || PressError::InvalidAspectRatio(s.to_string());

        let (w, h) = s.split_once(':').ok_or_else(invalid)?;
        let width: u32 = w.trim().parse().map_err(|_| invalid())?;
        let height: u32 = h.trim().parse().map_err(|_| invalid())?;

        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Self { width, height })
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// A crop rectangle in pixel coordinates, right/bottom exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Compute the centered crop box that gives `aspect_w:aspect_h`.
///
/// When the image is relatively wider than the target the width is reduced,
/// otherwise (including an exact match) the height is. Centering floors, so
/// an odd remainder lands on the trailing edge.
///
/// # Examples
///
/// ```
/// use presskit::{compute_crop_box, CropBox};
///
/// let b = compute_crop_box(1000, 1000, 16, 9).unwrap();
/// assert_eq!(b, CropBox { left: 0, top: 219, right: 1000, bottom: 781 });
/// ```
///
/// # Errors
///
/// Returns [`PressError::InvalidInput`] when any input is zero or when the
/// image is too small to hold a non-empty box at this ratio.
pub fn compute_crop_box(
    image_width: u32,
    image_height: u32,
    aspect_w: u32,
    aspect_h: u32,
) -> Result<CropBox> {
    if image_width == 0 || image_height == 0 {
        return Err(PressError::InvalidInput(format!(
            "Image has no pixels: {image_width}x{image_height}"
        )));
    }
    if aspect_w == 0 || aspect_h == 0 {
        return Err(PressError::InvalidInput(format!(
            "Aspect ratio components must be positive: {aspect_w}:{aspect_h}"
        )));
    }

    let (w, h) = (u64::from(image_width), u64::from(image_height));
    let (aw, ah) = (u64::from(aspect_w), u64::from(aspect_h));

    // w/h > aw/ah, cross-multiplied to stay exact
    let crop_box = if w * ah > h * aw {
        let new_width = h * aw / ah;
        let left = (w - new_width) / 2;
        CropBox {
            left: left as u32,
            top: 0,
            right: (left + new_width) as u32,
            bottom: image_height,
        }
    } else {
        let new_height = w * ah / aw;
        let top = (h - new_height) / 2;
        CropBox {
            left: 0,
            top: top as u32,
            right: image_width,
            bottom: (top + new_height) as u32,
        }
    };

    if crop_box.width() == 0 || crop_box.height() == 0 {
        return Err(PressError::InvalidInput(format!(
            "Image {image_width}x{image_height} is too small to crop to {aspect_w}:{aspect_h}"
        )));
    }

    Ok(crop_box)
}
