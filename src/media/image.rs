// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for common raster formats (PNG, JPEG, GIF, …).

use crate::error::Result;
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;

/// Longest edge of a grid thumbnail, twice the cell width so the cards stay
/// sharp on scaled displays.
pub const THUMBNAIL_MAX_EDGE: u32 = 560;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Loads an image from the given path at full size.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] when the file cannot be read and
/// [`crate::error::Error::Image`] when decoding fails.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let img_bytes = fs::read(path.as_ref())?;
    let img = image_rs::load_from_memory(&img_bytes)?;

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Loads an image downscaled to fit within `max_edge` on both sides,
/// preserving the aspect ratio. Images already smaller stay at their size.
pub fn load_thumbnail<P: AsRef<Path>>(path: P, max_edge: u32) -> Result<ImageData> {
    let img_bytes = fs::read(path.as_ref())?;
    let img = image_rs::load_from_memory(&img_bytes)?;

    let scaled = if img.width() > max_edge || img.height() > max_edge {
        img.thumbnail(max_edge, max_edge)
    } else {
        img
    };

    let (width, height) = scaled.dimensions();
    let pixels = scaled.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    fn write_test_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.join(name);
        let image = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]));
        image.save(&path).expect("failed to write temporary png");
        path
    }

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_test_png(temp_dir.path(), "sample.png", 4, 2);

        let data = load_image(&path).expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_bytes_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn thumbnail_downscales_preserving_aspect_ratio() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_test_png(temp_dir.path(), "wide.png", 64, 32);

        let data = load_thumbnail(&path, 16).expect("thumbnail should load");
        assert_eq!((data.width, data.height), (16, 8));
    }

    #[test]
    fn thumbnail_keeps_small_images_at_original_size() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_test_png(temp_dir.path(), "small.png", 8, 6);

        let data = load_thumbnail(&path, 256).expect("thumbnail should load");
        assert_eq!((data.width, data.height), (8, 6));
    }
}
