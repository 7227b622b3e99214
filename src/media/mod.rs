// SPDX-License-Identifier: MPL-2.0
//! Image decoding and caching for the gallery and the lightbox.

pub mod cache;
mod image;

pub use cache::ImageCache;
pub use image::{load_image, load_thumbnail, ImageData, THUMBNAIL_MAX_EDGE};
