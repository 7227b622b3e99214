// SPDX-License-Identifier: MPL-2.0
//! Bounded cache for decoded full-size images.
//!
//! Full-size artwork is decoded on demand when the lightbox opens or
//! navigates; keeping a handful of recent decodes makes stepping back and
//! forth instant without holding a whole collection of RGBA buffers. The
//! cache is owned by the application root and only touched from the update
//! loop, so no synchronization wrapper is needed.

use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// How many decoded full-size images stay resident.
pub const DEFAULT_FULL_IMAGE_CAPACITY: usize = 8;

#[derive(Debug)]
pub struct ImageCache {
    full_images: LruCache<PathBuf, ImageData>,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_FULL_IMAGE_CAPACITY)
    }
}

impl ImageCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            full_images: LruCache::new(capacity),
        }
    }

    pub fn get(&mut self, path: &Path) -> Option<&ImageData> {
        self.full_images.get(path)
    }

    /// Read without touching recency; for render paths that only borrow
    /// the state.
    pub fn peek(&self, path: &Path) -> Option<&ImageData> {
        self.full_images.peek(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.full_images.contains(path)
    }

    pub fn insert(&mut self, path: PathBuf, image: ImageData) {
        self.full_images.put(path, image);
    }

    pub fn len(&self) -> usize {
        self.full_images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.full_images.is_empty()
    }
}
