// SPDX-License-Identifier: MPL-2.0
//! The artwork collection: data model, loading, and status filtering.
//!
//! A site folder carries its collection in `_data/artwork.json` as an ordered
//! `pieces` array. Each piece has a required title and image path plus
//! optional display metadata; a `status` tag decides which view shows it.
//! The separators used when joining metadata are part of the presentation
//! contract and are pinned here as constants.

pub mod filter;
pub mod loader;

use serde::{Deserialize, Serialize};

/// Status tag assumed when a view does not request one explicitly.
pub const DEFAULT_STATUS_TAG: &str = "available";

/// Status tag of pieces that moved to the previous-works view.
pub const SOLD_STATUS_TAG: &str = "sold";

/// Joins `date` and `medium` on the grid cell.
pub const GRID_META_SEPARATOR: &str = " · ";

/// Separates the title from the detail fields in the lightbox caption.
pub const CAPTION_TITLE_SEPARATOR: &str = " — ";

/// Joins the detail fields in the lightbox caption.
pub const CAPTION_FIELD_SEPARATOR: &str = ", ";

/// One gallery artwork record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub title: String,
    /// Image path, resolved relative to the site root.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    /// Part of the schema; not rendered anywhere yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Piece {
    /// A record is usable only with a non-empty title and image path.
    pub fn is_valid(&self) -> bool {
        !self.title.is_empty() && !self.image.is_empty()
    }

    /// Whether this piece belongs to the view filtered by `tag`.
    ///
    /// Comparison is exact and case-sensitive. A piece without a status tag
    /// counts as part of the default view only; it never matches any other
    /// tag.
    pub fn matches_status(&self, tag: &str) -> bool {
        match &self.status {
            Some(status) => status == tag,
            None => tag == DEFAULT_STATUS_TAG,
        }
    }

    /// Detail fields present on this piece, in display order.
    /// Empty strings count as absent.
    fn detail_fields(&self) -> Vec<&str> {
        let mut parts = Vec::new();
        if let Some(date) = self.date.as_deref() {
            if !date.is_empty() {
                parts.push(date);
            }
        }
        if let Some(medium) = self.medium.as_deref() {
            if !medium.is_empty() {
                parts.push(medium);
            }
        }
        parts
    }

    /// Metadata line under the grid cell title: `date · medium`, either part
    /// alone if the other is absent, `None` if both are.
    pub fn meta_line(&self) -> Option<String> {
        let parts = self.detail_fields();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(GRID_META_SEPARATOR))
        }
    }

    /// Lightbox caption: the title, followed by an em dash and the
    /// comma-joined detail fields when any are present.
    pub fn caption(&self) -> String {
        let parts = self.detail_fields();
        if parts.is_empty() {
            self.title.clone()
        } else {
            format!(
                "{}{}{}",
                self.title,
                CAPTION_TITLE_SEPARATOR,
                parts.join(CAPTION_FIELD_SEPARATOR)
            )
        }
    }
}

/// Shape of `_data/artwork.json`. A document without a `pieces` field reads
/// as an empty collection rather than an error.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub pieces: Vec<Piece>,
}

/// Free-text overrides from `_data/settings.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteText {
    #[serde(default)]
    pub hero_heading: Option<String>,
    #[serde(default)]
    pub about_text: Option<String>,
}

impl SiteText {
    /// Heading override; a blank value counts as absent.
    #[must_use]
    pub fn heading(&self) -> Option<&str> {
        self.hero_heading.as_deref().filter(|text| !text.is_empty())
    }

    /// About paragraph; a blank value counts as absent.
    #[must_use]
    pub fn about(&self) -> Option<&str> {
        self.about_text.as_deref().filter(|text| !text.is_empty())
    }
}
