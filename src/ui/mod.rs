// SPDX-License-Identifier: MPL-2.0
//! User interface, Elm-style: state down, messages up.
//!
//! - [`gallery`] - grid of cards with async thumbnails and keyboard focus
//! - [`lightbox`] - the enlarging overlay with its two-phase show/hide
//! - [`header`] - site heading, about paragraph and status tabs
//! - [`styles`] - centralized widget styles over the design tokens
//! - [`design_tokens`] - colors, spacing, sizing, typography constants

pub mod design_tokens;
pub mod gallery;
pub mod header;
pub mod lightbox;
pub mod styles;

/// Glyph standing in for an image that could not be shown.
pub const PLACEHOLDER_GLYPH: &str = "✂";
