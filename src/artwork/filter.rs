// SPDX-License-Identifier: MPL-2.0
//! Status filtering of the collection.
//!
//! The filtered sequence is the addressing scheme for the whole UI: grid
//! cells and the lightbox both refer to pieces by their position in it, so
//! the filter must preserve the collection's order and is applied exactly
//! once per render cycle.

use super::Piece;

/// Keeps the pieces belonging to the view for `tag`, preserving order.
pub fn by_status(pieces: &[Piece], tag: &str) -> Vec<Piece> {
    pieces
        .iter()
        .filter(|piece| piece.matches_status(tag))
        .cloned()
        .collect()
}
