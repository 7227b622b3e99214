// SPDX-License-Identifier: MPL-2.0
//! Reading a site folder's data resources.
//!
//! `load_collection` never fails outward: any problem with the primary
//! resource falls back to the embedded list, and a bad record is dropped
//! rather than rejecting the whole document. `load_site_text` is fully
//! silent on failure, matching its role as optional presentation text.

use super::{Manifest, Piece, SiteText};
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Location of the collection document inside a site folder.
pub const ARTWORK_DATA_PATH: &str = "_data/artwork.json";

/// Location of the optional site text document.
pub const SETTINGS_DATA_PATH: &str = "_data/settings.json";

/// The list shipped inside the binary, used when the primary resource is
/// unusable.
const FALLBACK_JSON: &str = include_str!("../../assets/data/artwork.json");

/// Loads the collection from `<site_root>/_data/artwork.json`, falling back
/// to the embedded list on any retrieval or parse failure.
pub async fn load_collection(site_root: PathBuf) -> Vec<Piece> {
    match read_manifest(&site_root).await {
        Ok(manifest) => {
            debug!("loaded {} records from primary source", manifest.pieces.len());
            keep_valid(manifest.pieces)
        }
        Err(err) => {
            warn!("falling back to embedded collection: {}", err);
            fallback_pieces()
        }
    }
}

async fn read_manifest(site_root: &Path) -> Result<Manifest> {
    let path = site_root.join(ARTWORK_DATA_PATH);
    let content = tokio::fs::read_to_string(&path).await?;
    let manifest: Manifest = serde_json::from_str(&content)?;
    Ok(manifest)
}

/// The embedded fallback, validated like any other source. An unparseable
/// embed yields an empty collection rather than a panic.
pub fn fallback_pieces() -> Vec<Piece> {
    match serde_json::from_str::<Manifest>(FALLBACK_JSON) {
        Ok(manifest) => keep_valid(manifest.pieces),
        Err(err) => {
            warn!("embedded fallback data is unusable: {}", err);
            Vec::new()
        }
    }
}

/// Drops records missing a title or image path; one bad record never rejects
/// the rest of the document.
fn keep_valid(pieces: Vec<Piece>) -> Vec<Piece> {
    pieces
        .into_iter()
        .filter(|piece| {
            if piece.is_valid() {
                true
            } else {
                warn!(
                    "dropping record without title or image (title: {:?})",
                    piece.title
                );
                false
            }
        })
        .collect()
}

/// Reads `<site_root>/_data/settings.json`. Failure of any kind is silent;
/// callers keep their defaults.
pub async fn load_site_text(site_root: PathBuf) -> Option<SiteText> {
    let path = site_root.join(SETTINGS_DATA_PATH);
    let content = tokio::fs::read_to_string(&path).await.ok()?;
    serde_json::from_str::<SiteText>(&content).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_site_file(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().expect("parent dir")).expect("create dirs");
        fs::write(path, content).expect("write file");
    }

    #[tokio::test]
    async fn loads_pieces_from_primary_source() {
        let dir = tempdir().expect("create temp dir");
        write_site_file(
            dir.path(),
            ARTWORK_DATA_PATH,
            r#"{"pieces": [
                {"title": "A", "image": "a.jpg", "status": "available"},
                {"title": "B", "image": "b.jpg", "status": "sold"}
            ]}"#,
        );

        let pieces = load_collection(dir.path().to_path_buf()).await;
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].title, "A");
        assert_eq!(pieces[1].status.as_deref(), Some("sold"));
    }

    #[tokio::test]
    async fn missing_file_falls_back_to_embedded_list() {
        let dir = tempdir().expect("create temp dir");
        let pieces = load_collection(dir.path().to_path_buf()).await;
        assert_eq!(pieces, fallback_pieces());
        assert!(!pieces.is_empty());
    }

    #[tokio::test]
    async fn malformed_document_falls_back_to_embedded_list() {
        let dir = tempdir().expect("create temp dir");
        write_site_file(dir.path(), ARTWORK_DATA_PATH, "{\"pieces\": [not json");

        let pieces = load_collection(dir.path().to_path_buf()).await;
        assert_eq!(pieces, fallback_pieces());
    }

    #[tokio::test]
    async fn records_without_title_or_image_are_dropped_individually() {
        let dir = tempdir().expect("create temp dir");
        write_site_file(
            dir.path(),
            ARTWORK_DATA_PATH,
            r#"{"pieces": [
                {"title": "", "image": "a.jpg"},
                {"title": "Kept", "image": "kept.jpg"},
                {"title": "NoImage", "image": ""}
            ]}"#,
        );

        let pieces = load_collection(dir.path().to_path_buf()).await;
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].title, "Kept");
    }

    #[tokio::test]
    async fn document_without_pieces_field_loads_as_empty() {
        let dir = tempdir().expect("create temp dir");
        write_site_file(dir.path(), ARTWORK_DATA_PATH, "{}");

        let pieces = load_collection(dir.path().to_path_buf()).await;
        assert!(pieces.is_empty(), "valid document, no fallback involved");
    }

    #[test]
    fn embedded_fallback_parses_and_is_untagged() {
        let pieces = fallback_pieces();
        assert_eq!(pieces.len(), 6);
        assert_eq!(pieces[0].title, "Bismillah");
        // The historical fallback list predates status tags.
        assert!(pieces.iter().all(|piece| piece.status.is_none()));
        assert!(pieces.iter().all(Piece::is_valid));
    }

    #[tokio::test]
    async fn site_text_reads_optional_fields() {
        let dir = tempdir().expect("create temp dir");
        write_site_file(
            dir.path(),
            SETTINGS_DATA_PATH,
            r#"{"heroHeading": "Atelier", "aboutText": "Hand-drawn calligraphy."}"#,
        );

        let text = load_site_text(dir.path().to_path_buf())
            .await
            .expect("site text");
        assert_eq!(text.hero_heading.as_deref(), Some("Atelier"));
        assert_eq!(text.about_text.as_deref(), Some("Hand-drawn calligraphy."));
    }

    #[tokio::test]
    async fn missing_or_malformed_site_text_is_silent() {
        let dir = tempdir().expect("create temp dir");
        assert_eq!(load_site_text(dir.path().to_path_buf()).await, None);

        write_site_file(dir.path(), SETTINGS_DATA_PATH, "not json at all");
        assert_eq!(load_site_text(dir.path().to_path_buf()).await, None);
    }
}
