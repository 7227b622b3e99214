// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the data path between manifest and grid.
//!
//! Measures the performance of:
//! - Parsing a large manifest document
//! - Status filtering of the collection
//! - Composing the caption and meta strings
//! - Thumbnail decoding at the grid size

use criterion::{criterion_group, criterion_main, Criterion};
use galerie::artwork::{filter, Manifest, Piece, DEFAULT_STATUS_TAG, SOLD_STATUS_TAG};
use galerie::media::{self, THUMBNAIL_MAX_EDGE};
use image_rs::{Rgba, RgbaImage};
use std::hint::black_box;

/// Builds a collection the size of a busy portfolio.
fn sample_collection(len: usize) -> Vec<Piece> {
    (0..len)
        .map(|n| Piece {
            title: format!("Piece {n}"),
            image: format!("images/piece-{n}.jpg"),
            date: Some(format!("{}", 2000 + (n % 25))),
            medium: Some("Oil on canvas".to_string()),
            description: None,
            status: if n % 3 == 0 {
                Some("sold".to_string())
            } else {
                None
            },
        })
        .collect()
}

/// Benchmark manifest parsing, the slowest step of a reload.
fn bench_manifest_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_pipeline");

    let document = serde_json::json!({ "pieces": sample_collection(500) }).to_string();

    group.bench_function("parse_manifest_500", |b| {
        b.iter(|| {
            let manifest: Manifest = serde_json::from_str(&document).unwrap();
            black_box(manifest);
        });
    });

    group.finish();
}

/// Benchmark status filtering, which runs on every tab switch.
fn bench_status_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_pipeline");

    let pieces = sample_collection(500);

    group.bench_function("filter_available_500", |b| {
        b.iter(|| {
            black_box(filter::by_status(&pieces, DEFAULT_STATUS_TAG));
        });
    });

    group.bench_function("filter_sold_500", |b| {
        b.iter(|| {
            black_box(filter::by_status(&pieces, SOLD_STATUS_TAG));
        });
    });

    group.finish();
}

/// Benchmark the caption and meta strings composed for every rendered cell.
fn bench_text_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_pipeline");

    let pieces = sample_collection(500);

    group.bench_function("captions_and_meta_500", |b| {
        b.iter(|| {
            for piece in &pieces {
                black_box(piece.caption());
                black_box(piece.meta_line());
            }
        });
    });

    group.finish();
}

/// Benchmark decoding one thumbnail at the grid size.
fn bench_thumbnail_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_pipeline");

    let temp_dir = tempfile::tempdir().expect("temp dir");
    let path = temp_dir.path().join("sample.png");
    let image = RgbaImage::from_pixel(1200, 900, Rgba([90, 90, 120, 255]));
    image.save(&path).expect("write png");

    group.bench_function("thumbnail_1200x900", |b| {
        b.iter(|| {
            black_box(media::load_thumbnail(&path, THUMBNAIL_MAX_EDGE).unwrap());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_manifest_parse,
    bench_status_filter,
    bench_text_pipeline,
    bench_thumbnail_decode
);
criterion_main!(benches);
