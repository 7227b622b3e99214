// SPDX-License-Identifier: MPL-2.0
//! Window icon, rasterized at startup from the embedded brand SVG.

use iced::window::{icon, Icon};
use resvg::usvg;

const BRAND_SVG: &str = include_str!("../assets/branding/galerie.svg");
const ICON_EDGE: u32 = 128;

/// Render the brand mark to an RGBA window icon. Returns `None` when the SVG
/// cannot be parsed or rendered; the window then keeps the system default.
pub fn load_window_icon() -> Option<Icon> {
    let tree = usvg::Tree::from_data(BRAND_SVG.as_bytes(), &usvg::Options::default()).ok()?;

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        ICON_EDGE as f32 / size.width(),
        ICON_EDGE as f32 / size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(ICON_EDGE, ICON_EDGE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.data().to_vec(), ICON_EDGE, ICON_EDGE).ok()
}
