// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
Design tokens for the gallery presentation.

Every color, length and font size the widgets use is named here, so the
look of the grid and the lightbox is tuned in one place:

- [`palette`] - ink surfaces, paper text tones, the gold accent
- [`opacity`] - backdrop and control transparency levels
- [`spacing`] - 8px baseline grid
- [`sizing`] - cell, control and panel dimensions
- [`typography`] - font size scale
- [`border`], [`radius`], [`shadow`] - edge treatment

# Examples

```
use galerie::ui::design_tokens::{opacity, palette};
use iced::Color;

// The dimming veil behind the lightbox at full activation
let veil = Color {
    a: opacity::BACKDROP,
    ..palette::INK_950
};
```
"#]

//! Jetons de design centralisés pour la présentation sombre de la galerie.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale / ink surfaces
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const INK_950: Color = Color::from_rgb(0.07, 0.07, 0.08);
    pub const INK_900: Color = Color::from_rgb(0.11, 0.11, 0.12);
    pub const INK_800: Color = Color::from_rgb(0.16, 0.16, 0.18);
    pub const INK_700: Color = Color::from_rgb(0.24, 0.24, 0.26);

    // Warm paper tones for text on dark surfaces
    pub const PAPER_100: Color = Color::from_rgb(0.93, 0.91, 0.87);
    pub const PAPER_300: Color = Color::from_rgb(0.72, 0.70, 0.66);
    pub const PAPER_500: Color = Color::from_rgb(0.52, 0.50, 0.47);

    // Accent (gold scale), used for focus and the active tab
    pub const GOLD_400: Color = Color::from_rgb(0.83, 0.68, 0.38);
    pub const GOLD_600: Color = Color::from_rgb(0.64, 0.51, 0.26);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Lightbox backdrop at full activation.
    pub const BACKDROP: f32 = 0.88;
    /// Overlay controls at rest.
    pub const CONTROL: f32 = 0.45;
    /// Overlay controls under the pointer.
    pub const CONTROL_HOVER: f32 = 0.75;
    pub const CONTROL_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Width of one gallery cell, image and text block included.
    pub const CELL_WIDTH: f32 = 280.0;

    /// Height of the image frame inside a cell.
    pub const CELL_IMAGE_HEIGHT: f32 = 200.0;

    /// Square hit area of the lightbox navigation controls.
    pub const CONTROL_HIT: f32 = 48.0;

    /// Height of the status tab row buttons.
    pub const TAB_HEIGHT: f32 = 36.0;

    /// Widest the lightbox panel gets on large windows.
    pub const LIGHTBOX_MAX_WIDTH: f32 = 1100.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - the site heading above the grid
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - lightbox caption title, navigation glyphs
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - gallery cell titles
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - about paragraph, empty-state message
    pub const BODY: f32 = 14.0;

    /// Caption - cell metadata lines
    pub const CAPTION: f32 = 12.0;

    /// Oversized glyph - the placeholder marker in a degraded cell
    pub const GLYPH_XL: f32 = 44.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - cell frames, separators
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - focus ring, active tab accent
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    /// Soft black used by every drop shadow.
    const UMBRA: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.35,
    };

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: UMBRA,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: UMBRA,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Scales stay strictly ordered
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);
    assert!(spacing::LG < spacing::XL);
    assert!(spacing::XL < spacing::XXL);
    assert!(typography::CAPTION < typography::BODY);
    assert!(typography::BODY < typography::TITLE_SM);
    assert!(typography::TITLE_SM < typography::TITLE_MD);
    assert!(typography::TITLE_MD < typography::TITLE_LG);
    assert!(typography::TITLE_LG < typography::GLYPH_XL);
    assert!(border::WIDTH_SM < border::WIDTH_MD);
    assert!(radius::NONE < radius::SM && radius::SM < radius::MD);

    // Opacity levels live in [0, 1]; controls brighten toward the pointer
    assert!(opacity::TRANSPARENT == 0.0 && opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);
    assert!(opacity::CONTROL < opacity::CONTROL_HOVER);
    assert!(opacity::CONTROL_HOVER < opacity::CONTROL_PRESSED);

    // Layout relations the widgets rely on
    assert!(sizing::CELL_WIDTH > sizing::CELL_IMAGE_HEIGHT);
    assert!(sizing::LIGHTBOX_MAX_WIDTH > 2.0 * sizing::CELL_WIDTH);
    assert!(sizing::CONTROL_HIT >= 44.0); // comfortable hit target
};
