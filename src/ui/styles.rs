// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles.
//!
//! Styles are functions (or function builders) over the design tokens so the
//! views stay free of raw colors. The lightbox styles take the current fade
//! level as a parameter; the two-phase show/hide protocol drives that value
//! frame by frame.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, spacing, typography};
use iced::widget::{button, container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Fond de page sombre commun à toutes les vues.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::INK_950)),
        text_color: Some(palette::PAPER_100),
        ..container::Style::default()
    }
}

/// Style for one gallery cell. The focused cell carries the accent ring that
/// stands in for the browser's focus outline.
pub fn gallery_cell(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => palette::INK_800,
            _ => palette::INK_900,
        };
        let (border_color, border_width) = if focused {
            (palette::GOLD_400, border::WIDTH_MD)
        } else {
            (palette::INK_700, border::WIDTH_SM)
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::PAPER_100,
            border: Border {
                color: border_color,
                width: border_width,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}

/// Frame behind a cell's thumbnail, also shown bare while it loads or after
/// it degrades to the placeholder glyph.
pub fn cell_image_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::INK_900)),
        text_color: Some(palette::PAPER_500),
        border: Border {
            color: palette::INK_700,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..container::Style::default()
    }
}

/// Style for the status tab row buttons.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = if active {
            palette::GOLD_400
        } else {
            match status {
                button::Status::Hovered => palette::PAPER_100,
                _ => palette::PAPER_300,
            }
        };
        let border_color = if active {
            palette::GOLD_600
        } else {
            Color::TRANSPARENT
        };

        button::Style {
            background: None,
            text_color,
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Style pour les contrôles de la visionneuse (fermer, précédent, suivant).
///
/// `fade` scales every alpha so the controls follow the overlay's
/// activation ramp.
pub fn lightbox_control(fade: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let base = match status {
            button::Status::Hovered => opacity::CONTROL_HOVER,
            button::Status::Pressed => opacity::CONTROL_PRESSED,
            _ => opacity::CONTROL,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: base * fade,
                ..palette::BLACK
            })),
            text_color: Color {
                a: fade,
                ..palette::WHITE
            },
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// The dimming layer behind the enlarged image. `fade` runs from fully
/// transparent (just shown, or about to hide) to the resting backdrop level.
pub fn backdrop(fade: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP * fade,
            ..palette::INK_950
        })),
        text_color: Some(Color {
            a: fade,
            ..palette::PAPER_100
        }),
        ..container::Style::default()
    }
}

fn hint_bubble(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PAPER_100)),
        text_color: Some(palette::INK_950),
        border: Border {
            color: palette::PAPER_500,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        ..container::Style::default()
    }
}

/// Wraps a glyph-only control with a small labelled bubble, the visible
/// counterpart of the labels a narrator would announce.
pub fn hint<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    label: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let bubble = Container::new(Text::new(label.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(hint_bubble);

    tooltip(content, bubble, position).gap(spacing::XS)
}
