// SPDX-License-Identifier: MPL-2.0
//! Gallery sub-component: the grid of cards for the current selection.
//!
//! Thumbnails arrive asynchronously, one message per decoded image. Each
//! rebuild of the selection bumps a generation counter and results stamped
//! with an older generation are dropped, so a slow decode from a previous
//! tab can never land in the new grid.

use crate::artwork::{Piece, DEFAULT_STATUS_TAG, SOLD_STATUS_TAG};
use crate::i18n::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{styles, PLACEHOLDER_GLYPH};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, tooltip, Column, Container, Image, Row, Space, Text};
use iced::{ContentFit, Element, Length};

/// What a cell currently shows in its image frame.
#[derive(Debug, Clone, Default)]
pub enum Thumb {
    /// Decode still in flight; the bare frame shows.
    #[default]
    Loading,
    /// Decoded thumbnail ready to draw.
    Ready(ImageData),
    /// Decode failed; the cell degrades to the placeholder glyph.
    Failed,
}

/// Gallery sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// One slot per piece of the current selection, in display order.
    pub thumbs: Vec<Thumb>,
    /// Index of the keyboard-focused cell, if any.
    pub focused: Option<usize>,
    /// Stamp for in-flight thumbnail decodes; older results are stale.
    pub generation: u64,
}

/// Messages for the gallery sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A thumbnail decode finished; `None` means it failed.
    ThumbLoaded {
        index: usize,
        generation: u64,
        loaded: Option<ImageData>,
    },
    /// Move focus to the next cell (Tab, right arrow).
    FocusAdvanced,
    /// Move focus to the previous cell (Shift+Tab, left arrow).
    FocusReversed,
    /// Move focus one row down, clamped to the last cell.
    FocusMovedDown { columns: usize },
    /// Move focus one row up, clamped to the first cell.
    FocusMovedUp { columns: usize },
    /// Activate the focused cell (Enter, Space).
    ActivateFocused,
    /// A cell was clicked.
    CellPressed { index: usize },
}

/// Effects produced by gallery changes.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// A piece was activated and should be enlarged.
    Activated { index: usize },
}

impl State {
    /// Replace the grid with `count` empty slots for a fresh selection.
    /// Returns the new generation to stamp decode tasks with.
    pub fn reset(&mut self, count: usize) -> u64 {
        self.thumbs = vec![Thumb::Loading; count];
        self.focused = None;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Handle a gallery message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::ThumbLoaded {
                index,
                generation,
                loaded,
            } => {
                if generation == self.generation {
                    if let Some(slot) = self.thumbs.get_mut(index) {
                        *slot = match loaded {
                            Some(data) => Thumb::Ready(data),
                            None => Thumb::Failed,
                        };
                    }
                }
                Effect::None
            }
            Message::FocusAdvanced => {
                if let Some(last) = self.last_index() {
                    self.focused = Some(match self.focused {
                        Some(index) => (index + 1).min(last),
                        None => 0,
                    });
                }
                Effect::None
            }
            Message::FocusReversed => {
                if let Some(last) = self.last_index() {
                    self.focused = Some(match self.focused {
                        Some(index) => index.saturating_sub(1),
                        None => last,
                    });
                }
                Effect::None
            }
            Message::FocusMovedDown { columns } => {
                if let Some(last) = self.last_index() {
                    self.focused = Some(match self.focused {
                        Some(index) => (index + columns.max(1)).min(last),
                        None => 0,
                    });
                }
                Effect::None
            }
            Message::FocusMovedUp { columns } => {
                if self.last_index().is_some() {
                    self.focused = Some(match self.focused {
                        Some(index) => index.saturating_sub(columns.max(1)),
                        None => 0,
                    });
                }
                Effect::None
            }
            Message::ActivateFocused => match self.focused {
                Some(index) => Effect::Activated { index },
                None => Effect::None,
            },
            Message::CellPressed { index } => {
                if index < self.thumbs.len() {
                    self.focused = Some(index);
                    Effect::Activated { index }
                } else {
                    Effect::None
                }
            }
        }
    }

    fn last_index(&self) -> Option<usize> {
        self.thumbs.len().checked_sub(1)
    }
}

/// Number of cells per row for a given window width.
#[must_use]
pub fn columns_for(width: f32) -> usize {
    let cell = sizing::CELL_WIDTH + spacing::MD;
    let usable = width - 2.0 * spacing::XL;
    ((usable / cell).floor() as usize).max(1)
}

/// Wording for an empty selection, tuned per status tag.
fn empty_message(status_tag: &str, i18n: &I18n) -> String {
    match status_tag {
        DEFAULT_STATUS_TAG => i18n.tr("gallery-empty-default"),
        SOLD_STATUS_TAG => i18n.tr("gallery-empty-sold"),
        other => i18n.tr_with_args("gallery-empty-tagged", &[("status", other)]),
    }
}

/// Render the grid, or the per-selection empty message when there is
/// nothing to show.
pub fn view<'a>(
    state: &'a State,
    pieces: &'a [Piece],
    columns: usize,
    status_tag: &str,
    i18n: &I18n,
) -> Element<'a, Message> {
    if pieces.is_empty() {
        return Container::new(
            Text::new(empty_message(status_tag, i18n))
                .size(typography::BODY)
                .color(palette::PAPER_300),
        )
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .into();
    }

    let columns = columns.max(1);
    let mut grid = Column::new().spacing(spacing::LG);
    let mut row = Row::new().spacing(spacing::MD);
    let mut cells_in_row = 0;

    for (index, piece) in pieces.iter().enumerate() {
        row = row.push(cell(state, index, piece, i18n));
        cells_in_row += 1;
        if cells_in_row == columns {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::MD);
            cells_in_row = 0;
        }
    }
    if cells_in_row > 0 {
        grid = grid.push(row);
    }

    Container::new(grid)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn cell<'a>(state: &'a State, index: usize, piece: &'a Piece, i18n: &I18n) -> Element<'a, Message> {
    let frame: Element<'a, Message> = match state.thumbs.get(index) {
        Some(Thumb::Ready(data)) => Image::new(data.handle.clone())
            .content_fit(ContentFit::Fill)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CELL_IMAGE_HEIGHT))
            .into(),
        Some(Thumb::Failed) => Container::new(
            Text::new(PLACEHOLDER_GLYPH)
                .size(typography::GLYPH_XL)
                .color(palette::PAPER_500),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CELL_IMAGE_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::cell_image_frame)
        .into(),
        _ => Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CELL_IMAGE_HEIGHT))
            .style(styles::cell_image_frame)
            .into(),
    };

    let mut text_block = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(piece.title.as_str()).size(typography::TITLE_SM));
    if let Some(meta) = piece.meta_line() {
        text_block = text_block.push(
            Text::new(meta)
                .size(typography::CAPTION)
                .color(palette::PAPER_300),
        );
    }

    let content = Column::new()
        .spacing(spacing::SM)
        .push(frame)
        .push(text_block);

    let card = button(content)
        .width(Length::Fixed(sizing::CELL_WIDTH))
        .padding(spacing::SM)
        .style(styles::gallery_cell(state.focused == Some(index)))
        .on_press(Message::CellPressed { index });

    styles::hint(
        card,
        i18n.tr_with_args("gallery-view-piece", &[("title", piece.title.as_str())]),
        tooltip::Position::Top,
    )
    .into()
}
