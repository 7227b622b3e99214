// SPDX-License-Identifier: MPL-2.0
//! Lightbox sub-component: the overlay that enlarges one piece at a time.
//!
//! Showing and hiding are both two-phase. On open the overlay is mounted
//! transparent, then activated one frame later so the fade-in actually runs.
//! On close the fade-out starts immediately but the overlay is only torn down
//! after [`EXIT_DELAY`], keeping it on screen for the whole transition. Every
//! pending timer carries the epoch it was armed in; a reopen or close in
//! between bumps the epoch and the stale timer is dropped on arrival instead
//! of yanking a revived overlay back down.

use crate::artwork::Piece;
use crate::i18n::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{styles, PLACEHOLDER_GLYPH};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, mouse_area, space, tooltip, Column, Container, Image, Row, Space, Stack, Text,
};
use iced::{Color, ContentFit, Element, Length};
use std::time::{Duration, Instant};

/// How long the hidden overlay stays mounted after a close, covering the
/// fade-out before teardown.
pub const EXIT_DELAY: Duration = Duration::from_millis(300);

/// Length of the opacity ramp in both directions.
pub const FADE_DURATION: Duration = Duration::from_millis(200);

/// One frame between mounting the transparent overlay and activating it, so
/// the fade-in starts from an actually committed transparent state.
pub const ACTIVATION_DELAY: Duration = Duration::from_millis(16);

/// Lifecycle of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not mounted at all.
    #[default]
    Hidden,
    /// Mounted transparent, waiting for the activation frame.
    Opening,
    /// Fully interactive, fading in or at rest.
    Active,
    /// Fading out, waiting for the teardown timer.
    Closing,
}

/// Lightbox sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    /// Current lifecycle phase.
    pub phase: Phase,
    /// Index of the displayed piece within the current selection.
    pub current: usize,
    /// Size of the selection the overlay navigates over, captured at open.
    pub count: usize,
    /// Invalidation token for in-flight activation and teardown timers.
    pub epoch: u64,
    /// When the current phase was entered; drives the opacity ramp.
    pub phase_changed_at: Instant,
}

impl Default for State {
    fn default() -> Self {
        Self {
            phase: Phase::Hidden,
            current: 0,
            count: 0,
            epoch: 0,
            phase_changed_at: Instant::now(),
        }
    }
}

/// Messages for the lightbox sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A piece was activated in the grid.
    OpenRequested { index: usize, count: usize },
    /// Close control pressed or Escape released.
    CloseRequested,
    /// Advance to the next piece, wrapping past the end.
    NextRequested,
    /// Step back to the previous piece, wrapping before the start.
    PreviousRequested,
    /// Press landed on the dimming layer outside the panel.
    BackdropPressed,
    /// Press landed inside the panel; swallowed so it cannot fall through
    /// to the backdrop underneath.
    ContentPressed,
    /// The activation frame elapsed.
    Activated { epoch: u64 },
    /// The teardown timer elapsed.
    HideFinished { epoch: u64 },
}

/// Effects the application loop turns into tasks.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// The overlay was mounted; arm the activation timer for `epoch` and
    /// start loading the full-size image for `index`.
    Opened { index: usize, epoch: u64 },
    /// The open overlay now points at a different piece; load its image.
    Retargeted { index: usize },
    /// Fade-out started; arm the teardown timer for `epoch`.
    Closing { epoch: u64 },
}

impl State {
    /// Handle a lightbox message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        let now = Instant::now();

        match msg {
            Message::OpenRequested { index, count } => {
                if count == 0 || index >= count {
                    return Effect::None;
                }
                self.count = count;

                match self.phase {
                    Phase::Hidden => {
                        self.epoch = self.epoch.wrapping_add(1);
                        self.phase = Phase::Opening;
                        self.phase_changed_at = now;
                        self.current = index;
                        Effect::Opened {
                            index,
                            epoch: self.epoch,
                        }
                    }
                    Phase::Opening | Phase::Active => {
                        self.current = index;
                        Effect::Retargeted { index }
                    }
                    Phase::Closing => {
                        // Cancel the pending teardown and come straight back,
                        // resuming the fade from its current level.
                        let level = self.opacity(now);
                        self.epoch = self.epoch.wrapping_add(1);
                        self.phase = Phase::Active;
                        self.phase_changed_at = now - FADE_DURATION.mul_f32(level);
                        self.current = index;
                        Effect::Retargeted { index }
                    }
                }
            }
            Message::CloseRequested | Message::BackdropPressed => self.close(now),
            Message::NextRequested => {
                if !self.is_open() {
                    return Effect::None;
                }
                self.current = (self.current + 1) % self.count;
                Effect::Retargeted {
                    index: self.current,
                }
            }
            Message::PreviousRequested => {
                if !self.is_open() {
                    return Effect::None;
                }
                self.current = (self.current + self.count - 1) % self.count;
                Effect::Retargeted {
                    index: self.current,
                }
            }
            Message::ContentPressed => Effect::None,
            Message::Activated { epoch } => {
                if epoch == self.epoch && self.phase == Phase::Opening {
                    self.phase = Phase::Active;
                    self.phase_changed_at = now;
                }
                Effect::None
            }
            Message::HideFinished { epoch } => {
                if epoch == self.epoch && self.phase == Phase::Closing {
                    self.phase = Phase::Hidden;
                    self.phase_changed_at = now;
                }
                Effect::None
            }
        }
    }

    fn close(&mut self, now: Instant) -> Effect {
        match self.phase {
            Phase::Opening | Phase::Active => {
                // Bumping the epoch also disarms a pending activation.
                let level = self.opacity(now);
                self.epoch = self.epoch.wrapping_add(1);
                self.phase = Phase::Closing;
                self.phase_changed_at = now - FADE_DURATION.mul_f32(1.0 - level);
                Effect::Closing { epoch: self.epoch }
            }
            Phase::Hidden | Phase::Closing => Effect::None,
        }
    }

    /// Whether the overlay accepts navigation and close requests.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Opening | Phase::Active)
    }

    /// Whether the overlay occupies the screen at all, fade-out included.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// Index of the piece the overlay shows, as long as it is on screen.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.is_visible().then_some(self.current)
    }

    /// Overlay opacity at `now`, in `0.0..=1.0`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.phase_changed_at);
        match self.phase {
            Phase::Hidden | Phase::Opening => 0.0,
            Phase::Active => ramp(elapsed),
            Phase::Closing => 1.0 - ramp(elapsed),
        }
    }

    /// Whether the opacity ramp is still running and redraws are needed.
    #[must_use]
    pub fn is_fading(&self, now: Instant) -> bool {
        match self.phase {
            Phase::Active | Phase::Closing => {
                now.saturating_duration_since(self.phase_changed_at) < FADE_DURATION
            }
            Phase::Hidden | Phase::Opening => false,
        }
    }
}

fn ramp(elapsed: Duration) -> f32 {
    (elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32()).clamp(0.0, 1.0)
}

/// What the enlarged view currently has to show for the piece.
#[derive(Debug, Clone, Copy)]
pub enum Visual<'a> {
    /// Full-size image still decoding.
    Loading,
    /// Decoded and ready to draw.
    Ready(&'a ImageData),
    /// Decode failed; the placeholder glyph stands in.
    Failed,
}

/// Render the overlay: dimming layer, enlarged image, controls and caption.
pub fn view<'a>(
    state: &'a State,
    piece: &'a Piece,
    visual: Visual<'a>,
    i18n: &I18n,
) -> Element<'a, Message> {
    let fade = state.opacity(Instant::now());

    let veil = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::backdrop(fade)),
    )
    .on_press(Message::BackdropPressed);

    let close_button = styles::hint(
        control("✕", typography::TITLE_MD, fade, Message::CloseRequested),
        i18n.tr("lightbox-close"),
        tooltip::Position::Bottom,
    );

    let top_row = Row::new()
        .width(Length::Fill)
        .push(space::horizontal())
        .push(close_button);

    let stage: Element<'_, Message> = match visual {
        Visual::Ready(data) => Image::new(data.handle.clone())
            .content_fit(ContentFit::Contain)
            .opacity(fade)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Visual::Loading => Container::new(
            Text::new(i18n.tr("lightbox-loading"))
                .size(typography::BODY)
                .color(Color {
                    a: fade,
                    ..palette::PAPER_300
                }),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into(),
        Visual::Failed => Container::new(
            Column::new()
                .spacing(spacing::SM)
                .align_x(Horizontal::Center)
                .push(Text::new(PLACEHOLDER_GLYPH).size(typography::GLYPH_XL).color(
                    Color {
                        a: fade,
                        ..palette::PAPER_500
                    },
                ))
                .push(
                    Text::new(i18n.tr("lightbox-image-failed"))
                        .size(typography::BODY)
                        .color(Color {
                            a: fade,
                            ..palette::PAPER_300
                        }),
                ),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into(),
    };

    let previous_button = styles::hint(
        control("◀", typography::TITLE_LG, fade, Message::PreviousRequested),
        i18n.tr("lightbox-previous"),
        tooltip::Position::Right,
    );

    let next_button = styles::hint(
        control("▶", typography::TITLE_LG, fade, Message::NextRequested),
        i18n.tr("lightbox-next"),
        tooltip::Position::Left,
    );

    let stage_row = Row::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(previous_button)
        .push(stage)
        .push(next_button);

    let caption = Container::new(
        Text::new(piece.caption()).size(typography::BODY).color(Color {
            a: fade,
            ..palette::PAPER_100
        }),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center);

    let panel = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .max_width(sizing::LIGHTBOX_MAX_WIDTH)
        .spacing(spacing::SM)
        .push(top_row)
        .push(stage_row)
        .push(caption);

    let panel = Container::new(mouse_area(panel).on_press(Message::ContentPressed))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::XL);

    Stack::new().push(veil).push(panel).into()
}

/// A square control with a centered glyph, sized for comfortable hits.
fn control(glyph: &str, size: f32, fade: f32, msg: Message) -> iced::widget::Button<'_, Message> {
    button(
        Container::new(Text::new(glyph).size(size))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::CONTROL_HIT))
    .height(Length::Fixed(sizing::CONTROL_HIT))
    .padding(0.0)
    .style(styles::lightbox_control(fade))
    .on_press(msg)
}
