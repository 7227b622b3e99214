// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Sub-components return effects from their handlers; this module turns the
//! effects into tasks: image decodes on the blocking pool, and the delayed
//! activation and teardown messages of the lightbox protocol.

use super::{App, Message};
use crate::artwork::{filter, loader};
use crate::error::Error;
use crate::media::{self, THUMBNAIL_MAX_EDGE};
use crate::ui::{gallery, header, lightbox};
use iced::Task;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

impl App {
    /// Main update entrypoint.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CollectionLoaded(pieces) => {
                self.loading = false;
                self.pieces = pieces;
                self.rebuild_selection()
            }
            Message::SiteTextLoaded(site_text) => {
                self.site_text = site_text;
                Task::none()
            }
            Message::Header(header::Message::StatusSelected(tag)) => {
                if tag == self.status_tag {
                    return Task::none();
                }
                self.status_tag = tag;
                self.rebuild_selection()
            }
            Message::Gallery(msg) => {
                let effect = self.gallery.handle(msg);
                self.apply_gallery_effect(effect)
            }
            Message::Lightbox(msg) => {
                let effect = self.lightbox.handle(msg);
                self.apply_lightbox_effect(effect)
            }
            Message::FullImageLoaded { path, result } => {
                match result {
                    Ok(data) => {
                        self.cache.insert(path, data);
                    }
                    Err(err) => {
                        warn!("Failed to load image {}: {}", path.display(), err);
                        if self.shown_image_path().as_deref() == Some(path.as_path()) {
                            self.full_image_failed = true;
                        }
                    }
                }
                Task::none()
            }
            Message::FocusRowDown => {
                let columns = gallery::columns_for(self.window_width);
                let effect = self.gallery.handle(gallery::Message::FocusMovedDown { columns });
                self.apply_gallery_effect(effect)
            }
            Message::FocusRowUp => {
                let columns = gallery::columns_for(self.window_width);
                let effect = self.gallery.handle(gallery::Message::FocusMovedUp { columns });
                self.apply_gallery_effect(effect)
            }
            Message::ReloadRequested => {
                // Only while nothing is enlarged; a fading-out overlay counts.
                if self.lightbox.is_visible() || self.loading {
                    return Task::none();
                }
                self.loading = true;
                load_site(self.site_root.clone())
            }
            Message::WindowResized(width) => {
                self.window_width = width;
                Task::none()
            }
            // The pulse only exists to trigger a redraw mid-fade.
            Message::FadeTick(_) => Task::none(),
        }
    }

    /// Re-filter the collection for the current status tag and restart the
    /// thumbnail decodes. Any open overlay belongs to the previous selection
    /// and is discarded outright.
    fn rebuild_selection(&mut self) -> Task<Message> {
        self.lightbox = lightbox::State::default();
        self.full_image_failed = false;
        self.displayed = filter::by_status(&self.pieces, &self.status_tag);

        let generation = self.gallery.reset(self.displayed.len());
        let decodes: Vec<Task<Message>> = self
            .displayed
            .iter()
            .enumerate()
            .map(|(index, piece)| {
                let path = self.site_root.join(&piece.image);
                let title = piece.title.clone();
                Task::perform(
                    decode_thumbnail(path),
                    move |result| {
                        let loaded = match result {
                            Ok(data) => Some(data),
                            Err(err) => {
                                warn!("Failed to load thumbnail for {}: {}", title, err);
                                None
                            }
                        };
                        Message::Gallery(gallery::Message::ThumbLoaded {
                            index,
                            generation,
                            loaded,
                        })
                    },
                )
            })
            .collect();

        Task::batch(decodes)
    }

    fn apply_gallery_effect(&mut self, effect: gallery::Effect) -> Task<Message> {
        match effect {
            gallery::Effect::None => Task::none(),
            gallery::Effect::Activated { index } => {
                let effect = self.lightbox.handle(lightbox::Message::OpenRequested {
                    index,
                    count: self.displayed.len(),
                });
                self.apply_lightbox_effect(effect)
            }
        }
    }

    fn apply_lightbox_effect(&mut self, effect: lightbox::Effect) -> Task<Message> {
        match effect {
            lightbox::Effect::None => Task::none(),
            lightbox::Effect::Opened { index, epoch } => Task::batch([
                delayed(
                    lightbox::ACTIVATION_DELAY,
                    lightbox::Message::Activated { epoch },
                ),
                self.ensure_full_image(index),
            ]),
            lightbox::Effect::Retargeted { index } => self.ensure_full_image(index),
            lightbox::Effect::Closing { epoch } => delayed(
                lightbox::EXIT_DELAY,
                lightbox::Message::HideFinished { epoch },
            ),
        }
    }

    /// Start a full-size decode for the piece unless the cache already has
    /// it. Also clears the failure marker so a retried piece loads fresh.
    fn ensure_full_image(&mut self, index: usize) -> Task<Message> {
        self.full_image_failed = false;
        let Some(piece) = self.displayed.get(index) else {
            return Task::none();
        };

        let path = self.site_root.join(&piece.image);
        if self.cache.get(&path).is_some() {
            return Task::none();
        }

        let decode_path = path.clone();
        Task::perform(decode_full(decode_path), move |result| {
            Message::FullImageLoaded {
                path: path.clone(),
                result,
            }
        })
    }

    /// Path of the image the overlay currently shows, if any.
    pub(super) fn shown_image_path(&self) -> Option<PathBuf> {
        let index = self.lightbox.current()?;
        let piece = self.displayed.get(index)?;
        Some(self.site_root.join(&piece.image))
    }
}

/// Load the manifest and the site text together, for startup and reload.
pub(super) fn load_site(site_root: PathBuf) -> Task<Message> {
    Task::batch([
        Task::perform(
            loader::load_collection(site_root.clone()),
            Message::CollectionLoaded,
        ),
        Task::perform(loader::load_site_text(site_root), Message::SiteTextLoaded),
    ])
}

async fn decode_thumbnail(path: PathBuf) -> Result<media::ImageData, Error> {
    tokio::task::spawn_blocking(move || media::load_thumbnail(path, THUMBNAIL_MAX_EDGE))
        .await
        .unwrap_or_else(|join_err| Err(Error::Image(join_err.to_string())))
}

async fn decode_full(path: PathBuf) -> Result<media::ImageData, Error> {
    tokio::task::spawn_blocking(move || media::load_image(path))
        .await
        .unwrap_or_else(|join_err| Err(Error::Image(join_err.to_string())))
}

fn delayed(after: Duration, message: lightbox::Message) -> Task<Message> {
    Task::perform(
        async move { tokio::time::sleep(after).await },
        move |()| Message::Lightbox(message.clone()),
    )
}
