// SPDX-License-Identifier: MPL-2.0
//! Root message type and the startup flags carried in from the CLI.

use crate::artwork::{Piece, SiteText};
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::{gallery, header, lightbox};
use std::path::PathBuf;
use std::time::Instant;

/// Everything `App::update` reacts to: wrapped sub-component messages plus
/// the events only the root can handle (loads, resize, reload, timers).
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Lightbox(lightbox::Message),
    Header(header::Message),
    /// The artwork manifest finished loading.
    CollectionLoaded(Vec<Piece>),
    /// The optional site text finished loading.
    SiteTextLoaded(Option<SiteText>),
    /// A full-size image decode finished.
    FullImageLoaded {
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    /// Move the gallery focus one row down; the row width depends on the
    /// current window size, which only the application knows.
    FocusRowDown,
    /// Move the gallery focus one row up.
    FocusRowUp,
    /// Re-read the collection from disk (R key while the overlay is closed).
    ReloadRequested,
    /// The window was resized; the grid reflows to the new width.
    WindowResized(f32),
    /// Frame pulse while an overlay fade is running.
    FadeTick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Locale override as a BCP-47 tag (`fr`, `en-US`).
    pub lang: Option<String>,
    /// Status tag selected at startup; the default view when unset or blank.
    pub status: Option<String>,
    /// Site root holding `_data/` and the image files.
    pub site_root: Option<String>,
}
