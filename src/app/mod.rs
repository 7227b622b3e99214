// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the
//! lightbox.
//!
//! The `App` struct owns the collection, the filtered selection, and the two
//! UI components, and turns their effects into tasks: image decodes on the
//! blocking pool and the delayed overlay transitions. Startup policy (status
//! tag resolution, window sizing, config warnings) lives here so user-facing
//! behavior stays easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::artwork::{Piece, SiteText, DEFAULT_STATUS_TAG};
use crate::config;
use crate::i18n::I18n;
use crate::media::ImageCache;
use crate::ui::{gallery, header, lightbox};
use iced::{window, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;
use tracing::warn;

/// Root application state bridging the collection, the grid, and the overlay.
pub struct App {
    pub i18n: I18n,
    /// Directory holding `_data/` and the image files.
    site_root: PathBuf,
    /// Status tag of the current selection.
    status_tag: String,
    /// Full collection as loaded from the manifest.
    pieces: Vec<Piece>,
    /// Pieces matching the current status tag, in manifest order.
    displayed: Vec<Piece>,
    /// Free-text overrides for the heading and about paragraph.
    site_text: Option<SiteText>,
    gallery: gallery::State,
    lightbox: lightbox::State,
    /// Decoded full-size images, keyed by absolute-ish path.
    cache: ImageCache,
    /// Whether the full-size decode of the piece on screen failed.
    full_image_failed: bool,
    /// Last reported window width; drives the grid reflow.
    window_width: f32,
    /// True between startup or reload and the manifest arriving.
    loading: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("status_tag", &self.status_tag)
            .field("displayed", &self.displayed.len())
            .field("lightbox_visible", &self.lightbox.is_visible())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 300;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Launches the Iced runtime with the given startup flags.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a Fn boot closure, but the flags must move into
    // App::new exactly once; the RefCell<Option<_>> bridges the two.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            site_root: PathBuf::from("."),
            status_tag: DEFAULT_STATUS_TAG.to_string(),
            pieces: Vec::new(),
            displayed: Vec::new(),
            site_text: None,
            gallery: gallery::State::default(),
            lightbox: lightbox::State::default(),
            cache: ImageCache::default(),
            full_image_failed: false,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            loading: true,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the manifest and site
    /// text loads for the selected site root.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            warn!("Configuration problem: {}", warning);
        }
        if let Err(err) = config::init_if_missing(&config) {
            warn!("Failed to write initial configuration: {}", err);
        }

        let i18n = I18n::new(flags.lang, config.language);

        // CLI flag first, then the configured default; blank values fall
        // through, matching how missing tags are treated elsewhere.
        let status_tag = flags
            .status
            .filter(|tag| !tag.is_empty())
            .or_else(|| config.default_status.filter(|tag| !tag.is_empty()))
            .unwrap_or_else(|| DEFAULT_STATUS_TAG.to_string());

        let site_root = flags
            .site_root
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let app = App {
            i18n,
            status_tag,
            site_root: site_root.clone(),
            ..Self::default()
        };

        (app, update::load_site(site_root))
    }

    fn title(&self) -> String {
        let app_name = header::heading(self.site_text.as_ref(), &self.i18n);

        match self
            .lightbox
            .current()
            .and_then(|index| self.displayed.get(index))
        {
            Some(piece) => {
                let title = &piece.title;
                format!("{title} — {app_name}")
            }
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.lightbox.is_open());
        let tick_sub =
            subscription::create_tick_subscription(self.lightbox.is_fading(Instant::now()));

        Subscription::batch([event_sub, tick_sub])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::media::ImageData;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::env::set_var(config::ENV_CONFIG_DIR, temp_dir.path());

        test();

        std::env::remove_var(config::ENV_CONFIG_DIR);
    }

    fn piece(title: &str, image: &str, status: Option<&str>) -> Piece {
        Piece {
            title: title.to_string(),
            image: image.to_string(),
            date: None,
            medium: None,
            description: None,
            status: status.map(String::from),
        }
    }

    fn mixed_collection() -> Vec<Piece> {
        vec![
            piece("Dunes", "images/dunes.jpg", None),
            piece("Tide", "images/tide.jpg", Some("available")),
            piece("Ember", "images/ember.jpg", Some("sold")),
            piece("Drift", "images/drift.jpg", Some("sold")),
        ]
    }

    fn loaded_app() -> App {
        let mut app = App::default();
        let _ = app.update(Message::CollectionLoaded(mixed_collection()));
        app
    }

    /// Presses a cell and delivers the activation frame, like the runtime
    /// would one frame later.
    fn open_on(app: &mut App, index: usize) {
        let _ = app.update(Message::Gallery(gallery::Message::CellPressed { index }));
        let epoch = app.lightbox.epoch;
        let _ = app.update(Message::Lightbox(lightbox::Message::Activated { epoch }));
    }

    #[test]
    fn default_app_is_loading_and_empty() {
        let app = App::default();
        assert!(app.loading);
        assert!(app.displayed.is_empty());
        assert!(!app.lightbox.is_visible());
    }

    #[test]
    fn collection_loaded_filters_to_the_default_tag() {
        let app = loaded_app();

        assert!(!app.loading);
        let titles: Vec<&str> = app.displayed.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Dunes", "Tide"], "untagged counts as available");
        assert_eq!(app.gallery.thumbs.len(), 2);
    }

    #[test]
    fn switching_tabs_rebuilds_the_selection_and_discards_the_overlay() {
        let mut app = loaded_app();
        open_on(&mut app, 0);

        let _ = app.update(Message::Header(header::Message::StatusSelected(
            "sold".to_string(),
        )));

        let titles: Vec<&str> = app.displayed.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Ember", "Drift"]);
        assert!(!app.lightbox.is_visible());
        assert_eq!(app.gallery.thumbs.len(), 2);
        assert_eq!(app.gallery.focused, None);
    }

    #[test]
    fn reselecting_the_active_tab_changes_nothing() {
        let mut app = loaded_app();
        let generation = app.gallery.generation;

        let _ = app.update(Message::Header(header::Message::StatusSelected(
            DEFAULT_STATUS_TAG.to_string(),
        )));

        assert_eq!(app.gallery.generation, generation);
    }

    #[test]
    fn cell_press_mounts_the_overlay_transparent() {
        let mut app = loaded_app();

        let _ = app.update(Message::Gallery(gallery::Message::CellPressed { index: 1 }));

        assert_eq!(app.lightbox.phase, lightbox::Phase::Opening);
        assert_eq!(app.lightbox.current(), Some(1));
        assert_eq!(app.lightbox.opacity(Instant::now()), 0.0);
    }

    #[test]
    fn activation_frame_starts_the_fade_in() {
        let mut app = loaded_app();
        open_on(&mut app, 0);

        assert_eq!(app.lightbox.phase, lightbox::Phase::Active);
    }

    #[test]
    fn stale_activation_after_close_is_dropped() {
        let mut app = loaded_app();
        let _ = app.update(Message::Gallery(gallery::Message::CellPressed { index: 0 }));
        let stale_epoch = app.lightbox.epoch;

        let _ = app.update(Message::Lightbox(lightbox::Message::CloseRequested));
        let _ = app.update(Message::Lightbox(lightbox::Message::Activated {
            epoch: stale_epoch,
        }));

        assert_eq!(app.lightbox.phase, lightbox::Phase::Closing);
    }

    #[test]
    fn stale_teardown_does_not_yank_a_reopened_overlay() {
        let mut app = loaded_app();
        open_on(&mut app, 0);
        let _ = app.update(Message::Lightbox(lightbox::Message::CloseRequested));
        let stale_epoch = app.lightbox.epoch;

        // Reopen while the fade-out is still running.
        open_on(&mut app, 1);
        let _ = app.update(Message::Lightbox(lightbox::Message::HideFinished {
            epoch: stale_epoch,
        }));

        assert!(app.lightbox.is_open());
        assert_eq!(app.lightbox.current(), Some(1));
    }

    #[test]
    fn overlay_navigation_wraps_around_the_selection() {
        let mut app = loaded_app();
        open_on(&mut app, 0);

        let _ = app.update(Message::Lightbox(lightbox::Message::NextRequested));
        assert_eq!(app.lightbox.current(), Some(1));

        let _ = app.update(Message::Lightbox(lightbox::Message::NextRequested));
        assert_eq!(app.lightbox.current(), Some(0), "wraps past the end");
    }

    #[test]
    fn backdrop_press_closes_but_content_press_does_not() {
        let mut app = loaded_app();
        open_on(&mut app, 0);

        let _ = app.update(Message::Lightbox(lightbox::Message::ContentPressed));
        assert!(app.lightbox.is_open());

        let _ = app.update(Message::Lightbox(lightbox::Message::BackdropPressed));
        assert!(!app.lightbox.is_open());
        assert!(
            app.lightbox.is_visible(),
            "overlay stays mounted for the fade-out"
        );
    }

    #[test]
    fn press_outside_the_grid_range_is_ignored() {
        let mut app = loaded_app();

        let _ = app.update(Message::Gallery(gallery::Message::CellPressed { index: 9 }));

        assert!(!app.lightbox.is_visible());
    }

    #[test]
    fn loaded_full_image_lands_in_the_cache() {
        let mut app = loaded_app();
        let path = app.site_root.join("images/dunes.jpg");

        let _ = app.update(Message::FullImageLoaded {
            path: path.clone(),
            result: Ok(ImageData::from_rgba(1, 1, vec![255, 255, 255, 255])),
        });

        assert!(app.cache.contains(&path));
        assert!(!app.full_image_failed);
    }

    #[test]
    fn failed_decode_marks_the_shown_piece() {
        let mut app = loaded_app();
        open_on(&mut app, 0);

        let _ = app.update(Message::FullImageLoaded {
            path: app.site_root.join("images/dunes.jpg"),
            result: Err(Error::Image("decode failed".to_string())),
        });

        assert!(app.full_image_failed);
    }

    #[test]
    fn failed_decode_of_another_piece_is_ignored() {
        let mut app = loaded_app();
        open_on(&mut app, 0);

        let _ = app.update(Message::FullImageLoaded {
            path: app.site_root.join("images/tide.jpg"),
            result: Err(Error::Image("decode failed".to_string())),
        });

        assert!(!app.full_image_failed);
    }

    #[test]
    fn navigating_away_clears_the_failure_marker() {
        let mut app = loaded_app();
        open_on(&mut app, 0);
        let _ = app.update(Message::FullImageLoaded {
            path: app.site_root.join("images/dunes.jpg"),
            result: Err(Error::Image("decode failed".to_string())),
        });
        assert!(app.full_image_failed);

        let _ = app.update(Message::Lightbox(lightbox::Message::NextRequested));

        assert!(!app.full_image_failed);
    }

    #[test]
    fn reload_waits_for_the_overlay_to_leave_the_screen() {
        let mut app = loaded_app();
        open_on(&mut app, 0);

        let _ = app.update(Message::ReloadRequested);
        assert!(!app.loading);

        // Still fading out; the overlay counts as on screen.
        let _ = app.update(Message::Lightbox(lightbox::Message::CloseRequested));
        let _ = app.update(Message::ReloadRequested);
        assert!(!app.loading);
    }

    #[test]
    fn reload_rereads_the_site_once_idle() {
        let mut app = loaded_app();

        let _ = app.update(Message::ReloadRequested);

        assert!(app.loading);
    }

    #[test]
    fn resize_reflows_the_grid() {
        let mut app = loaded_app();

        let _ = app.update(Message::WindowResized(500.0));
        assert_eq!(gallery::columns_for(app.window_width), 1);

        let _ = app.update(Message::WindowResized(1400.0));
        assert_eq!(gallery::columns_for(app.window_width), 4);
    }

    #[test]
    fn row_navigation_uses_the_live_width() {
        let mut app = App::default();
        let pieces: Vec<Piece> = (0..6)
            .map(|n| piece(&format!("Piece {n}"), &format!("images/{n}.jpg"), None))
            .collect();
        let _ = app.update(Message::CollectionLoaded(pieces));
        let _ = app.update(Message::WindowResized(700.0));

        let _ = app.update(Message::Gallery(gallery::Message::FocusAdvanced));
        let _ = app.update(Message::FocusRowDown);
        assert_eq!(app.gallery.focused, Some(2), "two columns at 700px");

        let _ = app.update(Message::FocusRowUp);
        assert_eq!(app.gallery.focused, Some(0));
    }

    #[test]
    fn title_names_the_enlarged_piece() {
        let mut app = loaded_app();
        assert_eq!(app.title(), app.i18n.tr("app-name"));

        open_on(&mut app, 1);

        let title = app.title();
        assert!(title.starts_with("Tide"));
        assert!(title.contains(" — "));
    }

    #[test]
    fn title_prefers_the_site_heading() {
        let mut app = loaded_app();
        app.site_text = Some(SiteText {
            hero_heading: Some("Atelier Lumen".to_string()),
            about_text: None,
        });

        assert_eq!(app.title(), "Atelier Lumen");
    }

    #[test]
    fn new_prefers_the_status_flag_over_config() {
        with_temp_config_dir(|| {
            config::save(&config::Config {
                language: None,
                default_status: Some("sold".to_string()),
            })
            .expect("save config");

            let (app, _task) = App::new(Flags {
                status: Some("commission".to_string()),
                ..Flags::default()
            });
            assert_eq!(app.status_tag, "commission");

            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.status_tag, "sold");
        });
    }

    #[test]
    fn new_falls_back_to_the_default_tag_when_blank() {
        with_temp_config_dir(|| {
            config::save(&config::Config {
                language: None,
                default_status: Some(String::new()),
            })
            .expect("save config");

            let (app, _task) = App::new(Flags {
                status: Some(String::new()),
                ..Flags::default()
            });
            assert_eq!(app.status_tag, DEFAULT_STATUS_TAG);
        });
    }

    #[test]
    fn new_uses_the_site_root_flag() {
        with_temp_config_dir(|| {
            let (app, _task) = App::new(Flags {
                site_root: Some("/srv/portfolio".to_string()),
                ..Flags::default()
            });

            assert_eq!(app.site_root, PathBuf::from("/srv/portfolio"));
        });
    }
}
