// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard routing switches with the lightbox: while the overlay is open it
//! owns Escape and the arrow keys; otherwise the keys drive gallery focus.
//! Only events no widget captured are considered, and `listen_with` takes a
//! plain function, hence one routing function per mode.

use super::Message;
use crate::ui::{gallery, lightbox};
use iced::keyboard::key::Named;
use iced::keyboard::{self, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Redraw cadence while an overlay fade is running.
const FADE_TICK: Duration = Duration::from_millis(16);

/// Creates the event subscription for the current mode.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if lightbox_open {
        event::listen_with(route_lightbox_events)
    } else {
        event::listen_with(route_gallery_events)
    }
}

fn route_lightbox_events(
    event: event::Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if let event::Event::Window(window::Event::Resized(size)) = &event {
        return Some(Message::WindowResized(size.width));
    }

    if status == event::Status::Captured {
        return None;
    }

    let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
        return None;
    };

    match key.as_ref() {
        Key::Named(Named::Escape) => {
            Some(Message::Lightbox(lightbox::Message::CloseRequested))
        }
        Key::Named(Named::ArrowRight) => {
            Some(Message::Lightbox(lightbox::Message::NextRequested))
        }
        Key::Named(Named::ArrowLeft) => {
            Some(Message::Lightbox(lightbox::Message::PreviousRequested))
        }
        _ => None,
    }
}

fn route_gallery_events(
    event: event::Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if let event::Event::Window(window::Event::Resized(size)) = &event {
        return Some(Message::WindowResized(size.width));
    }

    if status == event::Status::Captured {
        return None;
    }

    let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return None;
    };

    match key.as_ref() {
        Key::Named(Named::Tab) if modifiers.shift() => {
            Some(Message::Gallery(gallery::Message::FocusReversed))
        }
        Key::Named(Named::Tab) => Some(Message::Gallery(gallery::Message::FocusAdvanced)),
        Key::Named(Named::ArrowRight) => Some(Message::Gallery(gallery::Message::FocusAdvanced)),
        Key::Named(Named::ArrowLeft) => Some(Message::Gallery(gallery::Message::FocusReversed)),
        Key::Named(Named::ArrowDown) => Some(Message::FocusRowDown),
        Key::Named(Named::ArrowUp) => Some(Message::FocusRowUp),
        Key::Named(Named::Enter) | Key::Named(Named::Space) => {
            Some(Message::Gallery(gallery::Message::ActivateFocused))
        }
        Key::Character(pressed) if pressed.eq_ignore_ascii_case("r") => {
            Some(Message::ReloadRequested)
        }
        _ => None,
    }
}

/// Creates a periodic redraw subscription while the lightbox fades, so the
/// opacity ramp renders smoothly between messages.
pub fn create_tick_subscription(is_fading: bool) -> Subscription<Message> {
    if is_fading {
        time::every(FADE_TICK).map(Message::FadeTick)
    } else {
        Subscription::none()
    }
}
