// SPDX-License-Identifier: MPL-2.0
//! `galerie` renders a static portfolio site's artwork collection as a native
//! gallery: a status-filtered grid of pieces and a modal lightbox with
//! keyboard and pointer navigation, built with the Iced GUI framework.

#![doc(html_root_url = "https://docs.rs/galerie/0.2.0")]

pub mod app;
pub mod artwork;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod ui;
