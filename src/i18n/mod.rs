// SPDX-License-Identifier: MPL-2.0
//! Localization of the UI strings via Fluent.
//!
//! The `.ftl` resources are embedded at compile time, one bundle per locale.
//! The startup locale comes from the CLI flag, the config file, or the OS
//! locale, in that order, with `en-US` as the final fallback.

pub mod fluent;

pub use fluent::I18n;
