// SPDX-License-Identifier: MPL-2.0
//! `vitrine` is a promotional image showcase built with the Iced GUI framework.
//!
//! Its centerpiece is a carousel component with autoplay, hover suspension,
//! swipe navigation, a fullscreen overlay, and notification effects the
//! hosting page uses to render a caption card. It demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

pub mod app;
pub mod config;
pub mod deck;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
