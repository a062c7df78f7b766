// SPDX-License-Identifier: MPL-2.0
//! Top-level messages consumed by [`App::update`](super::App::update).

use crate::ui::carousel::component;

/// The host page forwards everything to the carousel; its own state (caption,
/// paused badge) is derived from the carousel's effects.
#[derive(Debug, Clone)]
pub enum Message {
    Carousel(component::Message),
}
