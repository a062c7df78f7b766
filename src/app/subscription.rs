// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The autoplay timer and the fullscreen keyboard bindings are both modeled
//! as conditional subscriptions: Iced's subscription diffing starts them when
//! the condition becomes true and cancels them when it becomes false, so
//! there is never more than one live timer and no dangling key handler.

use super::{App, Message};
use crate::ui::carousel::{component, controls};
use iced::keyboard::{self, key, Key, Modifiers};
use iced::{time, Subscription};

/// All subscriptions for the current application state.
pub fn subscription(app: &App) -> Subscription<Message> {
    Subscription::batch([autoplay(app), fullscreen_keys(app)])
}

/// Recurring autoplay tick, live only while the carousel is effectively
/// playing (toggle on, pointer outside the hit area).
fn autoplay(app: &App) -> Subscription<Message> {
    let playing = app
        .carousel
        .as_ref()
        .is_some_and(|carousel| carousel.engine().effective_playing());

    if playing {
        time::every(app.config.autoplay_interval())
            .map(|_| Message::Carousel(component::Message::AutoplayTick))
    } else {
        Subscription::none()
    }
}

/// Keyboard navigation, bound only while the fullscreen overlay is shown.
fn fullscreen_keys(app: &App) -> Subscription<Message> {
    let fullscreen = app
        .carousel
        .as_ref()
        .is_some_and(|carousel| carousel.engine().is_fullscreen());

    if fullscreen {
        keyboard::on_key_press(on_key_press)
    } else {
        Subscription::none()
    }
}

fn on_key_press(key: Key, _modifiers: Modifiers) -> Option<Message> {
    let control = match key.as_ref() {
        Key::Named(key::Named::ArrowLeft) => controls::Message::Previous,
        Key::Named(key::Named::ArrowRight) => controls::Message::Next,
        Key::Named(key::Named::Escape) => controls::Message::ExitFullscreen,
        _ => return None,
    };
    Some(Message::Carousel(component::Message::Controls(control)))
}
