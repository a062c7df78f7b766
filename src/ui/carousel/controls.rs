// SPDX-License-Identifier: MPL-2.0
//! Carousel controls: position-indicator dots, playback toggle, navigation
//! arrows, and the fullscreen enter/exit button.

use super::engine::Engine;
use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing};
use iced::widget::{button, Row, Space, Text};
use iced::{border, Alignment, Background, Color, Element, Length};

/// Which presentation the controls belong to. The fullscreen overlay swaps
/// the maximize button for a close button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Inline,
    Fullscreen,
}

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// A position-indicator dot was clicked.
    Dot(usize),
    /// The play/pause toggle was clicked.
    TogglePlayback,
    /// Previous-slide arrow.
    Previous,
    /// Next-slide arrow.
    Next,
    /// Maximize button (inline view only).
    EnterFullscreen,
    /// Close button (fullscreen overlay only).
    ExitFullscreen,
}

fn chip_style(_theme: &iced::Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Color {
            a: opacity::CONTROL_CHIP,
            ..palette::WHITE
        })),
        text_color: palette::WHITE,
        border: border::rounded(999.0),
        ..button::Style::default()
    }
}

fn chip<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(14))
        .on_press(message)
        .padding([6.0, 12.0])
        .style(chip_style)
        .into()
}

fn dot<'a>(index: usize, active: bool) -> Element<'a, Message> {
    let (width, color) = if active {
        (sizing::DOT_ACTIVE_WIDTH, palette::WHITE)
    } else {
        (
            sizing::DOT,
            Color {
                a: opacity::DOT_INACTIVE,
                ..palette::WHITE
            },
        )
    };

    button(Space::new(
        Length::Fixed(width),
        Length::Fixed(sizing::DOT),
    ))
    .on_press(Message::Dot(index))
    .padding(0.0)
    .style(move |_theme, _status| button::Style {
        background: Some(Background::Color(color)),
        border: border::rounded(sizing::DOT / 2.0),
        ..button::Style::default()
    })
    .into()
}

/// Builds the controls row shared by the inline and fullscreen presentations.
pub fn view<'a>(ctx: ViewContext<'a>, engine: &Engine, mode: Mode) -> Element<'a, Message> {
    let mut dots = Row::new().spacing(spacing::SM).align_y(Alignment::Center);
    for index in 0..engine.len().get() {
        dots = dots.push(dot(index, index == engine.current()));
    }

    let playback_label = if engine.is_playing() {
        ctx.i18n.tr("carousel-pause-button")
    } else {
        ctx.i18n.tr("carousel-play-button")
    };

    let mut actions = Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .push(chip(playback_label, Message::TogglePlayback));

    actions = match mode {
        Mode::Inline => actions.push(chip(
            ctx.i18n.tr("carousel-fullscreen-button"),
            Message::EnterFullscreen,
        )),
        Mode::Fullscreen => actions.push(chip(
            ctx.i18n.tr("carousel-close-button"),
            Message::ExitFullscreen,
        )),
    };

    actions = actions
        .push(chip(
            ctx.i18n.tr("carousel-previous-button"),
            Message::Previous,
        ))
        .push(chip(ctx.i18n.tr("carousel-next-button"), Message::Next));

    Row::new()
        .padding(spacing::MD)
        .align_y(Alignment::Center)
        .push(dots)
        .push(Space::new(Length::Fill, Length::Shrink))
        .push(actions)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    #[test]
    fn controls_view_renders_inline_and_fullscreen() {
        let i18n = I18n::default();
        let engine = Engine::new(NonZeroUsize::new(4).expect("non-zero"));
        let _inline = view(ViewContext { i18n: &i18n }, &engine, Mode::Inline);
        let _overlay = view(ViewContext { i18n: &i18n }, &engine, Mode::Fullscreen);
    }
}
