// SPDX-License-Identifier: MPL-2.0
//! Host page layout: heading, caption card, the inline carousel, and the
//! fullscreen overlay stacked above everything when active.

use super::{App, Message};
use crate::error::Error;
use crate::ui::carousel::controls;
use crate::ui::design_tokens::{palette, spacing};
use iced::widget::{column, container, stack, text, Column};
use iced::{alignment, Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let Some(carousel) = &app.carousel else {
        return error_view(app);
    };

    let ctx = controls::ViewContext { i18n: &app.i18n };

    let mut caption_card: Column<'_, Message> = column![
        text(app.i18n.tr("showcase-heading"))
            .size(14)
            .color(palette::ACCENT_400),
    ]
    .spacing(spacing::XS);

    // The caption mirrors the original page: the "now showing" card makes way
    // for a paused badge while the slideshow is suspended.
    if app.slider_paused {
        caption_card = caption_card.push(
            text(app.i18n.tr("caption-paused"))
                .size(20)
                .color(palette::GRAY_400),
        );
    } else {
        caption_card = caption_card
            .push(text(app.i18n.tr("caption-now-showing")).size(12).color(palette::GRAY_200))
            .push(text(&app.caption).size(24).color(palette::WHITE));
    }

    let page = column![
        container(caption_card)
            .width(Length::Fill)
            .padding(spacing::LG),
        container(carousel.view(ctx.clone()).map(Message::Carousel))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding([0.0, spacing::LG]),
    ]
    .spacing(spacing::SM);

    let base = container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([spacing::MD, 0.0]);

    if carousel.engine().is_fullscreen() {
        stack![
            base,
            carousel.view_fullscreen(ctx).map(Message::Carousel)
        ]
        .into()
    } else {
        base.into()
    }
}

fn error_view(app: &App) -> Element<'_, Message> {
    let detail = match &app.load_error {
        Some(Error::Deck(deck_error)) => app.i18n.tr(deck_error.i18n_key()),
        Some(other) => other.to_string(),
        None => String::new(),
    };

    let content = column![
        text(app.i18n.tr("error-heading"))
            .size(24)
            .color(palette::ERROR_500),
        text(detail).size(16),
        text(app.i18n.tr("error-deck-hint"))
            .size(14)
            .color(palette::GRAY_400),
    ]
    .spacing(spacing::SM)
    .align_x(alignment::Horizontal::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
