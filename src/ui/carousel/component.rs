// SPDX-License-Identifier: MPL-2.0
//! Carousel component: wires the engine, the swipe tracker, and the deck's
//! image handles behind a single `handle(Message) -> Effect` entrypoint, and
//! renders the inline and fullscreen presentations of the same state.

use super::controls::{self, Mode};
use super::engine::Engine;
use super::swipe;
use crate::deck::{SlideDeck, SlideSource};
use crate::ui::design_tokens::{opacity, palette, spacing};
use iced::widget::{container, image, mouse_area, stack, Stack};
use iced::{alignment, Background, Color, ContentFit, Element, Length, Point};

/// Carousel component state: one engine, one gesture tracker, one deck.
#[derive(Debug, Clone)]
pub struct State {
    deck: SlideDeck,
    engine: Engine,
    tracker: swipe::Tracker,
    handles: Vec<image::Handle>,
    cursor: Option<Point>,
}

/// Messages for the carousel component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A controls-row interaction (dots, playback, arrows, fullscreen).
    Controls(controls::Message),
    /// Pointer entered the carousel's hit area.
    HoverEntered,
    /// Pointer left the hit area.
    HoverExited,
    /// Pointer moved inside the hit area.
    PointerMoved(Point),
    /// Primary button pressed inside the hit area.
    DragPressed,
    /// Primary button released.
    DragReleased,
    /// The autoplay timer fired.
    AutoplayTick,
}

/// Notifications for the hosting page. Fired at most once per actual change;
/// the host is free to ignore them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing the host needs to know about.
    None,
    /// The displayed slide changed; carries its display label.
    ItemChanged(String),
    /// The effective paused state changed (true means paused).
    PauseChanged(bool),
}

impl State {
    /// Creates a carousel over the given deck: first slide, playing, windowed.
    pub fn new(deck: SlideDeck) -> Self {
        let handles = deck
            .iter()
            .map(|slide| match slide.source() {
                SlideSource::Path(path) => image::Handle::from_path(path),
                SlideSource::Embedded(bytes) => image::Handle::from_bytes(bytes.clone()),
            })
            .collect();
        let engine = Engine::new(deck.len());

        Self {
            deck,
            engine,
            tracker: swipe::Tracker::default(),
            handles,
            cursor: None,
        }
    }

    /// Read access to the engine state.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The deck this carousel cycles through.
    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    /// Display label of the slide currently shown.
    pub fn current_label(&self) -> String {
        self.deck
            .get(self.engine.current())
            .map(|slide| slide.label())
            .unwrap_or_default()
    }

    /// Handles a message and reports what changed.
    pub fn handle(&mut self, message: Message) -> Effect {
        let index_before = self.engine.current();
        let paused_before = !self.engine.effective_playing();

        match message {
            Message::Controls(msg) => match msg {
                controls::Message::Dot(index) => self.engine.go_to(index),
                controls::Message::TogglePlayback => self.engine.toggle_playing(),
                controls::Message::Previous => self.engine.paginate(-1),
                controls::Message::Next => self.engine.paginate(1),
                controls::Message::EnterFullscreen => self.engine.enter_fullscreen(),
                controls::Message::ExitFullscreen => self.engine.exit_fullscreen(),
            },
            Message::HoverEntered => self.engine.hover_enter(),
            Message::HoverExited => {
                // A drag that leaves the hit area is abandoned, not interpreted.
                self.tracker.cancel();
                self.engine.hover_leave();
            }
            Message::PointerMoved(position) => {
                self.cursor = Some(position);
                self.tracker.moved(position);
            }
            Message::DragPressed => {
                if let Some(cursor) = self.cursor {
                    self.tracker.press(cursor);
                }
            }
            Message::DragReleased => {
                if let Some(swipe) = self.tracker.release() {
                    self.engine.paginate(swipe.step());
                }
            }
            Message::AutoplayTick => {
                if self.engine.effective_playing() {
                    self.engine.paginate(1);
                }
            }
        }

        let paused_after = !self.engine.effective_playing();
        if self.engine.current() != index_before {
            Effect::ItemChanged(self.current_label())
        } else if paused_after != paused_before {
            Effect::PauseChanged(paused_after)
        } else {
            Effect::None
        }
    }

    /// The inline presentation: image with hover/drag hit area and controls.
    pub fn view<'a>(&'a self, ctx: controls::ViewContext<'a>) -> Element<'a, Message> {
        let slide = image(self.current_handle())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover);

        let controls_row: Element<'a, Message> =
            controls::view(ctx, &self.engine, Mode::Inline).map(Message::Controls);
        let controls_layer = container(controls_row)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Bottom);

        let layers: Stack<'a, Message> = stack![slide, controls_layer];

        mouse_area(layers)
            .on_enter(Message::HoverEntered)
            .on_exit(Message::HoverExited)
            .on_move(Message::PointerMoved)
            .on_press(Message::DragPressed)
            .on_release(Message::DragReleased)
            .into()
    }

    /// The fullscreen presentation: the same state rendered as a modal layer
    /// over the whole window. Composed above the host page by the caller.
    pub fn view_fullscreen<'a>(&'a self, ctx: controls::ViewContext<'a>) -> Element<'a, Message> {
        let slide = container(
            image(self.current_handle())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD);

        let controls_row: Element<'a, Message> =
            controls::view(ctx, &self.engine, Mode::Fullscreen).map(Message::Controls);
        let controls_layer = container(controls_row)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Bottom);

        let layers: Stack<'a, Message> = stack![slide, controls_layer];

        container(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(Color {
                    a: opacity::OVERLAY_STRONG,
                    ..palette::BLACK
                })),
                ..container::Style::default()
            })
            .into()
    }

    fn current_handle(&self) -> image::Handle {
        self.handles[self.engine.current()].clone()
    }
}
