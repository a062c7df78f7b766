// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the carousel and the
//! hosting page.
//!
//! The `App` wires together config, localization, and the carousel component,
//! and keeps the two pieces of observer state the page renders elsewhere:
//! the current slide's caption and the paused flag.

mod message;
mod subscription;
mod view;

pub use message::Message;

use crate::config::{self, Config};
use crate::deck::SlideDeck;
use crate::error::Error;
use crate::i18n::I18n;
use crate::ui::carousel::component;
use iced::{Element, Subscription, Task, Theme};
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory to build the slide deck from.
    pub slide_dir: Option<PathBuf>,
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;

/// Root Iced application state.
pub struct App {
    pub(crate) config: Config,
    pub(crate) i18n: I18n,
    pub(crate) carousel: Option<component::State>,
    pub(crate) load_error: Option<Error>,
    /// Label of the slide currently shown, rendered in the caption card.
    pub(crate) caption: String,
    /// Whether the slideshow is effectively paused, rendered as a badge.
    pub(crate) slider_paused: bool,
}

impl App {
    /// Creates the application, loading config from the platform config dir.
    ///
    /// A `--lang` override that wins the locale resolution is written back to
    /// the config, so the next launch keeps the language without the flag.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let cli_lang = flags.lang.clone();
        let (mut app, task) = Self::with_config(flags, config);

        if let Some(language) = app.language_to_persist(cli_lang.as_deref()) {
            app.config.language = Some(language);
            if let Err(error) = config::save(&app.config) {
                eprintln!("Failed to save language preference: {error}");
            }
        }

        (app, task)
    }

    /// Creates the application with an explicit config (also used by tests).
    pub fn with_config(flags: Flags, config: Config) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, &config);

        let deck = match flags.slide_dir.as_deref().or(config.slide_dir.as_deref()) {
            Some(dir) => SlideDeck::scan_directory(dir),
            None => SlideDeck::embedded_demo(),
        };

        let (carousel, load_error) = match deck {
            Ok(deck) => (Some(component::State::new(deck)), None),
            Err(err) => (None, Some(err)),
        };

        let caption = carousel
            .as_ref()
            .map(component::State::current_label)
            .unwrap_or_default();

        (
            App {
                config,
                i18n,
                carousel,
                load_error,
                caption,
                slider_paused: false,
            },
            Task::none(),
        )
    }

    /// The locale to write back to the config: the CLI override must have
    /// both parsed and won the resolution, and differ from what is stored.
    fn language_to_persist(&self, cli_lang: Option<&str>) -> Option<String> {
        let requested = cli_lang?.parse::<LanguageIdentifier>().ok()?;
        if *self.i18n.current_locale() != requested {
            return None;
        }
        let locale = requested.to_string();
        (self.config.language.as_deref() != Some(locale.as_str())).then_some(locale)
    }

    /// The carousel component, when the deck loaded.
    pub fn carousel(&self) -> Option<&component::State> {
        self.carousel.as_ref()
    }

    /// Caption label of the slide currently shown.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Whether the slideshow is effectively paused.
    pub fn is_slider_paused(&self) -> bool {
        self.slider_paused
    }

    /// Handle application messages and update state.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Carousel(msg) => {
                if let Some(carousel) = &mut self.carousel {
                    match carousel.handle(msg) {
                        component::Effect::ItemChanged(label) => self.caption = label,
                        component::Effect::PauseChanged(paused) => self.slider_paused = paused,
                        component::Effect::None => {}
                    }
                }
                Task::none()
            }
        }
    }

    /// Build the user interface.
    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Event subscriptions for the current state.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    /// Window title, localized.
    pub fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    /// Set the application theme.
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
