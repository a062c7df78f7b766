// SPDX-License-Identifier: MPL-2.0
use vitrine::app::{App, Flags, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        slide_dir: args
            .finish()
            .into_iter()
            .next()
            .map(std::path::PathBuf::from),
    };

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size((WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT))
        .centered()
        .run_with(move || App::new(flags))
}
