mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use crate::storage::Storage;
use iced::{Size, Theme, window};

/// Launch the reader window over the given persistence store.
pub fn run_app(config: AppConfig, store: Box<dyn Storage>) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Bible Reader", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| Theme::from(app.preferences.theme))
        .run_with(move || App::bootstrap(config, store))
}
