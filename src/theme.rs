//! Mapping from reader preferences to iced theming.

use crate::config::{AppConfig, HighlightColor, ThemeMode};
use iced::{Color, Theme};

impl From<ThemeMode> for Theme {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }
}

impl From<HighlightColor> for Color {
    fn from(color: HighlightColor) -> Self {
        Color::from_rgba(
            color.r.clamp(0.0, 1.0),
            color.g.clamp(0.0, 1.0),
            color.b.clamp(0.0, 1.0),
            color.a.clamp(0.0, 1.0),
        )
    }
}

/// Background used for highlighted verses under the given theme.
pub fn highlight_color(config: &AppConfig, mode: ThemeMode) -> Color {
    match mode {
        ThemeMode::Light => config.day_highlight.into(),
        ThemeMode::Dark => config.night_highlight.into(),
    }
}
