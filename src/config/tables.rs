use super::defaults;
use super::models::{AppConfig, FontScale, HighlightColor, LogLevel, ThemeMode};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    reading: ReadingConfig,
    #[serde(default)]
    storage: StorageConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    keys: KeysConfig,
}

impl ConfigTables {
    /// True when the raw document uses at least one known table header.
    pub(super) fn is_table_layout(raw: &toml::Table) -> bool {
        ["appearance", "reading", "storage", "logging", "keys"]
            .iter()
            .any(|name| raw.get(*name).is_some_and(toml::Value::is_table))
    }
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            font_size: tables.appearance.font_size,
            base_font_size: tables.appearance.base_font_size,
            line_spacing: tables.appearance.line_spacing,
            window_width: tables.appearance.window_width,
            window_height: tables.appearance.window_height,
            day_highlight: tables.appearance.day_highlight,
            night_highlight: tables.appearance.night_highlight,
            corpus_source: tables.reading.corpus_source,
            confirm_clear_highlights: tables.reading.confirm_clear_highlights,
            data_dir: tables.storage.data_dir,
            log_level: tables.logging.log_level,
            key_prev_chapter: tables.keys.prev_chapter,
            key_next_chapter: tables.keys.next_chapter,
            key_toggle_theme: tables.keys.toggle_theme,
            key_font_increase: tables.keys.font_increase,
            key_font_decrease: tables.keys.font_decrease,
            key_safe_quit: tables.keys.safe_quit,
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default = "defaults::default_theme")]
    theme: ThemeMode,
    #[serde(default = "defaults::default_font_scale")]
    font_size: FontScale,
    #[serde(default = "defaults::default_base_font_size")]
    base_font_size: u32,
    #[serde(default = "defaults::default_line_spacing")]
    line_spacing: f32,
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    window_height: f32,
    #[serde(default = "defaults::default_day_highlight")]
    day_highlight: HighlightColor,
    #[serde(default = "defaults::default_night_highlight")]
    night_highlight: HighlightColor,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: defaults::default_theme(),
            font_size: defaults::default_font_scale(),
            base_font_size: defaults::default_base_font_size(),
            line_spacing: defaults::default_line_spacing(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
            day_highlight: defaults::default_day_highlight(),
            night_highlight: defaults::default_night_highlight(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ReadingConfig {
    #[serde(default = "defaults::default_corpus_source")]
    corpus_source: String,
    #[serde(default = "defaults::default_confirm_clear_highlights")]
    confirm_clear_highlights: bool,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        ReadingConfig {
            corpus_source: defaults::default_corpus_source(),
            confirm_clear_highlights: defaults::default_confirm_clear_highlights(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct StorageConfig {
    #[serde(default = "defaults::default_data_dir")]
    data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            data_dir: defaults::default_data_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_prev_chapter")]
    prev_chapter: String,
    #[serde(default = "defaults::default_key_next_chapter")]
    next_chapter: String,
    #[serde(default = "defaults::default_key_toggle_theme")]
    toggle_theme: String,
    #[serde(default = "defaults::default_key_font_increase")]
    font_increase: String,
    #[serde(default = "defaults::default_key_font_decrease")]
    font_decrease: String,
    #[serde(default = "defaults::default_key_safe_quit")]
    safe_quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            prev_chapter: defaults::default_key_prev_chapter(),
            next_chapter: defaults::default_key_next_chapter(),
            toggle_theme: defaults::default_key_toggle_theme(),
            font_increase: defaults::default_key_font_increase(),
            font_decrease: defaults::default_key_font_decrease(),
            safe_quit: defaults::default_key_safe_quit(),
        }
    }
}
