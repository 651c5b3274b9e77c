use serde::Deserialize;
use std::str::FromStr;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default = "crate::config::defaults::default_theme")]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_font_scale")]
    pub font_size: FontScale,
    #[serde(default = "crate::config::defaults::default_base_font_size")]
    pub base_font_size: u32,
    #[serde(default = "crate::config::defaults::default_line_spacing")]
    pub line_spacing: f32,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_day_highlight")]
    pub day_highlight: HighlightColor,
    #[serde(default = "crate::config::defaults::default_night_highlight")]
    pub night_highlight: HighlightColor,
    #[serde(default = "crate::config::defaults::default_corpus_source")]
    pub corpus_source: String,
    #[serde(default = "crate::config::defaults::default_confirm_clear_highlights")]
    pub confirm_clear_highlights: bool,
    #[serde(default = "crate::config::defaults::default_data_dir")]
    pub data_dir: String,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_key_prev_chapter")]
    pub key_prev_chapter: String,
    #[serde(default = "crate::config::defaults::default_key_next_chapter")]
    pub key_next_chapter: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_theme")]
    pub key_toggle_theme: String,
    #[serde(default = "crate::config::defaults::default_key_font_increase")]
    pub key_font_increase: String,
    #[serde(default = "crate::config::defaults::default_key_font_decrease")]
    pub key_font_decrease: String,
    #[serde(default = "crate::config::defaults::default_key_safe_quit")]
    pub key_safe_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: crate::config::defaults::default_theme(),
            font_size: crate::config::defaults::default_font_scale(),
            base_font_size: crate::config::defaults::default_base_font_size(),
            line_spacing: crate::config::defaults::default_line_spacing(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            day_highlight: crate::config::defaults::default_day_highlight(),
            night_highlight: crate::config::defaults::default_night_highlight(),
            corpus_source: crate::config::defaults::default_corpus_source(),
            confirm_clear_highlights: crate::config::defaults::default_confirm_clear_highlights(),
            data_dir: crate::config::defaults::default_data_dir(),
            log_level: crate::config::defaults::default_log_level(),
            key_prev_chapter: crate::config::defaults::default_key_prev_chapter(),
            key_next_chapter: crate::config::defaults::default_key_next_chapter(),
            key_toggle_theme: crate::config::defaults::default_key_toggle_theme(),
            key_font_increase: crate::config::defaults::default_key_font_increase(),
            key_font_decrease: crate::config::defaults::default_key_font_decrease(),
            key_safe_quit: crate::config::defaults::default_key_safe_quit(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        };
        write!(f, "{}", label)
    }
}

/// Discrete font-size scale, ordered from smallest to largest.
///
/// Serialized as the multiplier applied to the base font size, so a stored
/// `"1.2"` is [`FontScale::Large`].
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum FontScale {
    #[serde(rename = "1.0")]
    Default,
    #[serde(rename = "1.1")]
    Medium,
    #[serde(rename = "1.2")]
    Large,
    #[serde(rename = "1.3")]
    ExtraLarge,
}

impl Default for FontScale {
    fn default() -> Self {
        FontScale::Default
    }
}

impl FontScale {
    pub const ALL: [FontScale; 4] = [
        FontScale::Default,
        FontScale::Medium,
        FontScale::Large,
        FontScale::ExtraLarge,
    ];

    pub fn factor(self) -> f32 {
        match self {
            FontScale::Default => 1.0,
            FontScale::Medium => 1.1,
            FontScale::Large => 1.2,
            FontScale::ExtraLarge => 1.3,
        }
    }

    fn position(self) -> usize {
        FontScale::ALL
            .iter()
            .position(|scale| *scale == self)
            .unwrap_or(0)
    }

    /// Next larger entry; `None` at the top of the scale.
    pub fn larger(self) -> Option<Self> {
        FontScale::ALL.get(self.position() + 1).copied()
    }

    /// Next smaller entry; `None` at the bottom of the scale.
    pub fn smaller(self) -> Option<Self> {
        self.position()
            .checked_sub(1)
            .and_then(|idx| FontScale::ALL.get(idx).copied())
    }
}

impl FromStr for FontScale {
    type Err = String;

    /// Accepts any spelling of the multiplier (`"1"`, `"1.10"`, ...).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value: f32 = raw
            .trim()
            .trim_matches('"')
            .parse()
            .map_err(|_| format!("invalid font size: {raw}"))?;
        FontScale::ALL
            .into_iter()
            .find(|scale| (scale.factor() - value).abs() < 0.001)
            .ok_or_else(|| format!("font size {value} is not on the scale"))
    }
}

impl std::fmt::Display for FontScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FontScale::Default => "Default",
            FontScale::Medium => "Medium",
            FontScale::Large => "Large",
            FontScale::ExtraLarge => "Extra large",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct HighlightColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
