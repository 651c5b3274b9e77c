pub(crate) fn default_theme() -> crate::config::ThemeMode {
    crate::config::ThemeMode::Light
}

pub(crate) fn default_font_scale() -> crate::config::FontScale {
    crate::config::FontScale::Default
}

pub(crate) fn default_base_font_size() -> u32 {
    18
}

pub(crate) fn default_line_spacing() -> f32 {
    1.5
}

pub(crate) fn default_window_width() -> f32 {
    960.0
}

pub(crate) fn default_window_height() -> f32 {
    780.0
}

pub(crate) fn default_day_highlight() -> crate::config::HighlightColor {
    crate::config::HighlightColor {
        r: 1.0,
        g: 0.92,
        b: 0.35,
        a: 0.55,
    }
}

pub(crate) fn default_night_highlight() -> crate::config::HighlightColor {
    crate::config::HighlightColor {
        r: 0.8,
        g: 0.7,
        b: 0.2,
        a: 0.35,
    }
}

pub(crate) fn default_corpus_source() -> String {
    "biblia.json".to_string()
}

pub(crate) fn default_confirm_clear_highlights() -> bool {
    true
}

pub(crate) fn default_data_dir() -> String {
    ".cache".to_string()
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_key_prev_chapter() -> String {
    "left".to_string()
}

pub(crate) fn default_key_next_chapter() -> String {
    "right".to_string()
}

pub(crate) fn default_key_toggle_theme() -> String {
    "ctrl+t".to_string()
}

pub(crate) fn default_key_font_increase() -> String {
    "ctrl+=".to_string()
}

pub(crate) fn default_key_font_decrease() -> String {
    "ctrl+-".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "ctrl+q".to_string()
}
