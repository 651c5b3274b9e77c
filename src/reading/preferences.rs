use crate::config::{AppConfig, FontScale, ThemeMode};

/// Theme and font size chosen by the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub theme: ThemeMode,
    pub font_size: FontScale,
}

impl Preferences {
    pub fn from_config(config: &AppConfig) -> Self {
        Preferences {
            theme: config.theme,
            font_size: config.font_size,
        }
    }

    pub fn set_theme(&mut self, theme: ThemeMode) -> bool {
        let changed = self.theme != theme;
        self.theme = theme;
        changed
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    pub fn set_font_size(&mut self, font_size: FontScale) -> bool {
        let changed = self.font_size != font_size;
        self.font_size = font_size;
        changed
    }

    /// One step up the scale; `false` when already at the largest size.
    pub fn increase_font_size(&mut self) -> bool {
        match self.font_size.larger() {
            Some(larger) => self.set_font_size(larger),
            None => false,
        }
    }

    /// One step down the scale; `false` when already at the smallest size.
    pub fn decrease_font_size(&mut self) -> bool {
        match self.font_size.smaller() {
            Some(smaller) => self.set_font_size(smaller),
            None => false,
        }
    }

    pub fn can_increase_font_size(&self) -> bool {
        self.font_size.larger().is_some()
    }

    pub fn can_decrease_font_size(&self) -> bool {
        self.font_size.smaller().is_some()
    }

    pub fn text_size(&self, base_font_size: u32) -> f32 {
        base_font_size as f32 * self.font_size.factor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_steps_clamp_without_wrapping() {
        let mut prefs = Preferences::from_config(&AppConfig::default());
        assert!(!prefs.can_decrease_font_size());
        assert!(!prefs.decrease_font_size());
        assert_eq!(prefs.font_size, FontScale::Default);

        for _ in 0..3 {
            assert!(prefs.increase_font_size());
        }
        assert_eq!(prefs.font_size, FontScale::ExtraLarge);
        assert!(!prefs.can_increase_font_size());
        assert!(!prefs.increase_font_size());
        assert_eq!(prefs.font_size, FontScale::ExtraLarge);
        assert!(prefs.can_decrease_font_size());
    }

    #[test]
    fn text_size_scales_the_base_size() {
        let mut prefs = Preferences::from_config(&AppConfig::default());
        prefs.set_font_size(FontScale::Large);
        assert!((prefs.text_size(20) - 24.0).abs() < f32::EPSILON * 32.0);
    }

    #[test]
    fn theme_setters_report_changes() {
        let mut prefs = Preferences::from_config(&AppConfig::default());
        assert!(!prefs.set_theme(ThemeMode::Light));
        assert_eq!(prefs.toggle_theme(), ThemeMode::Dark);
        assert!(prefs.set_theme(ThemeMode::Light));
    }
}
