use super::super::state::App;
use super::Effect;
use crate::config::ThemeMode;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_toggle_theme(&mut self, effects: &mut Vec<Effect>) {
        let next = self.preferences.toggle_theme();
        info!(
            dark_mode = matches!(next, ThemeMode::Dark),
            "Toggled theme"
        );
        effects.push(Effect::SavePreferences);
    }

    pub(super) fn handle_increase_font_size(&mut self, effects: &mut Vec<Effect>) {
        if self.preferences.increase_font_size() {
            debug!(font_size = %self.preferences.font_size, "Font size increased");
            effects.push(Effect::SavePreferences);
        }
    }

    pub(super) fn handle_decrease_font_size(&mut self, effects: &mut Vec<Effect>) {
        if self.preferences.decrease_font_size() {
            debug!(font_size = %self.preferences.font_size, "Font size decreased");
            effects.push(Effect::SavePreferences);
        }
    }
}
