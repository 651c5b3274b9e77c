use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::ArrowLeft) => "left".to_string(),
            Key::Named(key::Named::ArrowRight) => "right".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        if Self::shortcut_matches(&self.config.key_prev_chapter, "left", &pressed, modifiers) {
            Some(Message::PreviousChapter)
        } else if Self::shortcut_matches(&self.config.key_next_chapter, "right", &pressed, modifiers)
        {
            Some(Message::NextChapter)
        } else if Self::shortcut_matches(
            &self.config.key_toggle_theme,
            "ctrl+t",
            &pressed,
            modifiers,
        ) {
            Some(Message::ToggleTheme)
        } else if Self::shortcut_matches(
            &self.config.key_font_increase,
            "ctrl+=",
            &pressed,
            modifiers,
        ) {
            Some(Message::IncreaseFontSize)
        } else if Self::shortcut_matches(
            &self.config.key_font_decrease,
            "ctrl+-",
            &pressed,
            modifiers,
        ) {
            Some(Message::DecreaseFontSize)
        } else if Self::shortcut_matches(&self.config.key_safe_quit, "ctrl+q", &pressed, modifiers)
        {
            Some(Message::SafeQuit)
        } else {
            None
        }
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        // A trailing "+" means the plus key itself, e.g. "ctrl++".
        let (modifier_part, plus_key) = match normalized.strip_suffix("++") {
            Some(rest) => (rest, true),
            None => (normalized.as_str(), false),
        };

        for token in modifier_part
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }
        if plus_key {
            required_key = Some("+");
        }

        let required_key = required_key.unwrap_or(fallback);
        if pressed != required_key {
            return false;
        }

        // "+" sits on a shifted key on many layouts.
        let shift_ok = if required_key == "+" {
            !required_shift || modifiers.shift()
        } else {
            modifiers.shift() == required_shift
        };

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && shift_ok
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized
                .replace("arrowleft", "left")
                .replace("arrowright", "right")
        }
    }
}
