use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use tracing::debug;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::CorpusLoaded(result) => self.handle_corpus_loaded(result, &mut effects),
            Message::BookSelected(book) => self.handle_book_selected(book, &mut effects),
            Message::ChapterSelected(chapter) => {
                self.handle_chapter_selected(chapter, &mut effects)
            }
            Message::PreviousChapter => self.handle_previous_chapter(&mut effects),
            Message::NextChapter => self.handle_next_chapter(&mut effects),
            Message::VerseClicked(verse) => self.handle_verse_clicked(verse, &mut effects),
            Message::RequestClearHighlights => self.handle_request_clear_highlights(&mut effects),
            Message::ConfirmClearHighlights => self.handle_confirm_clear_highlights(&mut effects),
            Message::CancelClearHighlights => self.handle_cancel_clear_highlights(),
            Message::ToggleTheme => self.handle_toggle_theme(&mut effects),
            Message::IncreaseFontSize => self.handle_increase_font_size(&mut effects),
            Message::DecreaseFontSize => self.handle_decrease_font_size(&mut effects),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    debug!(?shortcut, "Keyboard shortcut");
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::SafeQuit => effects.push(Effect::QuitSafely),
        }

        effects
    }
}
