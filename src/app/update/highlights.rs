use super::super::state::App;
use super::Effect;
use crate::reading::{HighlightKey, Position};
use tracing::{debug, info};

impl App {
    pub(super) fn handle_verse_clicked(&mut self, verse: usize, effects: &mut Vec<Effect>) {
        let (Some(corpus), Some(position)) = (self.corpus(), self.navigation.position()) else {
            return;
        };
        let verse_count = corpus
            .verse_count(position.book, position.chapter)
            .unwrap_or(0);
        if verse >= verse_count {
            debug!(verse, verse_count, "Ignoring click outside the chapter");
            return;
        }
        let key = HighlightKey::new(position.book, position.chapter, verse);
        let highlighted = self.highlights.toggle(key);
        debug!(%key, highlighted, "Toggled verse highlight");
        effects.push(Effect::SaveHighlights);
    }

    pub(super) fn handle_request_clear_highlights(&mut self, effects: &mut Vec<Effect>) {
        let Some(position) = self.navigation.position() else {
            return;
        };
        if self
            .highlights
            .count_in_chapter(position.book, position.chapter)
            == 0
        {
            return;
        }
        if self.config.confirm_clear_highlights {
            debug!(
                book = position.book,
                chapter = position.chapter + 1,
                "Awaiting confirmation to clear highlights"
            );
            self.pending_clear = Some(position);
        } else {
            self.clear_highlights(position, effects);
        }
    }

    pub(super) fn handle_confirm_clear_highlights(&mut self, effects: &mut Vec<Effect>) {
        if let Some(position) = self.pending_clear.take() {
            self.clear_highlights(position, effects);
        }
    }

    pub(super) fn handle_cancel_clear_highlights(&mut self) {
        if self.pending_clear.take().is_some() {
            debug!("Cancelled clearing highlights");
        }
    }

    fn clear_highlights(&mut self, position: Position, effects: &mut Vec<Effect>) {
        let removed = self
            .highlights
            .clear_chapter(position.book, position.chapter);
        info!(
            book = position.book,
            chapter = position.chapter + 1,
            removed,
            "Cleared chapter highlights"
        );
        effects.push(Effect::SaveHighlights);
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::*;
    use crate::app::state::tests::loaded_app;
    use crate::cache::load_highlights;
    use crate::config::AppConfig;
    use crate::reading::render_chapter;
    use crate::storage::MemoryStore;

    fn open(app: &mut App, book: usize, chapter: usize) {
        let _ = app.update(Message::BookSelected(Some(book)));
        let _ = app.update(Message::ChapterSelected(Some(chapter)));
    }

    #[test]
    fn toggle_persists_survives_reload_and_clears_per_chapter() {
        let store = MemoryStore::new();
        let mut app = loaded_app(&store, AppConfig::default());

        open(&mut app, 0, 1);
        let _ = app.update(Message::VerseClicked(4));
        open(&mut app, 0, 2);
        let _ = app.update(Message::VerseClicked(4));

        let in_chapter = HighlightKey::new(0, 2, 4);
        let other_chapter = HighlightKey::new(0, 1, 4);
        assert!(app.highlights.is_highlighted(&in_chapter));
        assert!(load_highlights(&store).is_highlighted(&in_chapter));

        let mut reloaded = loaded_app(&store, AppConfig::default());
        assert!(reloaded.highlights.is_highlighted(&in_chapter));
        assert_eq!(reloaded.navigation.position(), Some(Position::new(0, 2)));

        let _ = reloaded.update(Message::RequestClearHighlights);
        assert!(reloaded.highlights.is_highlighted(&in_chapter));
        let _ = reloaded.update(Message::ConfirmClearHighlights);

        assert!(!reloaded.highlights.is_highlighted(&in_chapter));
        assert!(reloaded.highlights.is_highlighted(&other_chapter));
        let persisted = load_highlights(&store);
        assert!(!persisted.is_highlighted(&in_chapter));
        assert!(persisted.is_highlighted(&other_chapter));

        let corpus = reloaded.corpus().expect("corpus loaded");
        let view = render_chapter(&corpus, Position::new(0, 2), &reloaded.highlights)
            .expect("chapter renders");
        assert!(view.verses.iter().all(|verse| !verse.highlighted));
    }

    #[test]
    fn toggling_twice_restores_the_stored_set() {
        let store = MemoryStore::new();
        let mut app = loaded_app(&store, AppConfig::default());
        open(&mut app, 1, 0);
        let before = load_highlights(&store);
        let effects = app.reduce(Message::VerseClicked(0));
        assert_eq!(effects, vec![Effect::SaveHighlights]);
        let _ = app.update(Message::VerseClicked(0));
        assert_eq!(app.highlights, before);
        assert_eq!(load_highlights(&store), before);
    }

    #[test]
    fn clicks_without_a_chapter_or_past_the_end_are_ignored() {
        let store = MemoryStore::new();
        let mut app = loaded_app(&store, AppConfig::default());
        assert!(app.reduce(Message::VerseClicked(0)).is_empty());
        open(&mut app, 0, 0);
        assert!(app.reduce(Message::VerseClicked(6)).is_empty());
        assert!(app.highlights.is_empty());
    }

    #[test]
    fn cancelling_keeps_highlights_and_navigation_drops_pending_clear() {
        let store = MemoryStore::new();
        let mut app = loaded_app(&store, AppConfig::default());
        open(&mut app, 0, 0);
        let _ = app.update(Message::VerseClicked(1));

        let _ = app.update(Message::RequestClearHighlights);
        assert_eq!(app.pending_clear, Some(Position::new(0, 0)));
        let _ = app.update(Message::CancelClearHighlights);
        assert_eq!(app.pending_clear, None);
        assert_eq!(app.highlights.len(), 1);

        let _ = app.update(Message::RequestClearHighlights);
        let _ = app.update(Message::NextChapter);
        assert_eq!(app.pending_clear, None);
        assert!(app.reduce(Message::ConfirmClearHighlights).is_empty());
        assert_eq!(app.highlights.len(), 1);
    }

    #[test]
    fn clearing_without_confirmation_when_disabled() {
        let store = MemoryStore::new();
        let config = AppConfig {
            confirm_clear_highlights: false,
            ..AppConfig::default()
        };
        let mut app = loaded_app(&store, config);
        open(&mut app, 0, 0);
        let _ = app.update(Message::VerseClicked(2));
        let effects = app.reduce(Message::RequestClearHighlights);
        assert_eq!(effects, vec![Effect::SaveHighlights]);
        assert!(app.highlights.is_empty());
    }

    #[test]
    fn nothing_to_clear_needs_no_confirmation() {
        let store = MemoryStore::new();
        let mut app = loaded_app(&store, AppConfig::default());
        open(&mut app, 0, 0);
        assert!(app.reduce(Message::RequestClearHighlights).is_empty());
        assert_eq!(app.pending_clear, None);
    }
}
