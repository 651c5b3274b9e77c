mod constants;

use crate::cache::{load_bookmark, load_highlights, load_preferences};
use crate::config::AppConfig;
use crate::corpus::Corpus;
use crate::reading::{
    Bookmark, BookmarkStatus, HighlightSet, Navigation, Position, Preferences,
};
use crate::storage::Storage;
use iced::Task;
use std::sync::Arc;
use tracing::{debug, info};

use super::messages::Message;
use super::update::Effect;

pub(crate) use constants::*;

/// Core application state composed of the reading stores.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) store: Box<dyn Storage>,
    pub(super) corpus: Option<Arc<Corpus>>,
    pub(super) loading: bool,
    pub(super) load_error: Option<String>,
    pub(super) navigation: Navigation,
    pub(super) highlights: HighlightSet,
    pub(super) bookmark: Option<Bookmark>,
    pub(super) preferences: Preferences,
    /// Chapter awaiting confirmation of "clear highlights".
    pub(super) pending_clear: Option<Position>,
}

impl App {
    /// Build the initial state. Preferences and highlights come from storage
    /// right away; the corpus load is returned as a task.
    pub(super) fn bootstrap(config: AppConfig, store: Box<dyn Storage>) -> (App, Task<Message>) {
        let preferences = load_preferences(store.as_ref(), Preferences::from_config(&config));
        let highlights = load_highlights(store.as_ref());
        let bookmark = load_bookmark(store.as_ref());
        info!(
            theme = %preferences.theme,
            font_size = %preferences.font_size,
            highlights = highlights.len(),
            has_bookmark = bookmark.is_some(),
            "Restored reading state"
        );
        let source = config.corpus_source.clone();
        let mut app = App {
            config,
            store,
            corpus: None,
            loading: false,
            load_error: None,
            navigation: Navigation::default(),
            highlights,
            bookmark,
            preferences,
            pending_clear: None,
        };
        let task = app.run_effect(Effect::LoadCorpus(source));
        (app, task)
    }

    /// Shared handle to the corpus; `None` until it has loaded.
    pub(super) fn corpus(&self) -> Option<Arc<Corpus>> {
        self.corpus.clone()
    }

    pub(super) fn bookmark_status(&self) -> BookmarkStatus {
        match self.corpus.as_deref() {
            Some(corpus) => Bookmark::status(self.bookmark.as_ref(), corpus),
            None => BookmarkStatus::NoPreviousReading,
        }
    }

    pub(super) fn text_size(&self) -> f32 {
        self.preferences.text_size(self.config.base_font_size)
    }

    /// Show `position` and remember it as the last chapter read.
    pub(super) fn display(&mut self, position: Position, effects: &mut Vec<Effect>) {
        self.pending_clear = None;
        self.bookmark = Some(Bookmark::from(position));
        info!(
            book = position.book,
            chapter = position.chapter + 1,
            "Displaying chapter"
        );
        effects.push(Effect::SaveBookmark);
        effects.push(Effect::ScrollToTop);
    }

    /// Reopen the persisted bookmark if it still exists in the corpus.
    pub(super) fn restore_bookmark(&mut self, effects: &mut Vec<Effect>) {
        let Some(corpus) = self.corpus() else {
            return;
        };
        let Some(bookmark) = self.bookmark else {
            debug!("No previous reading");
            return;
        };
        match bookmark
            .resolve(&corpus)
            .and_then(|position| self.navigation.restore(&corpus, position))
        {
            Ok(position) => {
                info!(
                    book = position.book,
                    chapter = position.chapter + 1,
                    "Resuming from bookmark"
                );
                effects.push(Effect::ScrollToTop);
            }
            Err(err) => debug!("Stored bookmark no longer resolves: {err}"),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::corpus::tests::sample_corpus;
    use crate::storage::MemoryStore;

    /// App over the two-book sample corpus, already loaded.
    pub(crate) fn loaded_app(store: &MemoryStore, config: AppConfig) -> App {
        let (mut app, _task) = App::bootstrap(config, Box::new(store.clone()));
        let _ = app.update(Message::CorpusLoaded(Ok(Arc::new(sample_corpus()))));
        app
    }

    #[test]
    fn first_run_shows_no_previous_reading() {
        let store = MemoryStore::new();
        let app = loaded_app(&store, AppConfig::default());
        assert_eq!(app.navigation.position(), None);
        assert_eq!(app.bookmark_status(), BookmarkStatus::NoPreviousReading);
        assert!(app.load_error.is_none());
    }

    #[test]
    fn preferences_apply_before_the_corpus_arrives() {
        let store = MemoryStore::new();
        store.set(crate::cache::THEME_KEY, "\"dark\"").expect("set");
        store.set(crate::cache::FONT_SIZE_KEY, "\"1.3\"").expect("set");
        let (app, _task) = App::bootstrap(AppConfig::default(), Box::new(store.clone()));
        assert!(app.loading);
        assert!(app.corpus.is_none());
        assert_eq!(app.preferences.theme, crate::config::ThemeMode::Dark);
        assert!((app.text_size() - 18.0 * 1.3).abs() < 0.001);
    }
}
