use super::super::super::messages::Message;
use super::super::super::state::{App, VERSE_SCROLL_ID};
use super::super::Effect;
use crate::cache::{save_bookmark, save_highlights, save_preferences};
use crate::corpus::{Corpus, LoadError, load_corpus};
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable::{self, RelativeOffset};
use iced::window;
use std::sync::Arc;
use tracing::{info, warn};

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SaveHighlights => {
                if let Err(err) = save_highlights(self.store.as_ref(), &self.highlights) {
                    warn!("Failed to persist highlights: {err:#}");
                }
                Task::none()
            }
            Effect::SaveBookmark => {
                if let Some(bookmark) = self.bookmark {
                    if let Err(err) = save_bookmark(self.store.as_ref(), bookmark) {
                        warn!("Failed to persist bookmark: {err:#}");
                    }
                }
                Task::none()
            }
            Effect::SavePreferences => {
                if let Err(err) = save_preferences(self.store.as_ref(), &self.preferences) {
                    warn!("Failed to persist preferences: {err:#}");
                }
                Task::none()
            }
            Effect::ScrollToTop => {
                scrollable::snap_to(VERSE_SCROLL_ID.clone(), RelativeOffset::START)
            }
            Effect::LoadCorpus(source) => {
                self.loading = true;
                self.load_error = None;
                info!(source = %source, "Dispatching corpus load task");
                Task::perform(
                    async move { load_corpus_off_runtime(source) },
                    Message::CorpusLoaded,
                )
            }
            Effect::QuitSafely => {
                self.persist_all();
                iced::exit()
            }
        }
    }

    fn persist_all(&self) {
        if let Err(err) = save_highlights(self.store.as_ref(), &self.highlights) {
            warn!("Failed to persist highlights on quit: {err:#}");
        }
        if let Some(bookmark) = self.bookmark {
            if let Err(err) = save_bookmark(self.store.as_ref(), bookmark) {
                warn!("Failed to persist bookmark on quit: {err:#}");
            }
        }
        if let Err(err) = save_preferences(self.store.as_ref(), &self.preferences) {
            warn!("Failed to persist preferences on quit: {err:#}");
        }
    }
}

/// `reqwest::blocking` panics when called from within a tokio runtime, so the
/// load runs on a plain thread. The task still waits on that thread.
fn load_corpus_off_runtime(source: String) -> Result<Arc<Corpus>, LoadError> {
    let thread_source = source.clone();
    std::thread::spawn(move || load_corpus(&thread_source).map(Arc::new))
        .join()
        .unwrap_or_else(|_| {
            Err(LoadError::Unreachable {
                source_name: source,
                reason: "loader thread panicked".to_string(),
            })
        })
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::corpus::tests::sample_corpus;
    use crate::reading::{HighlightKey, Position};
    use crate::storage::Storage;
    use anyhow::{Result, bail};
    use iced::keyboard::key::{Code, Physical};
    use iced::keyboard::{Key, Location, Modifiers, key};

    fn arrow_left() -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(key::Named::ArrowLeft),
            modified_key: Key::Named(key::Named::ArrowLeft),
            physical_key: Physical::Code(Code::ArrowLeft),
            location: Location::Standard,
            modifiers: Modifiers::empty(),
            text: None,
        })
    }

    #[test]
    fn captured_key_events_are_not_shortcuts() {
        let captured =
            runtime_event_to_message(arrow_left(), event::Status::Captured, window::Id::unique());
        assert!(captured.is_none());

        let ignored =
            runtime_event_to_message(arrow_left(), event::Status::Ignored, window::Id::unique());
        assert!(matches!(ignored, Some(Message::KeyPressed { .. })));
    }

    /// Reads nothing and rejects every write.
    struct ReadOnlyStore;

    impl Storage for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &str) -> Result<()> {
            bail!("storage is read-only, cannot write {key}")
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_writes_keep_the_session_state() {
        let (mut app, _task) = App::bootstrap(AppConfig::default(), Box::new(ReadOnlyStore));
        let _ = app.update(Message::CorpusLoaded(Ok(Arc::new(sample_corpus()))));

        let _ = app.update(Message::BookSelected(Some(0)));
        let _ = app.update(Message::VerseClicked(1));
        let _ = app.update(Message::IncreaseFontSize);

        assert_eq!(app.navigation.position(), Some(Position::new(0, 0)));
        assert!(app.highlights.is_highlighted(&HighlightKey::new(0, 0, 1)));
        assert_eq!(app.preferences.font_size, crate::config::FontScale::Medium);
        assert!(app.bookmark.is_some());
    }
}
