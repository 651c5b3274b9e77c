use super::super::state::App;
use super::Effect;
use crate::corpus::{Corpus, LoadError};
use std::sync::Arc;
use tracing::{error, info, warn};

impl App {
    pub(super) fn handle_corpus_loaded(
        &mut self,
        result: Result<Arc<Corpus>, LoadError>,
        effects: &mut Vec<Effect>,
    ) {
        // Cleared on both outcomes.
        self.loading = false;
        match result {
            Ok(corpus) => {
                info!(books = corpus.book_count(), "Corpus ready");
                self.corpus = Some(corpus);
                self.load_error = None;
                self.restore_bookmark(effects);
            }
            Err(err) => {
                error!("Failed to load the Bible: {err}");
                self.corpus = None;
                self.load_error = Some(err.to_string());
            }
        }
    }

    pub(super) fn handle_book_selected(&mut self, book: Option<usize>, effects: &mut Vec<Effect>) {
        let Some(corpus) = self.corpus() else {
            return;
        };
        self.pending_clear = None;
        match self.navigation.select_book(&corpus, book) {
            Ok(Some(position)) => self.display(position, effects),
            Ok(None) => info!("Cleared book selection"),
            Err(err) => warn!("Ignoring book selection: {err}"),
        }
    }

    pub(super) fn handle_chapter_selected(
        &mut self,
        chapter: Option<usize>,
        effects: &mut Vec<Effect>,
    ) {
        let Some(corpus) = self.corpus() else {
            return;
        };
        self.pending_clear = None;
        match self.navigation.select_chapter(&corpus, chapter) {
            Ok(Some(position)) => self.display(position, effects),
            Ok(None) => info!("Cleared chapter selection"),
            Err(err) => warn!("Ignoring chapter selection: {err}"),
        }
    }

    pub(super) fn handle_previous_chapter(&mut self, effects: &mut Vec<Effect>) {
        let Some(corpus) = self.corpus() else {
            return;
        };
        if let Some(position) = self.navigation.go_previous(&corpus) {
            self.display(position, effects);
        }
    }

    pub(super) fn handle_next_chapter(&mut self, effects: &mut Vec<Effect>) {
        let Some(corpus) = self.corpus() else {
            return;
        };
        if let Some(position) = self.navigation.go_next(&corpus) {
            self.display(position, effects);
        }
    }
}
