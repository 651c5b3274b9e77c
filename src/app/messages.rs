use crate::corpus::{Corpus, LoadError};
use iced::keyboard::{Key, Modifiers};
use std::sync::Arc;

/// Messages emitted by the UI and by background work.
#[derive(Debug, Clone)]
pub enum Message {
    CorpusLoaded(Result<Arc<Corpus>, LoadError>),
    BookSelected(Option<usize>),
    ChapterSelected(Option<usize>),
    PreviousChapter,
    NextChapter,
    VerseClicked(usize),
    RequestClearHighlights,
    ConfirmClearHighlights,
    CancelClearHighlights,
    ToggleTheme,
    IncreaseFontSize,
    DecreaseFontSize,
    KeyPressed { key: Key, modifiers: Modifiers },
    SafeQuit,
}
