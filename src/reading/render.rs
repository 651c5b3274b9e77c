use super::highlights::{HighlightKey, HighlightSet};
use super::navigation::Position;
use crate::corpus::{Corpus, NotFound};

/// One verse as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseLine<'a> {
    pub key: HighlightKey,
    /// 1-based verse number.
    pub number: usize,
    pub text: &'a str,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterView<'a> {
    pub position: Position,
    pub heading: String,
    pub verses: Vec<VerseLine<'a>>,
}

/// Snapshot of a chapter with highlight flags applied.
///
/// Only keys of existing verses are consulted, so highlights that point past
/// the end of the chapter are never shown.
pub fn render_chapter<'a>(
    corpus: &'a Corpus,
    position: Position,
    highlights: &HighlightSet,
) -> Result<ChapterView<'a>, NotFound> {
    let book = corpus.book(position.book)?;
    let verses = corpus.chapter(position.book, position.chapter)?;
    let verses = verses
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let key = HighlightKey::new(position.book, position.chapter, idx);
            VerseLine {
                key,
                number: idx + 1,
                text: text.as_str(),
                highlighted: highlights.is_highlighted(&key),
            }
        })
        .collect();
    Ok(ChapterView {
        position,
        heading: format!("{} - Chapter {}", book.name, position.chapter + 1),
        verses,
    })
}
