use super::navigation::Position;
use crate::corpus::{Corpus, NotFound};
use serde::{Deserialize, Serialize};

/// Last chapter the reader displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub book_index: usize,
    pub chapter_index: usize,
}

impl From<Position> for Bookmark {
    fn from(position: Position) -> Self {
        Bookmark {
            book_index: position.book,
            chapter_index: position.chapter,
        }
    }
}

impl Bookmark {
    /// The bookmarked position, if it still exists in `corpus`.
    pub fn resolve(&self, corpus: &Corpus) -> Result<Position, NotFound> {
        corpus.chapter(self.book_index, self.chapter_index)?;
        Ok(Position::new(self.book_index, self.chapter_index))
    }

    pub fn status(bookmark: Option<&Bookmark>, corpus: &Corpus) -> BookmarkStatus {
        let Some(bookmark) = bookmark else {
            return BookmarkStatus::NoPreviousReading;
        };
        match (bookmark.resolve(corpus), corpus.book(bookmark.book_index)) {
            (Ok(position), Ok(book)) => BookmarkStatus::LastRead {
                book_name: book.name.clone(),
                chapter_number: position.chapter + 1,
            },
            _ => BookmarkStatus::NoPreviousReading,
        }
    }
}

/// What the "last read" line shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkStatus {
    NoPreviousReading,
    LastRead {
        book_name: String,
        chapter_number: usize,
    },
}

impl std::fmt::Display for BookmarkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookmarkStatus::NoPreviousReading => f.write_str("No previous reading"),
            BookmarkStatus::LastRead {
                book_name,
                chapter_number,
            } => write!(f, "Last read: {book_name} - Chapter {chapter_number}"),
        }
    }
}
