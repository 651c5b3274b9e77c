use crate::corpus::{Corpus, NotFound};

/// A fully resolved book/chapter pair. Both indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub book: usize,
    pub chapter: usize,
}

impl Position {
    pub fn new(book: usize, chapter: usize) -> Self {
        Position { book, chapter }
    }
}

/// Entry of the book selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookOption {
    pub index: usize,
    pub name: String,
}

impl std::fmt::Display for BookOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Entry of the chapter selector: 0-based value, 1-based label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterOption {
    pub index: usize,
}

impl std::fmt::Display for ChapterOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Chapter {}", self.index + 1)
    }
}

/// Current book/chapter selection.
///
/// A book can be selected while the chapter is not; only a complete pair is a
/// [`Position`] that can be displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    book: Option<usize>,
    chapter: Option<usize>,
}

impl Navigation {
    pub fn selected_book(&self) -> Option<usize> {
        self.book
    }

    pub fn selected_chapter(&self) -> Option<usize> {
        self.chapter
    }

    pub fn position(&self) -> Option<Position> {
        Some(Position::new(self.book?, self.chapter?))
    }

    /// Select a book and open its first chapter, or clear the selection.
    pub fn select_book(
        &mut self,
        corpus: &Corpus,
        book: Option<usize>,
    ) -> Result<Option<Position>, NotFound> {
        let Some(book) = book else {
            self.book = None;
            self.chapter = None;
            return Ok(None);
        };
        corpus.chapter(book, 0)?;
        self.book = Some(book);
        self.chapter = Some(0);
        Ok(self.position())
    }

    /// Select a chapter of the current book. Without a selected book this is
    /// a no-op; `None` keeps the book and unsets the chapter.
    pub fn select_chapter(
        &mut self,
        corpus: &Corpus,
        chapter: Option<usize>,
    ) -> Result<Option<Position>, NotFound> {
        let Some(book) = self.book else {
            return Ok(None);
        };
        match chapter {
            Some(chapter) => {
                corpus.chapter(book, chapter)?;
                self.chapter = Some(chapter);
            }
            None => self.chapter = None,
        }
        Ok(self.position())
    }

    /// Jump straight to a position, e.g. one restored from a bookmark.
    pub fn restore(&mut self, corpus: &Corpus, position: Position) -> Result<Position, NotFound> {
        corpus.chapter(position.book, position.chapter)?;
        self.book = Some(position.book);
        self.chapter = Some(position.chapter);
        Ok(position)
    }

    pub fn previous_position(&self, corpus: &Corpus) -> Option<Position> {
        let current = self.position()?;
        if current.chapter > 0 {
            return Some(Position::new(current.book, current.chapter - 1));
        }
        let book = current.book.checked_sub(1)?;
        let last = corpus.chapter_count(book).ok()?.checked_sub(1)?;
        Some(Position::new(book, last))
    }

    pub fn next_position(&self, corpus: &Corpus) -> Option<Position> {
        let current = self.position()?;
        let chapters = corpus.chapter_count(current.book).ok()?;
        if current.chapter + 1 < chapters {
            return Some(Position::new(current.book, current.chapter + 1));
        }
        let book = current.book + 1;
        if book < corpus.book_count() {
            Some(Position::new(book, 0))
        } else {
            None
        }
    }

    pub fn can_go_previous(&self, corpus: &Corpus) -> bool {
        self.previous_position(corpus).is_some()
    }

    pub fn can_go_next(&self, corpus: &Corpus) -> bool {
        self.next_position(corpus).is_some()
    }

    /// Step back one chapter, crossing into the previous book if needed.
    /// Returns `None` (and leaves the state alone) at the first chapter of
    /// the first book.
    pub fn go_previous(&mut self, corpus: &Corpus) -> Option<Position> {
        let target = self.previous_position(corpus)?;
        self.book = Some(target.book);
        self.chapter = Some(target.chapter);
        Some(target)
    }

    /// Step forward one chapter, crossing into the next book if needed.
    /// Returns `None` at the last chapter of the last book.
    pub fn go_next(&mut self, corpus: &Corpus) -> Option<Position> {
        let target = self.next_position(corpus)?;
        self.book = Some(target.book);
        self.chapter = Some(target.chapter);
        Some(target)
    }
}

pub fn book_options(corpus: &Corpus) -> Vec<BookOption> {
    corpus
        .books()
        .iter()
        .enumerate()
        .map(|(index, book)| BookOption {
            index,
            name: book.name.clone(),
        })
        .collect()
}

pub fn chapter_options(corpus: &Corpus, book: usize) -> Vec<ChapterOption> {
    let count = corpus.chapter_count(book).unwrap_or(0);
    (0..count).map(|index| ChapterOption { index }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::tests::sample_corpus;

    fn at(corpus: &Corpus, book: usize, chapter: usize) -> Navigation {
        let mut nav = Navigation::default();
        nav.restore(corpus, Position::new(book, chapter))
            .expect("position exists");
        nav
    }

    #[test]
    fn next_crosses_into_the_following_book() {
        let corpus = sample_corpus();
        let mut nav = at(&corpus, 0, 2);
        assert_eq!(nav.go_next(&corpus), Some(Position::new(1, 0)));
        assert_eq!(nav.position(), Some(Position::new(1, 0)));
    }

    #[test]
    fn previous_crosses_into_the_last_chapter_of_the_prior_book() {
        let corpus = sample_corpus();
        let mut nav = at(&corpus, 1, 0);
        assert_eq!(nav.go_previous(&corpus), Some(Position::new(0, 2)));
    }

    #[test]
    fn global_boundaries_are_no_ops_and_disable_controls() {
        let corpus = sample_corpus();
        let mut first = at(&corpus, 0, 0);
        assert!(!first.can_go_previous(&corpus));
        assert!(first.can_go_next(&corpus));
        assert_eq!(first.go_previous(&corpus), None);
        assert_eq!(first.position(), Some(Position::new(0, 0)));
        assert!(!first.can_go_previous(&corpus));

        let mut last = at(&corpus, 1, 0);
        assert!(!last.can_go_next(&corpus));
        assert_eq!(last.go_next(&corpus), None);
        assert_eq!(last.position(), Some(Position::new(1, 0)));
    }

    #[test]
    fn next_then_previous_round_trips_everywhere_but_the_end() {
        let corpus = sample_corpus();
        let positions = [(0, 0), (0, 1), (0, 2), (1, 0)];
        for (book, chapter) in positions {
            let start = Position::new(book, chapter);
            let mut nav = at(&corpus, book, chapter);
            if nav.go_next(&corpus).is_some() {
                assert_eq!(nav.go_previous(&corpus), Some(start));
            } else {
                assert_eq!(start, Position::new(1, 0));
                assert_eq!(nav.position(), Some(start));
            }
        }
    }

    #[test]
    fn unset_position_disables_both_directions() {
        let corpus = sample_corpus();
        let mut nav = Navigation::default();
        assert!(!nav.can_go_previous(&corpus));
        assert!(!nav.can_go_next(&corpus));
        assert_eq!(nav.go_next(&corpus), None);
        assert_eq!(nav.position(), None);
    }

    #[test]
    fn selecting_a_book_opens_its_first_chapter() {
        let corpus = sample_corpus();
        let mut nav = at(&corpus, 0, 2);
        assert_eq!(
            nav.select_book(&corpus, Some(1)),
            Ok(Some(Position::new(1, 0)))
        );
        assert_eq!(nav.select_book(&corpus, None), Ok(None));
        assert_eq!(nav.position(), None);
        assert_eq!(nav.selected_book(), None);
        assert_eq!(
            nav.select_book(&corpus, Some(5)),
            Err(NotFound::Book { book: 5 })
        );
    }

    #[test]
    fn chapter_selection_requires_a_book_and_a_valid_index() {
        let corpus = sample_corpus();
        let mut nav = Navigation::default();
        assert_eq!(nav.select_chapter(&corpus, Some(1)), Ok(None));

        nav.select_book(&corpus, Some(0)).expect("book exists");
        assert_eq!(
            nav.select_chapter(&corpus, Some(2)),
            Ok(Some(Position::new(0, 2)))
        );
        assert!(nav.select_chapter(&corpus, Some(3)).is_err());
        assert_eq!(nav.position(), Some(Position::new(0, 2)));

        assert_eq!(nav.select_chapter(&corpus, None), Ok(None));
        assert_eq!(nav.selected_book(), Some(0));
        assert_eq!(nav.selected_chapter(), None);
    }

    #[test]
    fn chapter_options_use_one_based_labels() {
        let corpus = sample_corpus();
        let options = chapter_options(&corpus, 0);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].index, 0);
        assert_eq!(options[2].to_string(), "Chapter 3");
        assert!(chapter_options(&corpus, 9).is_empty());
        assert_eq!(book_options(&corpus)[1].to_string(), "Exodus");
    }
}
