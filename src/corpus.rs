//! Bible corpus loading.
//!
//! The corpus is a JSON array of books, each carrying a display name, an
//! abbreviation and an array of chapters, where a chapter is an array of
//! verse strings. It is read once at startup from a local path or an
//! http(s) URL and never mutated afterwards.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Why the corpus could not be loaded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("could not read {source_name}: {reason}")]
    Unreachable { source_name: String, reason: String },
    #[error("invalid Bible data in {source_name}: {reason}")]
    Parse { source_name: String, reason: String },
    #[error("{source_name} contains no books")]
    Empty { source_name: String },
    #[error("book {book} ({name}) in {source_name} has no chapters")]
    EmptyBook {
        source_name: String,
        book: usize,
        name: String,
    },
}

/// A book or chapter index that does not exist in the loaded corpus.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum NotFound {
    #[error("book {book} not found")]
    Book { book: usize },
    #[error("chapter {chapter} of book {book} not found")]
    Chapter { book: usize, chapter: usize },
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub name: String,
    #[serde(default, alias = "abbreviation")]
    pub abbrev: String,
    pub chapters: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    books: Vec<Book>,
}

impl Corpus {
    /// Validate and wrap an already parsed list of books.
    pub fn from_books(books: Vec<Book>, source_name: &str) -> Result<Self, LoadError> {
        if books.is_empty() {
            return Err(LoadError::Empty {
                source_name: source_name.to_string(),
            });
        }
        if let Some((idx, book)) = books
            .iter()
            .enumerate()
            .find(|(_, book)| book.chapters.is_empty())
        {
            return Err(LoadError::EmptyBook {
                source_name: source_name.to_string(),
                book: idx,
                name: book.name.clone(),
            });
        }
        Ok(Corpus { books })
    }

    pub fn from_json(raw: &str, source_name: &str) -> Result<Self, LoadError> {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
        let books: Vec<Book> = serde_json::from_str(raw).map_err(|err| LoadError::Parse {
            source_name: source_name.to_string(),
            reason: err.to_string(),
        })?;
        Self::from_books(books, source_name)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn book(&self, book: usize) -> Result<&Book, NotFound> {
        self.books.get(book).ok_or(NotFound::Book { book })
    }

    pub fn chapter_count(&self, book: usize) -> Result<usize, NotFound> {
        self.book(book).map(|b| b.chapters.len())
    }

    pub fn chapter(&self, book: usize, chapter: usize) -> Result<&[String], NotFound> {
        self.book(book)?
            .chapters
            .get(chapter)
            .map(Vec::as_slice)
            .ok_or(NotFound::Chapter { book, chapter })
    }

    pub fn verse_count(&self, book: usize, chapter: usize) -> Result<usize, NotFound> {
        self.chapter(book, chapter).map(<[String]>::len)
    }
}

/// Load the corpus from a filesystem path or an http(s) URL.
///
/// Blocking: URL sources go through `reqwest::blocking`, so callers inside an
/// async runtime must move this onto a plain thread.
pub fn load_corpus(source: &str) -> Result<Corpus, LoadError> {
    info!(source, "Loading Bible corpus");
    let raw = if is_remote(source) {
        fetch_remote(source)?
    } else {
        fs::read_to_string(Path::new(source)).map_err(|err| LoadError::Unreachable {
            source_name: source.to_string(),
            reason: err.to_string(),
        })?
    };
    debug!(source, bytes = raw.len(), "Read corpus document");
    let corpus = Corpus::from_json(&raw, source)?;
    info!(source, books = corpus.book_count(), "Loaded Bible corpus");
    Ok(corpus)
}

fn is_remote(source: &str) -> bool {
    let lower = source.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn fetch_remote(url: &str) -> Result<String, LoadError> {
    let unreachable = |reason: String| LoadError::Unreachable {
        source_name: url.to_string(),
        reason,
    };
    let response = reqwest::blocking::get(url).map_err(|err| unreachable(err.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(unreachable(format!("HTTP {status}")));
    }
    response.text().map_err(|err| unreachable(err.to_string()))
}
