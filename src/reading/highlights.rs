use std::collections::BTreeSet;
use std::str::FromStr;

/// Address of one highlighted verse: `book-chapter-verse`, all 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HighlightKey {
    pub book: usize,
    pub chapter: usize,
    pub verse: usize,
}

impl HighlightKey {
    pub fn new(book: usize, chapter: usize, verse: usize) -> Self {
        HighlightKey {
            book,
            chapter,
            verse,
        }
    }

    pub fn in_chapter(&self, book: usize, chapter: usize) -> bool {
        self.book == book && self.chapter == chapter
    }
}

impl std::fmt::Display for HighlightKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.book, self.chapter, self.verse)
    }
}

impl FromStr for HighlightKey {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.trim().split('-');
        let mut next = |what: &str| {
            parts
                .next()
                .and_then(|part| part.parse::<usize>().ok())
                .ok_or_else(|| format!("highlight key {raw:?} has no valid {what}"))
        };
        let key = HighlightKey::new(next("book")?, next("chapter")?, next("verse")?);
        if parts.next().is_some() {
            return Err(format!("highlight key {raw:?} has trailing components"));
        }
        Ok(key)
    }
}

/// Verse-level highlights across the whole corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    keys: BTreeSet<HighlightKey>,
}

impl HighlightSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a verse; returns whether it is highlighted afterwards.
    pub fn toggle(&mut self, key: HighlightKey) -> bool {
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    pub fn is_highlighted(&self, key: &HighlightKey) -> bool {
        self.keys.contains(key)
    }

    /// Drop every highlight of one chapter and return how many were removed.
    pub fn clear_chapter(&mut self, book: usize, chapter: usize) -> usize {
        let before = self.keys.len();
        self.keys.retain(|key| !key.in_chapter(book, chapter));
        before - self.keys.len()
    }

    pub fn count_in_chapter(&self, book: usize, chapter: usize) -> usize {
        self.keys
            .range(HighlightKey::new(book, chapter, 0)..=HighlightKey::new(book, chapter, usize::MAX))
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HighlightKey> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<HighlightKey> for HighlightSet {
    fn from_iter<I: IntoIterator<Item = HighlightKey>>(iter: I) -> Self {
        HighlightSet {
            keys: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_the_previous_set() {
        let mut set: HighlightSet = [HighlightKey::new(0, 1, 4)].into_iter().collect();
        let before = set.clone();
        let key = HighlightKey::new(0, 2, 4);

        assert!(set.toggle(key));
        assert!(set.is_highlighted(&key));
        assert!(!set.toggle(key));
        assert_eq!(set, before);
    }

    #[test]
    fn clear_chapter_removes_only_that_chapter() {
        let mut set: HighlightSet = [
            HighlightKey::new(0, 2, 0),
            HighlightKey::new(0, 2, 4),
            HighlightKey::new(0, 1, 4),
            HighlightKey::new(1, 2, 4),
            HighlightKey::new(2, 0, 0),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.count_in_chapter(0, 2), 2);
        assert_eq!(set.clear_chapter(0, 2), 2);
        assert_eq!(set.count_in_chapter(0, 2), 0);
        assert!(set.is_highlighted(&HighlightKey::new(0, 1, 4)));
        assert!(set.is_highlighted(&HighlightKey::new(1, 2, 4)));
        assert!(set.is_highlighted(&HighlightKey::new(2, 0, 0)));
        assert_eq!(set.len(), 3);
        assert_eq!(set.clear_chapter(0, 2), 0);
    }

    #[test]
    fn keys_use_dash_separated_text_form() {
        let key = HighlightKey::new(18, 22, 0);
        assert_eq!(key.to_string(), "18-22-0");
        assert_eq!("18-22-0".parse::<HighlightKey>(), Ok(key));
        assert!("18-22".parse::<HighlightKey>().is_err());
        assert!("18-22-0-5".parse::<HighlightKey>().is_err());
        assert!("a-b-c".parse::<HighlightKey>().is_err());
        assert!("-1-2-3".parse::<HighlightKey>().is_err());
    }
}
