//! Typed persistence of reading state on top of the key-value surface.
//!
//! Each corpus source gets its own origin directory under the configured
//! data dir, named by a hash of the source so URLs and odd paths are safe on
//! any filesystem. Inside it every value is a small JSON document.

use crate::config::{FontScale, ThemeMode};
use crate::reading::{Bookmark, HighlightKey, HighlightSet, Preferences};
use crate::storage::{FileStore, MemoryStore, Storage};
use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const HIGHLIGHTS_KEY: &str = "highlights";
pub const LAST_READ_KEY: &str = "last_read";
pub const THEME_KEY: &str = "theme";
pub const FONT_SIZE_KEY: &str = "font_size";

pub fn origin_dir(data_dir: &Path, corpus_source: &str) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(corpus_source.trim().as_bytes());
    let hash = format!("{:x}", hasher.finalize());
    data_dir.join(hash)
}

/// Open the file store for a corpus, or an in-memory one if the directory
/// cannot be created. State then lives only for this session.
pub fn open_store(data_dir: &Path, corpus_source: &str) -> Box<dyn Storage> {
    let dir = origin_dir(data_dir, corpus_source);
    match FileStore::open(&dir) {
        Ok(store) => {
            info!(dir = %store.root().display(), "Opened reading-state storage");
            Box::new(store)
        }
        Err(err) => {
            warn!("Falling back to in-memory storage: {err:#}");
            Box::new(MemoryStore::new())
        }
    }
}

fn read_value(store: &dyn Storage, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            warn!(key, "Failed to read stored value: {err:#}");
            None
        }
    }
}

/// Stored highlights; malformed entries are dropped with a warning.
pub fn load_highlights(store: &dyn Storage) -> HighlightSet {
    let Some(raw) = read_value(store, HIGHLIGHTS_KEY) else {
        return HighlightSet::new();
    };
    let entries: Vec<String> = match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("Ignoring unreadable highlights: {err}");
            return HighlightSet::new();
        }
    };
    let set: HighlightSet = entries
        .iter()
        .filter_map(|entry| match entry.parse::<HighlightKey>() {
            Ok(key) => Some(key),
            Err(err) => {
                warn!("Skipping stored highlight: {err}");
                None
            }
        })
        .collect();
    if set.is_empty() {
        debug!("No stored highlights");
    } else {
        debug!(count = set.len(), "Loaded highlights");
    }
    set
}

pub fn save_highlights(store: &dyn Storage, highlights: &HighlightSet) -> Result<()> {
    let entries: Vec<String> = highlights.iter().map(ToString::to_string).collect();
    let json = serde_json::to_string(&entries).context("Failed to encode highlights")?;
    store.set(HIGHLIGHTS_KEY, &json)
}

pub fn load_bookmark(store: &dyn Storage) -> Option<Bookmark> {
    let raw = read_value(store, LAST_READ_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(bookmark) => Some(bookmark),
        Err(err) => {
            warn!("Discarding unreadable bookmark: {err}");
            if let Err(err) = store.remove(LAST_READ_KEY) {
                warn!("Failed to remove bookmark: {err:#}");
            }
            None
        }
    }
}

pub fn save_bookmark(store: &dyn Storage, bookmark: Bookmark) -> Result<()> {
    let json = serde_json::to_string(&bookmark).context("Failed to encode bookmark")?;
    store.set(LAST_READ_KEY, &json)
}

/// Stored preferences over `defaults`. A missing font size is written back
/// so later runs see an explicit value.
pub fn load_preferences(store: &dyn Storage, defaults: Preferences) -> Preferences {
    let mut prefs = defaults;
    if let Some(raw) = read_value(store, THEME_KEY) {
        prefs.theme = match raw.trim().trim_matches('"') {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        };
    }
    match read_value(store, FONT_SIZE_KEY) {
        Some(raw) => match raw.parse::<FontScale>() {
            Ok(scale) => prefs.font_size = scale,
            Err(err) => warn!("Ignoring stored font size: {err}"),
        },
        None => {
            if let Err(err) = save_font_size(store, prefs.font_size) {
                warn!("Failed to store default font size: {err:#}");
            }
        }
    }
    debug!(theme = %prefs.theme, font_size = %prefs.font_size, "Loaded preferences");
    prefs
}

pub fn save_preferences(store: &dyn Storage, prefs: &Preferences) -> Result<()> {
    let theme = serde_json::to_string(&prefs.theme).context("Failed to encode theme")?;
    store.set(THEME_KEY, &theme)?;
    save_font_size(store, prefs.font_size)
}

fn save_font_size(store: &dyn Storage, font_size: FontScale) -> Result<()> {
    let json = serde_json::to_string(&font_size).context("Failed to encode font size")?;
    store.set(FONT_SIZE_KEY, &json)
}
