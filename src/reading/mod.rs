//! Reading-state model: where the reader is, what is highlighted, what was
//! read last and how text should look.
//!
//! Everything here is pure and free of GUI types; the iced layer in `app`
//! owns one instance of each store and persists them through `cache` after
//! every mutation.

pub mod bookmark;
pub mod highlights;
pub mod navigation;
pub mod preferences;
pub mod render;

pub use bookmark::{Bookmark, BookmarkStatus};
pub use highlights::{HighlightKey, HighlightSet};
pub use navigation::{BookOption, ChapterOption, Navigation, Position};
pub use preferences::Preferences;
pub use render::{ChapterView, VerseLine, render_chapter};
