use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

pub(crate) static VERSE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("verse-scroll"));

pub(crate) const LOADING_MESSAGE: &str = "Loading the Bible...";
pub(crate) const PLACEHOLDER_MESSAGE: &str = "Select a book and a chapter to start reading.";
pub(crate) const CHAPTER_NOT_FOUND_MESSAGE: &str = "Chapter not found.";
pub(crate) const CLEAR_CONFIRM_PROMPT: &str = "Remove all highlights from this chapter?";
pub(crate) const VERSE_NUMBER_SCALE: f32 = 0.7;
