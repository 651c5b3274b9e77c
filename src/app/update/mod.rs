mod appearance;
mod core;
mod highlights;
mod navigation;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Effect {
    SaveHighlights,
    SaveBookmark,
    SavePreferences,
    ScrollToTop,
    LoadCorpus(String),
    QuitSafely,
}
