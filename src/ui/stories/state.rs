use crate::api::Story;
use crate::ui::mvi::UiState;

/// View state for the story list.
///
/// `is_loading` and a terminal success/failure flag are mutually
/// exclusive at any instant: a fetch-init clears the error and sets
/// loading, and both terminal intents clear loading.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoriesState {
    /// Stories in response order. Replaced wholesale on success,
    /// filtered in place on removal, untouched on init/failure.
    pub stories: Vec<Story>,
    pub is_loading: bool,
    pub is_error: bool,
}

impl UiState for StoriesState {}
