use crate::api::Story;
use crate::ui::mvi::Intent;

/// The closed event set driving the story list. No other mutation path
/// exists.
#[derive(Debug, Clone)]
pub enum StoriesIntent {
    /// A fetch cycle started for the current request target.
    FetchInit,
    /// The current fetch cycle resolved with the response's story list.
    FetchSuccess { stories: Vec<Story> },
    /// The current fetch cycle failed (network, status, or parse).
    FetchFailure,
    /// User dismissed one story from the list.
    Remove { id: String },
}

impl Intent for StoriesIntent {}
