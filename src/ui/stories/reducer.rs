//! Reducer for the story fetch lifecycle.

use crate::ui::mvi::Reducer;

use super::intent::StoriesIntent;
use super::state::StoriesState;

/// Pure transition function for the story list.
///
/// Supersession of stale fetch results happens before dispatch (in the
/// search session); by the time an intent reaches this reducer it is
/// already known to belong to the current request target.
pub struct StoriesReducer;

impl Reducer for StoriesReducer {
    type State = StoriesState;
    type Intent = StoriesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoriesIntent::FetchInit => StoriesState {
                is_loading: true,
                is_error: false,
                ..state
            },
            StoriesIntent::FetchSuccess { stories } => StoriesState {
                stories,
                is_loading: false,
                is_error: false,
            },
            StoriesIntent::FetchFailure => StoriesState {
                is_loading: false,
                is_error: true,
                ..state
            },
            StoriesIntent::Remove { id } => {
                let StoriesState {
                    mut stories,
                    is_loading,
                    is_error,
                } = state;
                stories.retain(|story| story.id != id);
                StoriesState {
                    stories,
                    is_loading,
                    is_error,
                }
            }
        }
    }
}
