//! Fetch lifecycle state machine for the story list (MVI pattern).

mod intent;
mod reducer;
mod state;

pub use intent::StoriesIntent;
pub use reducer::StoriesReducer;
pub use state::StoriesState;
