//! Base trait for intents.

/// Marker trait for intents: user actions (keystrokes, submissions) and
/// system events (fetch results) that a reducer folds into new state.
///
/// Intent enums are sealed; a reducer matching on one is exhaustive by
/// construction, so there is no runtime "unknown event" path.
pub trait Intent: Send + 'static {}
