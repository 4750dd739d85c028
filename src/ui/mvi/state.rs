//! Base trait for UI state.

/// Marker trait for state snapshots.
///
/// A state value is cloned to produce the next state, carries everything
/// the view needs to render, and is comparable so redraws can be skipped
/// when nothing changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
