//! Model-View-Intent primitives for the UI layer.
//!
//! All story-list mutation flows one way:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! The reducer is the single mutation path; everything around it
//! (fetching, persistence, rendering) stays outside the state machine.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
