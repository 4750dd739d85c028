//! Application state and command handling at the render boundary.
//!
//! `App` owns the reducer state, the query preference, and the search
//! session, and exposes the three commands the presentation layer may
//! issue: edit the query, submit, dismiss a story.

use crossterm::event::KeyEvent;

use crate::api::{Story, StoryClient};
use crate::prefs::{PreferenceStore, SessionPreference};
use crate::search::{SearchSession, SubmitError, Submission};
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;
use crate::ui::stories::{StoriesIntent, StoriesReducer, StoriesState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App<C, S> {
    should_quit: bool,
    /// Story list lifecycle state (MVI pattern).
    stories: StoriesState,
    /// Search text, persisted across sessions on every edit.
    query: SessionPreference<S>,
    session: SearchSession<C>,
    /// Index into the visible story list, clamped after every change.
    selected: usize,
}

impl<C: StoryClient, S: PreferenceStore> App<C, S> {
    pub fn new(session: SearchSession<C>, query: SessionPreference<S>) -> Self {
        Self {
            should_quit: false,
            stories: StoriesState::default(),
            query,
            session,
            selected: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn query(&self) -> &str {
        self.query.value()
    }

    pub fn stories(&self) -> &StoriesState {
        &self.stories
    }

    /// The rows to render. Filtering happens server-side through the
    /// request target, so this is the reducer's list as-is.
    pub fn visible_stories(&self) -> &[Story] {
        &self.stories.stories
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn current_target(&self) -> &str {
        self.session.current_target()
    }

    /// Append one character to the query and persist it.
    pub fn edit_push(&mut self, c: char) {
        let mut value = self.query.value().to_string();
        value.push(c);
        self.query.set(value);
    }

    /// Drop the last character of the query and persist it.
    pub fn edit_backspace(&mut self) {
        let mut value = self.query.value().to_string();
        if value.pop().is_some() {
            self.query.set(value);
        }
    }

    /// Submit the current query. Gated here on emptiness, so the
    /// session's precondition error is unreachable interactively.
    pub fn submit(&mut self) {
        if self.query.value().is_empty() {
            return;
        }
        match self.session.submit(self.query.value()) {
            Ok(Submission::Started | Submission::Unchanged) => {}
            Err(SubmitError::EmptyQuery) => {
                unreachable!("submission is gated on a non-empty query")
            }
        }
    }

    pub fn move_selection(&mut self, delta: i64) {
        let len = self.visible_stories().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected as i64;
        self.selected = current.saturating_add(delta).clamp(0, len as i64 - 1) as usize;
    }

    /// Dismiss the selected story. Thin command dispatcher; the reducer
    /// does the actual filtering.
    pub fn remove_selected(&mut self) {
        let Some(story) = self.visible_stories().get(self.selected) else {
            return;
        };
        let id = story.id.clone();
        dispatch_mvi!(self, stories, StoriesReducer, StoriesIntent::Remove { id });
        self.clamp_selection();
    }

    /// Fold a fetch lifecycle event into the reducer state. Removal and
    /// input events interleave freely with in-flight cycles; stale
    /// results are dropped by the session's generation check.
    pub fn handle_fetch_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::FetchStarted { .. } => {
                dispatch_mvi!(self, stories, StoriesReducer, StoriesIntent::FetchInit);
            }
            AppEvent::FetchFinished { generation, result } => {
                if let Some(intent) = self.session.commit(generation, result) {
                    dispatch_mvi!(self, stories, StoriesReducer, intent);
                    self.clamp_selection();
                }
            }
            AppEvent::Input(_) | AppEvent::Tick | AppEvent::Resize(..) => {}
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        crate::ui::input::handle_key(self, key);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_stories().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
