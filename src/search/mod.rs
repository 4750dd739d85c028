//! Request orchestration: owns the current request target and drives the
//! single in-flight fetch cycle.
//!
//! Each cycle is tagged with the generation it was issued for. When the
//! target changes while a cycle is still pending, the old cycle is not
//! aborted; its result simply fails the generation check in [`SearchSession::commit`]
//! and is discarded. Out-of-order responses can therefore never
//! overwrite newer state.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use thiserror::Error;
use tokio::runtime::Handle;

use crate::api::{FetchError, Story, StoryClient};
use crate::ui::events::AppEvent;
use crate::ui::stories::StoriesIntent;

/// Outcome of a submission that passed the empty-query precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The target changed; a new fetch cycle was issued.
    Started,
    /// Same target as before; no fetch issued.
    Unchanged,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Submitting an empty query is a caller precondition violation,
    /// not a silent no-op. The UI gates the key binding on this too.
    #[error("cannot submit an empty query")]
    EmptyQuery,
}

/// Owns the request target and the fetch lifecycle around it.
///
/// Construction computes the initial target from the initial query and
/// issues the first-load fetch immediately; afterwards the target
/// changes only through [`SearchSession::submit`].
pub struct SearchSession<C> {
    client: Arc<C>,
    endpoint: String,
    target: String,
    generation: u64,
    runtime: Handle,
    events: Sender<AppEvent>,
}

impl<C: StoryClient> SearchSession<C> {
    pub fn new(
        client: C,
        endpoint: String,
        initial_query: &str,
        runtime: Handle,
        events: Sender<AppEvent>,
    ) -> Self {
        let target = format!("{endpoint}{initial_query}");
        let mut session = Self {
            client: Arc::new(client),
            endpoint,
            target,
            generation: 0,
            runtime,
            events,
        };
        session.begin_fetch();
        session
    }

    /// Recompute the target from `query`; if it differs from the current
    /// one, replace it and issue exactly one fetch cycle.
    pub fn submit(&mut self, query: &str) -> Result<Submission, SubmitError> {
        if query.is_empty() {
            return Err(SubmitError::EmptyQuery);
        }
        let new_target = format!("{}{}", self.endpoint, query);
        if new_target == self.target {
            tracing::debug!(target = %self.target, "submission with unchanged target; no fetch");
            return Ok(Submission::Unchanged);
        }
        self.target = new_target;
        self.begin_fetch();
        Ok(Submission::Started)
    }

    /// Map a finished cycle to a reducer intent, or discard it when it
    /// was superseded by a later submission.
    pub fn commit(
        &self,
        generation: u64,
        result: Result<Vec<Story>, FetchError>,
    ) -> Option<StoriesIntent> {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "discarding result of superseded fetch cycle"
            );
            return None;
        }
        Some(match result {
            Ok(stories) => StoriesIntent::FetchSuccess { stories },
            Err(err) => {
                tracing::warn!(target = %self.target, error = %err, "fetch cycle failed");
                StoriesIntent::FetchFailure
            }
        })
    }

    pub fn current_target(&self) -> &str {
        &self.target
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Announce the cycle, then resolve it on the runtime. `FetchStarted`
    /// is sent before the task is spawned, so it always precedes the
    /// cycle's `FetchFinished` on the event channel.
    fn begin_fetch(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        let target = self.target.clone();
        let client = Arc::clone(&self.client);
        let events = self.events.clone();

        tracing::info!(target = %target, generation, "starting fetch cycle");
        let _ = self.events.send(AppEvent::FetchStarted { generation });

        self.runtime.spawn(async move {
            let result = client.search(&target).await;
            // Receiver gone means the UI is shutting down.
            let _ = events.send(AppEvent::FetchFinished { generation, result });
        });
    }
}
