//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::mpsc::Receiver;
use std::sync::Mutex;
use std::time::Duration;

use hackerstories::api::{FetchError, Story, StoryClient};
use hackerstories::prefs::{PreferenceStore, PrefsError, SessionPreference};
use hackerstories::search::SearchSession;
use hackerstories::ui::app::App;
use hackerstories::ui::events::AppEvent;

pub const ENDPOINT: &str = "https://example.test/api/v1/search?query=";

pub fn story(id: &str, title: &str) -> Story {
    Story {
        id: id.to_string(),
        title: title.to_string(),
        url: Some(format!("https://example.test/{id}")),
        author: "tester".to_string(),
        comment_count: 2,
        points: 5,
    }
}

/// What the scripted client should do for one request target.
#[derive(Clone)]
pub enum Script {
    Respond(Vec<Story>),
    Fail,
    /// Resolve successfully, but only after the given delay. Used to
    /// force out-of-order resolution across targets.
    RespondAfter(Duration, Vec<Story>),
}

/// Story client scripted per target; unknown targets fail.
pub struct ScriptedClient {
    scripts: Mutex<HashMap<String, Script>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
        }
    }

    pub fn on_query(self, query: &str, script: Script) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(format!("{ENDPOINT}{query}"), script);
        self
    }
}

impl StoryClient for ScriptedClient {
    async fn search(&self, target: &str) -> Result<Vec<Story>, FetchError> {
        let script = {
            let scripts = self.scripts.lock().unwrap();
            scripts.get(target).cloned()
        };
        match script {
            Some(Script::Respond(stories)) => Ok(stories),
            Some(Script::RespondAfter(delay, stories)) => {
                tokio::time::sleep(delay).await;
                Ok(stories)
            }
            Some(Script::Fail) | None => Err(FetchError::Status(500)),
        }
    }
}

/// In-memory preference store for tests that don't care about disk.
pub struct MemPrefs {
    map: Mutex<HashMap<String, String>>,
}

impl MemPrefs {
    pub fn new() -> Self {
        Self {
            map: Mutex::new(HashMap::new()),
        }
    }
}

impl PreferenceStore for MemPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.map.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.map.lock().unwrap().insert(key.into(), value.into());
        Ok(())
    }
}

/// Build an app around a scripted client. The returned receiver carries
/// the fetch lifecycle events the session emits.
pub fn scripted_app(
    runtime: &tokio::runtime::Runtime,
    client: ScriptedClient,
    initial_query: &str,
) -> (App<ScriptedClient, MemPrefs>, Receiver<AppEvent>) {
    let (tx, rx) = std::sync::mpsc::channel();
    let session = SearchSession::new(
        client,
        ENDPOINT.to_string(),
        initial_query,
        runtime.handle().clone(),
        tx,
    );
    let query = SessionPreference::initialize(MemPrefs::new(), "search", initial_query);
    (App::new(session, query), rx)
}

/// Feed events into the app until `finished` fetch cycles have resolved.
pub fn pump_until_finished(
    app: &mut App<ScriptedClient, MemPrefs>,
    rx: &Receiver<AppEvent>,
    finished: usize,
) {
    let mut seen = 0;
    while seen < finished {
        let event = rx
            .recv_timeout(Duration::from_secs(2))
            .expect("timed out waiting for fetch events");
        if matches!(event, AppEvent::FetchFinished { .. }) {
            seen += 1;
        }
        app.handle_fetch_event(event);
    }
}
