//! The main event loop: draw, then fold one event.

use std::io;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::api::StoryClient;
use crate::config::Config;
use crate::prefs::{PreferenceStore, SessionPreference};
use crate::search::SearchSession;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run<C, S>(
    client: C,
    config: &Config,
    query: SessionPreference<S>,
    runtime: Handle,
) -> io::Result<()>
where
    C: StoryClient,
    S: PreferenceStore,
{
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_ms);
    let events = EventHandler::new(tick_rate);

    // First load: the session fetches for the initial query right away,
    // before any submission.
    let session = SearchSession::new(
        client,
        config.search.endpoint.clone(),
        query.value(),
        runtime,
        events.sender(),
    );
    let mut app = App::new(session, query);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => app.on_key(key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(..)) => {}
            Ok(event) => app.handle_fetch_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
