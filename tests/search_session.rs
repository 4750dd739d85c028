//! End-to-end scenarios: session + reducer driven through the app by
//! the same events the UI loop would fold.

mod common;

use std::time::Duration;

use common::{pump_until_finished, scripted_app, story, Script, ScriptedClient};
use hackerstories::search::{SubmitError, Submission};
use hackerstories::ui::events::AppEvent;

#[test]
fn first_load_populates_the_list_without_a_submission() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let client = ScriptedClient::new().on_query(
        "React",
        Script::Respond(vec![story("0", "React"), story("1", "Redux")]),
    );
    let (mut app, rx) = scripted_app(&runtime, client, "React");

    pump_until_finished(&mut app, &rx, 1);

    assert_eq!(app.visible_stories().len(), 2);
    assert!(!app.stories().is_loading);
    assert!(!app.stories().is_error);
}

#[test]
fn dismissing_a_story_removes_it_by_identity() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let client = ScriptedClient::new().on_query(
        "React",
        Script::Respond(vec![story("0", "React"), story("1", "Redux")]),
    );
    let (mut app, rx) = scripted_app(&runtime, client, "React");
    pump_until_finished(&mut app, &rx, 1);

    app.remove_selected(); // selection starts at the first row, id "0"

    assert_eq!(app.visible_stories().len(), 1);
    assert_eq!(app.visible_stories()[0].id, "1");
}

#[test]
fn empty_submission_is_rejected_and_issues_no_fetch() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let client =
        ScriptedClient::new().on_query("React", Script::Respond(vec![story("0", "React")]));
    let (mut app, rx) = scripted_app(&runtime, client, "React");
    pump_until_finished(&mut app, &rx, 1);

    while !app.query().is_empty() {
        app.edit_backspace();
    }
    let target = app.current_target().to_string();
    app.submit();

    assert_eq!(app.current_target(), target);
    assert!(
        rx.recv_timeout(Duration::from_millis(200)).is_err(),
        "no fetch cycle may start for an empty submission"
    );
}

#[test]
fn failed_fetch_flags_error_and_keeps_prior_items() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let client = ScriptedClient::new(); // every target fails
    let (mut app, rx) = scripted_app(&runtime, client, "React");

    pump_until_finished(&mut app, &rx, 1);

    assert!(app.stories().is_error);
    assert!(!app.stories().is_loading);
    assert!(app.visible_stories().is_empty(), "first load had no prior items");
}

#[test]
fn late_result_for_a_superseded_target_is_discarded() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let client = ScriptedClient::new()
        .on_query(
            "React",
            Script::RespondAfter(Duration::from_millis(300), vec![story("9", "stale React")]),
        )
        .on_query("Redux", Script::Respond(vec![story("1", "Redux")]));
    let (mut app, rx) = scripted_app(&runtime, client, "React");

    // Re-target to Redux while the React cycle is still pending.
    app.edit_backspace();
    app.edit_backspace();
    app.edit_backspace();
    app.edit_backspace();
    app.edit_backspace();
    app.edit_push('R');
    app.edit_push('e');
    app.edit_push('d');
    app.edit_push('u');
    app.edit_push('x');
    app.submit();

    // Both cycles resolve; the React one resolves last.
    pump_until_finished(&mut app, &rx, 2);

    assert_eq!(app.visible_stories().len(), 1);
    assert_eq!(app.visible_stories()[0].title, "Redux");
    assert!(!app.stories().is_loading);
    assert!(!app.stories().is_error);
}

#[test]
fn resubmitting_the_same_query_issues_no_new_cycle() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let client =
        ScriptedClient::new().on_query("React", Script::Respond(vec![story("0", "React")]));
    let (mut app, rx) = scripted_app(&runtime, client, "React");
    pump_until_finished(&mut app, &rx, 1);

    app.submit();

    assert!(
        rx.recv_timeout(Duration::from_millis(200)).is_err(),
        "unchanged target must not start a fetch cycle"
    );
}

#[test]
fn fetch_started_precedes_its_result_on_the_channel() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let client =
        ScriptedClient::new().on_query("React", Script::Respond(vec![story("0", "React")]));
    let (_app, rx) = scripted_app(&runtime, client, "React");

    let first = rx.recv_timeout(Duration::from_secs(2)).unwrap();
    assert!(matches!(first, AppEvent::FetchStarted { generation: 1 }));
    let second = rx.recv_timeout(Duration::from_secs(2)).unwrap();
    assert!(matches!(
        second,
        AppEvent::FetchFinished { generation: 1, .. }
    ));
}

#[test]
fn submission_api_reports_started_unchanged_and_rejected() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let (tx, _rx) = std::sync::mpsc::channel();
    let mut session = hackerstories::search::SearchSession::new(
        ScriptedClient::new(),
        common::ENDPOINT.to_string(),
        "React",
        runtime.handle().clone(),
        tx,
    );

    assert_eq!(session.submit("React"), Ok(Submission::Unchanged));
    assert_eq!(session.submit("Redux"), Ok(Submission::Started));
    assert_eq!(session.submit(""), Err(SubmitError::EmptyQuery));
    assert!(session.current_target().ends_with("Redux"));
}
