// tests/session_tests.rs
use folio_term::animation::{AnimationHandle, RevealOutcome, Typewriter};
use folio_term::commands::HistoryDirection;
use folio_term::markup::parse;
use folio_term::{Config, ContentData, SubmitOutcome, TerminalSession};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn session() -> TerminalSession {
    let content = ContentData::embedded().expect("embedded content");
    let mut session = TerminalSession::new(Config::default(), content, CancellationToken::new());
    session.tick(Duration::from_secs(10));
    session
}

fn run(session: &mut TerminalSession, command: &str) -> SubmitOutcome {
    session.input_mut().set_content(command);
    let outcome = session.submit();
    if outcome == SubmitOutcome::Started {
        let mut resolved = None;
        while resolved.is_none() {
            resolved = session.tick(Duration::from_millis(50));
        }
    }
    outcome
}

#[test]
fn history_tracks_completed_commands() {
    let mut session = session();
    let commands = ["help", "bio", "nope", "info"];
    for command in commands {
        assert_eq!(run(&mut session, command), SubmitOutcome::Started);
    }
    assert_eq!(session.history().len(), commands.len());
    assert_eq!(session.history().cursor(), Some(commands.len() - 1));
    assert_eq!(session.history().entries()[2].status_code, 404);
}

#[test]
fn navigation_stays_in_bounds() {
    let mut session = session();
    run(&mut session, "bio");
    run(&mut session, "stack");

    assert!(!session.navigate_history(HistoryDirection::Down));
    assert!(session.navigate_history(HistoryDirection::Up));
    assert_eq!(session.history().cursor(), Some(0));
    assert!(!session.navigate_history(HistoryDirection::Up));
    assert_eq!(session.history().cursor(), Some(0));
    assert!(session.navigate_history(HistoryDirection::Down));
    assert_eq!(session.input().content(), "stack");
}

#[test]
fn cls_resets_history_and_info() {
    let mut session = session();
    run(&mut session, "experience");
    assert_eq!(run(&mut session, "cls"), SubmitOutcome::Cleared);
    assert!(session.history().is_empty());
    assert_eq!(session.history().cursor(), None);
    assert_eq!(session.info().lines()[1], "║ - INDEX [^][v]: null                ║");
}

#[test]
fn blank_input_is_ignored() {
    let mut session = session();
    assert_eq!(run(&mut session, "   "), SubmitOutcome::Ignored);
    assert!(session.output().is_empty());
}

#[test]
fn info_panel_truncates_long_commands() {
    let mut session = session();
    run(&mut session, "this command is far too long");
    assert_eq!(
        session.info().lines()[3],
        "║ - COMMAND: this command is f...     ║"
    );
}

#[tokio::test]
async fn reveal_completion_can_be_awaited() {
    let (mut typewriter, done) = Typewriter::new(
        parse("<b>hi</b> there\n"),
        Duration::from_millis(10),
        AnimationHandle::new(),
    );
    let driver = tokio::spawn(async move {
        while typewriter.tick() {
            tokio::task::yield_now().await;
        }
        typewriter.into_revealed()
    });
    assert_eq!(done.await.ok(), Some(RevealOutcome::Completed));
    let revealed = driver.await.expect("driver task");
    assert_eq!(revealed.len(), 3);
}

#[tokio::test]
async fn cancelling_the_root_cancels_child_reveals() {
    let root = CancellationToken::new();
    let (mut typewriter, done) = Typewriter::new(
        parse("some long response"),
        Duration::from_millis(10),
        AnimationHandle::child_of(&root),
    );
    typewriter.advance(Duration::from_millis(30));
    root.cancel();
    typewriter.advance(Duration::from_millis(10));
    assert_eq!(done.await.ok(), Some(RevealOutcome::Cancelled));
}
