//! Backend event loop behavior, without a screen or an OCR binary.

use std::sync::Arc;
use std::time::Duration;

use snip_config::Config;
use snip_io::HistoryStore;
use snip_types::{AppEvent, SnipRecord};
use tokio::time::timeout;

use crate::events::handle_events;
use crate::state::AppState;

fn test_state() -> Arc<AppState> {
    Arc::new(AppState::new("test".to_string(), Config::default()))
}

fn test_history(tag: &str) -> HistoryStore {
    let path = std::env::temp_dir().join(format!(
        "snipgrab-events-{}-{tag}.json",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    HistoryStore::new(path)
}

async fn recv(rx: &kanal::AsyncReceiver<AppEvent>) -> AppEvent {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timeout")
        .expect("channel closed")
}

#[tokio::test]
async fn trigger_starts_selection_and_drops_reentry() {
    let state = test_state();
    let history = test_history("guard");
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    handle_events(state.clone(), &history, &tx, AppEvent::TriggerSnip)
        .await
        .unwrap();

    assert!(matches!(
        recv(&rx).await,
        AppEvent::StatusUpdate { capturing: true, .. }
    ));
    assert!(matches!(recv(&rx).await, AppEvent::BeginSelection));

    // Second trigger while the first snip is in flight is dropped.
    handle_events(state.clone(), &history, &tx, AppEvent::TriggerSnip)
        .await
        .unwrap();
    assert!(rx.try_recv().unwrap().is_none());

    // Cancelling releases the guard and a new trigger works again.
    handle_events(state.clone(), &history, &tx, AppEvent::SelectionCancelled)
        .await
        .unwrap();
    assert!(matches!(
        recv(&rx).await,
        AppEvent::StatusUpdate { capturing: false, .. }
    ));

    handle_events(state, &history, &tx, AppEvent::TriggerSnip)
        .await
        .unwrap();
    assert!(matches!(
        recv(&rx).await,
        AppEvent::StatusUpdate { capturing: true, .. }
    ));
}

#[tokio::test]
async fn empty_region_fails_without_touching_the_screen() {
    let state = test_state();
    let history = test_history("empty");
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    let region = snip_types::CaptureRegion::from_corners(50, 50, 50, 50);
    handle_events(state, &history, &tx, AppEvent::RegionSelected(region))
        .await
        .unwrap();

    match recv(&rx).await {
        AppEvent::SnipFailed { message } => assert!(message.contains("Empty")),
        other => panic!("expected SnipFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn delete_entry_rewrites_history() {
    let state = test_state();
    let history = test_history("delete");
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    let kept = SnipRecord {
        timestamp: "2026-02-01 10:00:00".to_string(),
        text: "kept".to_string(),
    };
    let doomed = SnipRecord {
        timestamp: "2026-02-01 11:00:00".to_string(),
        text: "doomed".to_string(),
    };
    history.append(kept.clone(), 10).unwrap();
    history.append(doomed.clone(), 10).unwrap();

    handle_events(
        state,
        &history,
        &tx,
        AppEvent::DeleteEntry(doomed.timestamp.clone()),
    )
    .await
    .unwrap();

    match recv(&rx).await {
        AppEvent::ShowHistory(records) => assert_eq!(records, vec![kept]),
        other => panic!("expected ShowHistory, got {:?}", other),
    }
}
