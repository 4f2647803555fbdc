use std::sync::Arc;
use std::sync::atomic::Ordering;

use kanal::{AsyncReceiver, AsyncSender};
use snip_io::HistoryStore;
use snip_types::AppEvent;

use crate::profile;
use crate::state::AppState;

pub mod apply_settings;
pub mod region_selected;

use apply_settings::handle_apply_settings;
use region_selected::handle_region_selected;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let history = HistoryStore::new(profile::history_path());

    // Show whatever history survived the last run.
    match history.load() {
        Ok(records) if !records.is_empty() => {
            let _ = app_to_ui_tx.send(AppEvent::ShowHistory(records)).await;
        }
        Ok(_) => {}
        Err(e) => tracing::warn!("failed to load snip history: {e}"),
    }

    tracing::info!("event loop started");
    loop {
        let event = ui_to_app_rx.recv().await?;
        handle_events(state.clone(), &history, &app_to_ui_tx, event).await?;
    }
}

pub(crate) async fn handle_events(
    state: Arc<AppState>,
    history: &HistoryStore,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::TriggerSnip => {
            if state.snipping.swap(true, Ordering::SeqCst) {
                tracing::debug!("snip already in progress, trigger dropped");
                return Ok(());
            }
            let _ = app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    status: "Select a region (Esc to cancel)".to_string(),
                    capturing: true,
                })
                .await;
            let _ = app_to_ui_tx.send(AppEvent::BeginSelection).await;
        }
        AppEvent::SelectionCancelled => {
            state.snipping.store(false, Ordering::SeqCst);
            let _ = app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    status: "Ready".to_string(),
                    capturing: false,
                })
                .await;
        }
        AppEvent::RegionSelected(region) => {
            tracing::debug!("region selected: {:?}", region);
            let result = handle_region_selected(&state, region, history, app_to_ui_tx).await;
            state.snipping.store(false, Ordering::SeqCst);
            result?;
        }
        AppEvent::ApplySettings(patch) => {
            handle_apply_settings(&state, patch, app_to_ui_tx).await?;
        }
        AppEvent::CopyText(text) => {
            let status = match snip_io::clipboard::copy_text(&text) {
                Ok(()) => "Copied to clipboard".to_string(),
                Err(e) => {
                    tracing::error!("clipboard write failed: {e}");
                    format!("Clipboard failed: {e}")
                }
            };
            let _ = app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    status,
                    capturing: false,
                })
                .await;
        }
        AppEvent::DeleteEntry(timestamp) => {
            match history.remove(&timestamp) {
                Ok(records) => {
                    let _ = app_to_ui_tx.send(AppEvent::ShowHistory(records)).await;
                }
                Err(e) => tracing::error!("failed to delete history entry: {e}"),
            }
        }
        // UI-only events, ignore in backend
        AppEvent::BeginSelection
        | AppEvent::SnipCompleted(_)
        | AppEvent::SnipFailed { .. }
        | AppEvent::StatusUpdate { .. }
        | AppEvent::ShowHistory(_)
        | AppEvent::UiEvent(_) => {}
    }

    Ok(())
}
