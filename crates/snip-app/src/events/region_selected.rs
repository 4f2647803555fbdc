use std::sync::Arc;

use kanal::AsyncSender;
use snip_io::HistoryStore;
use snip_types::{AppEvent, CaptureRegion, Language, SnipRecord};

use crate::state::AppState;

/// Capture the selected region, run the configured backend, and land the
/// text on the clipboard and in the history.
///
/// Every failure becomes a `SnipFailed` status for the UI; only channel
/// breakage propagates as an error.
pub async fn handle_region_selected(
    state: &Arc<AppState>,
    region: CaptureRegion,
    history: &HistoryStore,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if region.is_empty() {
        app_to_ui_tx
            .send(AppEvent::SnipFailed {
                message: "Empty capture region".to_string(),
            })
            .await?;
        return Ok(());
    }

    // Config is re-read per snip so settings edits apply immediately.
    let (ocr_config, history_config) = {
        let config = state.config.read().await;
        (config.ocr.clone(), config.history.clone())
    };

    let capture =
        tokio::task::spawn_blocking(move || snip_capture::capture_screen_region(region)).await;

    let png = match capture {
        Ok(Ok(png)) => png,
        Ok(Err(e)) => {
            tracing::error!("capture failed: {e}");
            app_to_ui_tx
                .send(AppEvent::SnipFailed {
                    message: format!("Capture failed: {e}"),
                })
                .await?;
            return Ok(());
        }
        Err(e) => {
            tracing::error!("capture task panicked: {e}");
            app_to_ui_tx
                .send(AppEvent::SnipFailed {
                    message: "Capture failed".to_string(),
                })
                .await?;
            return Ok(());
        }
    };

    let engine = match snip_ocr::build_engine(&ocr_config) {
        Ok(engine) => engine,
        Err(e) => {
            app_to_ui_tx
                .send(AppEvent::SnipFailed {
                    message: e.to_string(),
                })
                .await?;
            return Ok(());
        }
    };

    let language = Language::by_code(&ocr_config.language).unwrap_or(Language::default());
    tracing::info!(
        "recognizing {}x{} region with {} ({})",
        region.width,
        region.height,
        engine.metadata().name,
        language.name
    );

    match engine.recognize(&png, language).await {
        Ok(text) if text.is_empty() => {
            app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    status: "No text found".to_string(),
                    capturing: false,
                })
                .await?;
        }
        Ok(text) => {
            tracing::debug!("recognized {} chars", text.len());

            if let Err(e) = snip_io::clipboard::copy_text(&text) {
                tracing::warn!("clipboard write failed: {e}");
            }

            let record = SnipRecord {
                timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                text,
            };

            if history_config.save_text {
                match history.append(record.clone(), history_config.max_entries) {
                    Ok(records) => {
                        app_to_ui_tx.send(AppEvent::ShowHistory(records)).await?;
                    }
                    Err(e) => tracing::warn!("failed to save snip history: {e}"),
                }
            }

            app_to_ui_tx.send(AppEvent::SnipCompleted(record)).await?;
        }
        Err(e) => {
            tracing::error!("recognition failed: {e}");
            app_to_ui_tx
                .send(AppEvent::SnipFailed {
                    message: format!("OCR failed: {e}"),
                })
                .await?;
        }
    }

    Ok(())
}
