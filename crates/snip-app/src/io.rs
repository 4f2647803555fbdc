use std::sync::Arc;

use kanal::AsyncSender;
use snip_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Global hotkey watcher; presses become `TriggerSnip` events.
pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let hotkey_enabled = {
        let config = state.config.read().await;
        config.ocr.hotkey_enabled
    };

    if hotkey_enabled {
        let tx = event_tx.clone();
        let cancel_clone = cancel.clone();

        tokio::task::spawn_blocking(move || {
            let hotkey_manager = match snip_capture::HotkeyManager::new() {
                Ok(manager) => manager,
                Err(e) => {
                    tracing::error!("Failed to create hotkey manager: {e}");
                    return;
                }
            };

            tracing::info!("snip hotkey registered (Ctrl+Shift+S)");

            loop {
                if cancel_clone.is_cancelled() {
                    break;
                }

                if hotkey_manager.poll() {
                    tracing::info!("snip hotkey pressed");
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        if let Err(e) = tx.send(AppEvent::TriggerSnip).await {
                            tracing::error!("Failed to send hotkey trigger: {e}");
                        }
                    });
                }

                // Sleep briefly to avoid busy loop
                std::thread::sleep(std::time::Duration::from_millis(50));
            }

            tracing::info!("hotkey listener stopping");
        });
    } else {
        tracing::info!("snip hotkey disabled by config");
    }

    cancel.cancelled().await;
    Ok(())
}
