use std::sync::Arc;

use kanal::AsyncSender;
use snip_types::{AppEvent, SettingsPatch};

use crate::profile;
use crate::state::AppState;

/// Apply settings edited in the UI and persist them to the profile.
pub async fn handle_apply_settings(
    state: &Arc<AppState>,
    patch: SettingsPatch,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    {
        let mut config = state.config.write().await;
        config.ocr.engine = patch.engine;
        config.ocr.language = patch.language;
        config.ocr.tesseract_path = patch.tesseract_path;
        config.ocr.gemini_api_key = patch.gemini_api_key;
        config.history.save_text = patch.save_text;
        config.history.max_entries = patch.max_entries.max(1);
    }

    let status = {
        let config = state.config.read().await;
        match profile::save_user_profile(&state.profile, &config) {
            Ok(()) => {
                tracing::info!(
                    "settings applied: engine={}, language={}",
                    config.ocr.engine,
                    config.ocr.language
                );
                format!(
                    "Settings applied ({}, {})",
                    config.ocr.engine, config.ocr.language
                )
            }
            Err(e) => {
                tracing::error!("failed to save profile: {e}");
                format!("Settings not saved: {e}")
            }
        }
    };

    app_to_ui_tx
        .send(AppEvent::StatusUpdate {
            status,
            capturing: false,
        })
        .await?;

    Ok(())
}
