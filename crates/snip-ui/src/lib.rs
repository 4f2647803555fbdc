use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use snip_config::Config;
use snip_types::{
    AppEvent, CaptureRegion, EngineKind, LANGUAGES, Language, SettingsPatch, SnipRecord, UiEvent,
};
use tokio::sync::RwLock;

slint::include_modules!();

/// Run the Slint front end, bridging the app channels to window callbacks.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    // Snapshot the config before creating the window so no !Send Slint
    // state is held across an await point (the future must be Send).
    let config_snapshot = config.read().await.clone();

    let window = MainWindow::new()?;
    let window_weak = window.as_weak();

    populate_selectors(&window);
    seed_from_config(&window, &config_snapshot);

    // Overlay lives here between BeginSelection and the release/cancel.
    let overlay_store = Rc::new(RefCell::new(Option::<SelectionOverlay>::None));

    {
        let tx = ui_to_app_tx.clone();
        window.on_request_snip(move || {
            let tx = tx.clone();
            slint::spawn_local(async move {
                let _ = tx.send(AppEvent::TriggerSnip).await;
            })
            .unwrap();
        });
    }

    {
        let tx = ui_to_app_tx.clone();
        let weak = window_weak.clone();
        window.on_apply_settings(move || {
            let Some(window) = weak.upgrade() else { return };
            let patch = settings_from_window(&window);
            let tx = tx.clone();
            slint::spawn_local(async move {
                let _ = tx.send(AppEvent::ApplySettings(patch)).await;
            })
            .unwrap();
        });
    }

    {
        let tx = ui_to_app_tx.clone();
        window.on_copy_text(move |text| {
            let tx = tx.clone();
            slint::spawn_local(async move {
                let _ = tx.send(AppEvent::CopyText(text.to_string())).await;
            })
            .unwrap();
        });
    }

    {
        let tx = ui_to_app_tx.clone();
        window.on_delete_entry(move |timestamp| {
            let tx = tx.clone();
            slint::spawn_local(async move {
                let _ = tx.send(AppEvent::DeleteEntry(timestamp.to_string())).await;
            })
            .unwrap();
        });
    }

    // Receive events from the app.
    {
        let tx = ui_to_app_tx.clone();
        let overlay_store = overlay_store.clone();
        slint::spawn_local(async move {
            while let Ok(event) = app_to_ui_rx.recv().await {
                let Some(window) = window_weak.upgrade() else {
                    break;
                };
                match event {
                    AppEvent::BeginSelection => {
                        window.hide().ok();
                        if let Err(e) = open_overlay(&overlay_store, &window_weak, &tx) {
                            tracing::error!("failed to open selection overlay: {e}");
                            window.show().ok();
                            window.set_status(format!("Selection failed: {e}").into());
                            let tx = tx.clone();
                            slint::spawn_local(async move {
                                let _ = tx.send(AppEvent::SelectionCancelled).await;
                            })
                            .unwrap();
                        }
                    }
                    AppEvent::SnipCompleted(record) => {
                        window.set_last_text(record.text.into());
                        window.set_status("Ready".into());
                    }
                    AppEvent::SnipFailed { message } => {
                        window.set_status(message.into());
                    }
                    AppEvent::StatusUpdate { status, .. } => {
                        window.set_status(status.into());
                    }
                    AppEvent::ShowHistory(records) => {
                        window.set_history(history_model(records));
                    }
                    AppEvent::UiEvent(UiEvent::Show) => {
                        window.show().ok();
                    }
                    AppEvent::UiEvent(UiEvent::Hide) => {
                        window.hide().ok();
                    }
                    AppEvent::UiEvent(UiEvent::Close) => {
                        window.hide().ok();
                        break;
                    }
                    _ => {}
                }
            }
        })
        .unwrap();
    }

    window.show()?;
    window.run()?;

    Ok(())
}

fn populate_selectors(window: &MainWindow) {
    let engines: Vec<slint::SharedString> =
        EngineKind::ALL.iter().map(|e| e.label().into()).collect();
    window.set_engines(Rc::new(slint::VecModel::from(engines)).into());

    let languages: Vec<slint::SharedString> = LANGUAGES.iter().map(|l| l.name.into()).collect();
    window.set_languages(Rc::new(slint::VecModel::from(languages)).into());
}

fn seed_from_config(window: &MainWindow, config: &Config) {
    let engine_index = EngineKind::ALL
        .iter()
        .position(|e| *e == config.ocr.engine)
        .unwrap_or(0);
    window.set_engine_index(engine_index as i32);

    let language_index = LANGUAGES
        .iter()
        .position(|l| l.tesseract_code == config.ocr.language)
        .unwrap_or(0);
    window.set_language_index(language_index as i32);

    window.set_tesseract_path(config.ocr.tesseract_path.clone().into());
    window.set_gemini_api_key(config.ocr.gemini_api_key.clone().into());
    window.set_save_text(config.history.save_text);
    window.set_history_limit(config.history.max_entries.to_string().into());
}

fn settings_from_window(window: &MainWindow) -> SettingsPatch {
    let engine = EngineKind::ALL
        .get(window.get_engine_index().max(0) as usize)
        .copied()
        .unwrap_or(EngineKind::Tesseract);

    let language = LANGUAGES
        .get(window.get_language_index().max(0) as usize)
        .unwrap_or(Language::default())
        .tesseract_code
        .to_string();

    SettingsPatch {
        engine,
        language,
        tesseract_path: window.get_tesseract_path().to_string(),
        gemini_api_key: window.get_gemini_api_key().to_string(),
        save_text: window.get_save_text(),
        max_entries: window.get_history_limit().parse().unwrap_or(10),
    }
}

fn history_model(records: Vec<SnipRecord>) -> slint::ModelRc<HistoryEntry> {
    let entries: Vec<HistoryEntry> = records
        .into_iter()
        .rev() // newest first in the list
        .map(|r| HistoryEntry {
            timestamp: r.timestamp.into(),
            text: r.text.into(),
        })
        .collect();
    Rc::new(slint::VecModel::from(entries)).into()
}

/// Raise the full-screen selection overlay on the primary monitor.
fn open_overlay(
    overlay_store: &Rc<RefCell<Option<SelectionOverlay>>>,
    main_weak: &slint::Weak<MainWindow>,
    tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (width, height) = snip_capture::primary_monitor_size()?;

    let overlay = SelectionOverlay::new()?;
    overlay
        .window()
        .set_position(slint::PhysicalPosition::new(0, 0));
    overlay
        .window()
        .set_size(slint::PhysicalSize::new(width, height));

    {
        let store = overlay_store.clone();
        let main_weak = main_weak.clone();
        let tx = tx.clone();
        overlay.on_region_selected(move |x, y, w, h| {
            if let Some(overlay) = store.borrow_mut().take() {
                overlay.hide().ok();
            }
            if let Some(main) = main_weak.upgrade() {
                main.show().ok();
                main.set_status("Recognizing...".into());
            }
            let region = CaptureRegion {
                x,
                y,
                width: w.max(0) as u32,
                height: h.max(0) as u32,
            };
            let tx = tx.clone();
            slint::spawn_local(async move {
                let _ = tx.send(AppEvent::RegionSelected(region)).await;
            })
            .unwrap();
        });
    }

    {
        let store = overlay_store.clone();
        let main_weak = main_weak.clone();
        let tx = tx.clone();
        overlay.on_cancelled(move || {
            if let Some(overlay) = store.borrow_mut().take() {
                overlay.hide().ok();
            }
            if let Some(main) = main_weak.upgrade() {
                main.show().ok();
            }
            let tx = tx.clone();
            slint::spawn_local(async move {
                let _ = tx.send(AppEvent::SelectionCancelled).await;
            })
            .unwrap();
        });
    }

    overlay.show()?;
    *overlay_store.borrow_mut() = Some(overlay);
    Ok(())
}
