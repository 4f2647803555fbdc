//! Headless pipeline check - run with: cargo run -p snip-app --bin snip_probe
//!
//! Captures the primary screen and runs the configured OCR backend once.
//! Handy for verifying a Tesseract install or an API key without the GUI.

use anyhow::Result;
use snip_config::Config;
use snip_types::Language;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let config = Config::new();

    tracing::info!("capturing primary screen...");
    let start = std::time::Instant::now();
    let png = snip_capture::capture_primary_screen()?;
    tracing::info!("{} bytes in {:?}", png.len(), start.elapsed());

    let engine = snip_ocr::build_engine(&config.ocr)?;
    let language = Language::by_code(&config.ocr.language).unwrap_or(Language::default());
    tracing::info!("running {} ({})...", engine.metadata().name, language.name);

    let start = std::time::Instant::now();
    let text = engine.recognize(&png, language).await?;
    tracing::info!("{} chars in {:?}", text.len(), start.elapsed());

    for line in text.lines().take(10) {
        println!("> {line}");
    }

    Ok(())
}
