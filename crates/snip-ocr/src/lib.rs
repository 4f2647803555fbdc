use snip_config::ocr::OcrConfig;
use snip_types::EngineKind;

mod engine;
mod gemini;
mod tesseract;

pub use engine::{EngineMetadata, OcrEngine, OcrError};
pub use gemini::GeminiEngine;
pub use tesseract::TesseractEngine;

/// Build the backend selected in the config.
///
/// Engines are cheap to construct, so each snip builds a fresh one and picks
/// up settings edits without a restart.
pub fn build_engine(config: &OcrConfig) -> Result<Box<dyn OcrEngine>, OcrError> {
    match config.engine {
        EngineKind::Tesseract => Ok(Box::new(TesseractEngine::new(&config.tesseract_path)?)),
        EngineKind::Gemini => Ok(Box::new(GeminiEngine::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
        )?)),
    }
}
