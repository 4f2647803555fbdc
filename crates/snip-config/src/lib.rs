use serde::{Deserialize, Serialize};

use self::history::HistoryConfig;
use self::ocr::OcrConfig;

pub mod history;
pub mod ocr;

#[derive(Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ocr: OcrConfig,
    pub history: HistoryConfig,
}

impl Config {
    /// Build a config from defaults plus environment overrides.
    ///
    /// `.env` is loaded by the binary before this runs, so the original
    /// `TESSERACT_PATH` / `GOOGLE_API_KEY` dotenv keys keep working.
    pub fn new() -> Self {
        Config {
            ocr: OcrConfig::from_env(),
            history: HistoryConfig::default(),
        }
    }

    /// Re-apply environment overrides on top of a loaded profile.
    ///
    /// Env vars win over the profile file so a key never has to be written
    /// to disk to be usable.
    pub fn apply_env_overrides(&mut self) {
        self.ocr.apply_env_overrides();
    }
}
