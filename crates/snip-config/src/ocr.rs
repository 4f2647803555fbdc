use std::env;

use serde::{Deserialize, Serialize};
use snip_types::EngineKind;

fn default_engine() -> EngineKind {
    EngineKind::Tesseract
}

fn default_language() -> String {
    "eng".to_string()
}

fn default_gemini_model() -> String {
    "gemini-1.5-pro".to_string()
}

fn default_hotkey_enabled() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    #[serde(default = "default_engine")]
    pub engine: EngineKind,
    /// Tesseract traineddata code; Gemini prompts use the display name.
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub tesseract_path: String,
    #[serde(default)]
    pub gemini_api_key: String,
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    #[serde(default = "default_hotkey_enabled")]
    pub hotkey_enabled: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            language: default_language(),
            tesseract_path: String::new(),
            gemini_api_key: String::new(),
            gemini_model: default_gemini_model(),
            hotkey_enabled: default_hotkey_enabled(),
        }
    }
}

impl OcrConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = env::var("TESSERACT_PATH") {
            self.tesseract_path = path;
        }
        if let Ok(key) = env::var("GOOGLE_API_KEY") {
            self.gemini_api_key = key;
        }
        if let Some(engine) = env::var("SNIPGRAB_ENGINE")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.engine = engine;
        }
        if let Ok(language) = env::var("SNIPGRAB_LANGUAGE") {
            self.language = language;
        }
    }
}
