use snip_types::Language;

/// OCR backend interface.
#[async_trait::async_trait]
pub trait OcrEngine: Send + Sync {
    /// Recognize text in a PNG image.
    ///
    /// An image with no readable text yields an empty string, not an error.
    async fn recognize(&self, png: &[u8], language: &Language) -> Result<String, OcrError>;

    fn metadata(&self) -> EngineMetadata;
}

#[derive(Debug, Clone)]
pub struct EngineMetadata {
    pub name: &'static str,
    pub requires_network: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("Tesseract executable not found at '{path}'")]
    TesseractNotFound { path: String },

    #[error("Tesseract exited with {status}: {stderr}")]
    TesseractFailed {
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("Tesseract produced invalid UTF-8 output")]
    InvalidOutput(#[from] std::string::FromUtf8Error),

    #[error("Gemini API key is not set")]
    MissingApiKey,

    #[error("Gemini API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Normalize recognized text before it leaves the engine layer.
pub(crate) fn postprocess(text: &str) -> String {
    use unicode_normalization::UnicodeNormalization;

    text.nfc().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postprocess_trims_and_normalizes() {
        assert_eq!(postprocess("  hello world \n"), "hello world");
        // Combining acute accent folds into the precomposed form.
        assert_eq!(postprocess("cafe\u{0301}"), "caf\u{00e9}");
        assert_eq!(postprocess("\n\n"), "");
    }
}
