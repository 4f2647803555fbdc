use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use snip_types::Language;
use tokio::process::Command;

use crate::engine::{EngineMetadata, OcrEngine, OcrError, postprocess};

/// Local OCR via the Tesseract binary.
///
/// The image goes through a temp file because Tesseract reads its input from
/// a path; text comes back on stdout (`tesseract <image> stdout -l <code>`).
#[derive(Debug)]
pub struct TesseractEngine {
    path: PathBuf,
}

impl TesseractEngine {
    pub fn new(path: &str) -> Result<Self, OcrError> {
        if path.is_empty() || !Path::new(path).exists() {
            return Err(OcrError::TesseractNotFound {
                path: path.to_string(),
            });
        }
        Ok(Self {
            path: PathBuf::from(path),
        })
    }

    fn temp_image_path() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .subsec_nanos();
        std::env::temp_dir().join(format!("snipgrab-{}-{nanos}.png", std::process::id()))
    }
}

#[async_trait::async_trait]
impl OcrEngine for TesseractEngine {
    async fn recognize(&self, png: &[u8], language: &Language) -> Result<String, OcrError> {
        let image_path = Self::temp_image_path();
        tokio::fs::write(&image_path, png).await?;

        let output = Command::new(&self.path)
            .arg(&image_path)
            .arg("stdout")
            .arg("-l")
            .arg(language.tesseract_code)
            .output()
            .await;

        let _ = tokio::fs::remove_file(&image_path).await;

        let output = output?;
        if !output.status.success() {
            return Err(OcrError::TesseractFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = String::from_utf8(output.stdout)?;
        tracing::debug!("tesseract returned {} bytes", text.len());
        Ok(postprocess(&text))
    }

    fn metadata(&self) -> EngineMetadata {
        EngineMetadata {
            name: "tesseract",
            requires_network: false,
        }
    }
}
