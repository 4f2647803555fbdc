use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use snip_types::Language;

use crate::engine::{EngineMetadata, OcrEngine, OcrError, postprocess};

const TIMEOUT_SECS: u64 = 30;

/// Remote OCR via the Gemini generateContent API.
pub struct GeminiEngine {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiEngine {
    pub fn new(api_key: String, model: String) -> Result<Self, OcrError> {
        if api_key.is_empty() {
            return Err(OcrError::MissingApiKey);
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            api_key,
            model,
        })
    }
}

fn request_body(png: &[u8], language: &Language) -> serde_json::Value {
    serde_json::json!({
        "contents": [{
            "parts": [
                {
                    "inlineData": {
                        "mimeType": "image/png",
                        "data": STANDARD.encode(png)
                    }
                },
                {
                    "text": format!(
                        "Whats written in this image in {}. Give me only the OCR text.",
                        language.name
                    )
                }
            ]
        }]
    })
}

fn extract_text(json: &serde_json::Value) -> Option<&str> {
    json["candidates"]
        .as_array()?
        .first()?["content"]["parts"]
        .as_array()?
        .first()?["text"]
        .as_str()
}

#[async_trait::async_trait]
impl OcrEngine for GeminiEngine {
    async fn recognize(&self, png: &[u8], language: &Language) -> Result<String, OcrError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request_body(png, language))
            .send()
            .await?;

        let status = response.status();
        let json: serde_json::Value = response.json().await?;

        if !status.is_success() {
            let message = json["error"]["message"]
                .as_str()
                .unwrap_or("unknown error")
                .to_string();
            return Err(OcrError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = extract_text(&json).unwrap_or("");
        tracing::debug!("gemini returned {} chars", text.len());
        Ok(postprocess(text))
    }

    fn metadata(&self) -> EngineMetadata {
        EngineMetadata {
            name: "gemini",
            requires_network: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_is_rejected() {
        assert!(matches!(
            GeminiEngine::new(String::new(), "gemini-1.5-pro".into()),
            Err(OcrError::MissingApiKey)
        ));
    }

    #[test]
    fn request_body_carries_png_and_prompt() {
        let language = Language::by_code("jpn").unwrap();
        let body = request_body(&[1, 2, 3], language);

        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[0]["inlineData"]["data"], STANDARD.encode([1, 2, 3]));

        let prompt = parts[1]["text"].as_str().unwrap();
        assert!(prompt.contains("Japanese"));
        assert!(prompt.contains("only the OCR text"));
    }

    #[test]
    fn extract_text_reads_first_candidate() {
        let json = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "  snipped text\n" }] }
            }]
        });
        assert_eq!(extract_text(&json), Some("  snipped text\n"));
    }

    #[test]
    fn extract_text_handles_empty_response() {
        assert_eq!(extract_text(&serde_json::json!({})), None);
        assert_eq!(extract_text(&serde_json::json!({ "candidates": [] })), None);
    }
}
