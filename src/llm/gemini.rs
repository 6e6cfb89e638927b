//! Gemini completion client — non-streaming `generateContent` calls.
//!
//! - API key in URL query param, not header
//! - Text call parts:   [instruction, user text]
//! - Vision call parts: [inline image, instruction]
//! - Reply text is the concatenation of `candidates[0].content.parts[*].text`
//! - Token usage in `usageMetadata`
//!
//! One round-trip per call. No retries: every failure is returned as an
//! `ApiError` for the caller to show.

use super::provider::CompletionClient;
use super::types::ImageInput;
use crate::config::AppConfig;
use crate::error::ApiError;
use serde_json::Value;

/// Longest error body kept in `ApiError::Status`.
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    api_base: String,
    text_model: String,
    vision_model: String,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
            text_model: config.text_model.clone(),
            vision_model: config.vision_model.clone(),
        }
    }

    async fn generate(&self, model: &str, body: Value) -> Result<String, ApiError> {
        let api_key = match self.api_key.as_deref() {
            Some(key) => key,
            None => {
                log::warn!("[LLM] No GOOGLE_API_KEY set — skipping request");
                return Err(ApiError::MissingApiKey);
            }
        };

        log::info!("[LLM] Provider: gemini");
        log::info!("[LLM] Model: {}", model);
        let start = std::time::Instant::now();

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.api_base, model, api_key
        );

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                // The URL carries the key.
                let e = e.without_url();
                log::error!("[LLM] HTTP request failed: {}", e);
                ApiError::Http(e)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Http(e.without_url()))?;

        if !status.is_success() {
            let body = truncate_chars(&text, MAX_ERROR_BODY_CHARS);
            log::error!("[LLM] Gemini API returned {}: {}", status, body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        log::info!("[LLM] API latency: {}ms", start.elapsed().as_millis());

        let json: Value = serde_json::from_str(&text).map_err(|e| {
            log::warn!("[LLM] Response is not JSON: {}", e);
            ApiError::InvalidResponse(e.to_string())
        })?;

        if let Some(usage) = json.get("usageMetadata") {
            log::info!(
                "[LLM] Input tokens: {}",
                usage["promptTokenCount"].as_u64().unwrap_or(0)
            );
            log::info!(
                "[LLM] Output tokens: {}",
                usage["candidatesTokenCount"].as_u64().unwrap_or(0)
            );
        }

        extract_gemini_text(&json)
    }
}

impl CompletionClient for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete_text(&self, prompt: &str, input: &str) -> Result<String, ApiError> {
        log::info!("[LLM] Text request: {} chars", input.len());
        self.generate(&self.text_model, text_request_body(prompt, input))
            .await
    }

    async fn complete_vision(&self, prompt: &str, image: &ImageInput) -> Result<String, ApiError> {
        log::info!(
            "[LLM] Vision request: {} ({} bytes)",
            image.mime_type.as_str(),
            image.bytes.len()
        );
        self.generate(&self.vision_model, vision_request_body(prompt, image))
            .await
    }
}

/// Request body for a text completion: instruction first, then the user text.
pub fn text_request_body(prompt: &str, input: &str) -> Value {
    serde_json::json!({
        "contents": [
            {
                "role": "user",
                "parts": [
                    { "text": prompt },
                    { "text": input }
                ]
            }
        ]
    })
}

/// Request body for a vision completion: the image first, then the instruction.
pub fn vision_request_body(prompt: &str, image: &ImageInput) -> Value {
    serde_json::json!({
        "contents": [
            {
                "role": "user",
                "parts": [
                    {
                        "inlineData": {
                            "mimeType": image.mime_type.as_str(),
                            "data": image.base64_data()
                        }
                    },
                    { "text": prompt }
                ]
            }
        ]
    })
}

/// Pull the reply text out of a `generateContent` response.
///
/// Joins every text part of the first candidate. A response without text
/// (blocked prompt, safety stop) becomes `EmptyResponse` with the reason.
pub fn extract_gemini_text(json: &Value) -> Result<String, ApiError> {
    let candidate = json.get("candidates").and_then(|c| c.get(0));

    let text: String = candidate
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                .collect()
        })
        .unwrap_or_default();

    if !text.trim().is_empty() {
        return Ok(text);
    }

    let reason = json
        .get("promptFeedback")
        .and_then(|f| f.get("blockReason"))
        .or_else(|| candidate.and_then(|c| c.get("finishReason")))
        .and_then(|r| r.as_str())
        .map(|r| r.to_string());
    log::warn!("[LLM] Response contained no text (reason: {:?})", reason);
    Err(ApiError::EmptyResponse { reason })
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
