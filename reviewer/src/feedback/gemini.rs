//! # Gemini Analyzer
//!
//! This module provides an implementation of the [`Analyzer`] trait backed by Google's Gemini
//! `generateContent` REST endpoint. Each call builds the review prompt for one file, sends a
//! single request and returns the text of the first candidate unmodified.
//!
//! ## Overview
//!
//! - [`GeminiClient`] is built once from an [`AppConfig`] and reused for every submission.
//! - The API key travels in the `x-goog-api-key` header, never in the URL, so transport
//!   errors copied into the report do not leak it.
//! - There are no retries and no timeout beyond reqwest's defaults; a failure surfaces as an
//!   [`AnalysisError`] for that submission only.
//!
//! ## Testing
//!
//! Request and response shapes are covered through serde without any network access.

use crate::error::AnalysisError;
use crate::feedback::prompt::build_prompt;
use crate::traits::analyzer::Analyzer;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use util::config::AppConfig;
use util::languages::Language;

/// Analyzer that asks a Gemini model for feedback.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    thinking_budget: Option<u32>,
    language: Language,
}

/// Request body for the Gemini API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// Content wrapper shared by requests and responses.
#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

/// A single text part.
#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Optional generation settings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    thinking_config: ThinkingConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

/// Response from the Gemini API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

/// Present when the prompt itself was blocked.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GeminiClient {
    /// Builds a client from the application configuration.
    ///
    /// The prompt language is derived from the configured file suffix.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.clone(),
            thinking_budget: config.gemini_thinking_budget,
            language: Language::from_suffix(&config.file_suffix),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn request_body(&self, content: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(content, self.language),
                }],
            }],
            generation_config: self.thinking_budget.map(|thinking_budget| GenerationConfig {
                thinking_config: ThinkingConfig { thinking_budget },
            }),
        }
    }
}

/// Pulls the feedback text out of a decoded response.
///
/// All parts of the first candidate are concatenated. A response without any
/// text is an error carrying the finish or block reason when one is given.
fn extract_text(response: GeminiResponse) -> Result<String, AnalysisError> {
    let block_reason = response.prompt_feedback.and_then(|f| f.block_reason);

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(AnalysisError::EmptyResponse(block_reason));
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(AnalysisError::EmptyResponse(
            candidate.finish_reason.or(block_reason),
        ));
    }
    Ok(text)
}

#[async_trait]
impl Analyzer for GeminiClient {
    /// Sends one `generateContent` request for `content` and returns the reply verbatim.
    async fn analyze(&self, content: &str) -> Result<String, AnalysisError> {
        let body = self.request_body(content);
        debug!(model = %self.model, bytes = content.len(), "sending generateContent request");

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            return Err(AnalysisError::Status {
                status: status.as_u16(),
                body: response_text,
            });
        }

        let decoded = serde_json::from_str::<GeminiResponse>(&response_text).map_err(|e| {
            AnalysisError::Decode {
                message: e.to_string(),
                body: response_text.clone(),
            }
        })?;

        extract_text(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn client(config: AppConfig) -> GeminiClient {
        GeminiClient::new(&config)
    }

    fn decode(value: Value) -> GeminiResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn endpoint_uses_model_and_base_url() {
        let c = client(AppConfig::new("secret").with_base_url("http://localhost:8080/v1beta/"));
        assert_eq!(
            c.endpoint(),
            "http://localhost:8080/v1beta/models/gemini-2.0-flash:generateContent"
        );
        assert!(!c.endpoint().contains("secret"));
    }

    #[test]
    fn request_body_embeds_prompt_without_generation_config() {
        let c = client(AppConfig::new("k"));
        let value = serde_json::to_value(c.request_body("int main(void) {}")).unwrap();

        let text = value["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.contains("```c\nint main(void) {}\n```"));
        assert!(value.get("generationConfig").is_none());
    }

    #[test]
    fn request_body_includes_thinking_budget_when_configured() {
        let c = client(AppConfig::new("k").with_thinking_budget(Some(0)));
        let value = serde_json::to_value(c.request_body("x")).unwrap();
        assert_eq!(value["generationConfig"]["thinkingConfig"]["thinkingBudget"], 0);
    }

    #[test]
    fn prompt_language_follows_suffix() {
        let c = client(AppConfig::new("k").with_file_suffix(".java"));
        let value = serde_json::to_value(c.request_body("class Main {}")).unwrap();
        let text = value["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.contains("following Java code"));
    }

    #[test]
    fn extracts_first_candidate_text_verbatim() {
        let response = decode(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "Your code was correct." }], "role": "model" },
                  "finishReason": "STOP" },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }));
        assert_eq!(extract_text(response).unwrap(), "Your code was correct.");
    }

    #[test]
    fn concatenates_all_parts() {
        let response = decode(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Line 3: missing ';'.\n" }, { "text": "**Logic:** off by one." }] } }]
        }));
        assert_eq!(
            extract_text(response).unwrap(),
            "Line 3: missing ';'.\n**Logic:** off by one."
        );
    }

    #[test]
    fn blocked_prompt_is_an_error() {
        let response = decode(json!({ "promptFeedback": { "blockReason": "SAFETY" } }));
        let err = extract_text(response).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyResponse(Some(ref r)) if r == "SAFETY"));
    }

    #[test]
    fn candidate_without_text_reports_finish_reason() {
        let response = decode(json!({ "candidates": [{ "finishReason": "MAX_TOKENS" }] }));
        let err = extract_text(response).unwrap_err();
        assert_eq!(err.to_string(), "model returned no text (finish reason: MAX_TOKENS)");
    }
}
