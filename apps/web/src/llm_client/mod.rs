/// LLM Client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the generative AI service directly.
/// All LLM interactions MUST go through the `GenerativeModel` trait defined here.
///
/// Model: gemini-2.5-flash (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;
pub mod schema;
#[cfg(test)]
pub mod testing;

pub use schema::ResponseSchema;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.5-flash";
const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content ({reason})")]
    EmptyContent { reason: String },
}

/// A text-generation backend that can be asked for JSON conforming to a schema.
///
/// Implementations return the raw response text; callers own parsing and validation.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate_json(&self, prompt: &str, schema: &ResponseSchema)
        -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a ResponseSchema,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<Usage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl LlmResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Best available explanation for a response without text.
    fn empty_reason(&self) -> String {
        if let Some(reason) = self
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            return format!("prompt blocked: {reason}");
        }
        match self
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
        {
            Some(reason) => format!("finish reason: {reason}"),
            None => "no candidates".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The Gemini-backed client used in production.
/// Wraps the `generateContent` endpoint with structured output helpers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().build()?,
            api_key,
        })
    }

    /// Makes a single call to the Gemini API, returning the full response object.
    /// No retries: every failure is reported to the caller as-is.
    pub async fn call(
        &self,
        prompt: &str,
        system: Option<&str>,
        schema: &ResponseSchema,
    ) -> Result<LlmResponse, LlmError> {
        let request_body = build_request(prompt, system, schema);
        let url = format!("{GEMINI_API_BASE}/{MODEL}:generateContent");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(body),
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        if let Some(usage) = &llm_response.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={}, candidate_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(llm_response)
    }
}

#[async_trait]
impl GenerativeModel for LlmClient {
    async fn generate_json(
        &self,
        prompt: &str,
        schema: &ResponseSchema,
    ) -> Result<String, LlmError> {
        let response = self
            .call(prompt, Some(prompts::JSON_ONLY_SYSTEM), schema)
            .await?;

        response.text().ok_or_else(|| LlmError::EmptyContent {
            reason: response.empty_reason(),
        })
    }
}

fn build_request<'a>(
    prompt: &'a str,
    system: Option<&'a str>,
    schema: &'a ResponseSchema,
) -> GeminiRequest<'a> {
    GeminiRequest {
        contents: vec![GeminiContent {
            role: Some("user"),
            parts: vec![GeminiPart { text: prompt }],
        }],
        system_instruction: system.map(|text| GeminiContent {
            role: None,
            parts: vec![GeminiPart { text }],
        }),
        generation_config: GenerationConfig {
            response_mime_type: JSON_MIME_TYPE,
            response_schema: schema,
        },
    }
}

/// Pulls `error.message` out of a Gemini error body, falling back to the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<GeminiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "  {\"key\": \"value\"}\n";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_request_carries_prompt_system_and_schema() {
        let schema = ResponseSchema::object()
            .required_property("points", ResponseSchema::array_of(ResponseSchema::string()));
        let request = build_request("Review this.", Some("JSON only."), &schema);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "Review this.");
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "JSON only.");
        assert!(value["systemInstruction"].get("role").is_none());
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            value["generationConfig"]["responseSchema"]["required"],
            json!(["points"])
        );
    }

    #[test]
    fn test_request_without_system_omits_instruction() {
        let schema = ResponseSchema::object();
        let value = serde_json::to_value(build_request("hi", None, &schema)).unwrap();
        assert!(value.get("systemInstruction").is_none());
    }

    #[test]
    fn test_response_text_joins_first_candidate_parts() {
        let body = json!({
            "candidates": [
                {
                    "content": { "parts": [{ "text": "{\"a\":" }, { "text": "1}" }], "role": "model" },
                    "finishReason": "STOP"
                },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ],
            "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 4 }
        });

        let response: LlmResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.text().as_deref(), Some("{\"a\":1}"));
        assert_eq!(response.usage_metadata.unwrap().prompt_token_count, 12);
    }

    #[test]
    fn test_blocked_prompt_has_no_text_and_reports_reason() {
        let body = json!({ "promptFeedback": { "blockReason": "SAFETY" } });

        let response: LlmResponse = serde_json::from_value(body).unwrap();
        assert!(response.text().is_none());
        assert_eq!(response.empty_reason(), "prompt blocked: SAFETY");
    }

    #[test]
    fn test_empty_candidate_reports_finish_reason() {
        let body = json!({ "candidates": [{ "finishReason": "MAX_TOKENS" }] });

        let response: LlmResponse = serde_json::from_value(body).unwrap();
        assert!(response.text().is_none());
        assert_eq!(response.empty_reason(), "finish reason: MAX_TOKENS");
    }

    #[test]
    fn test_api_error_message_parsed_from_gemini_body() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(api_error_message(body.to_string()), "API key not valid.");
    }

    #[test]
    fn test_api_error_message_falls_back_to_raw_body() {
        assert_eq!(
            api_error_message("upstream timeout".to_string()),
            "upstream timeout"
        );
    }
}
