//! LLM client — the single point of entry for all Claude API calls.
//!
//! ARCHITECTURAL RULE: no other module may call the Anthropic API directly.
//! The only LLM use in this service is the bulk parse of pasted profile text
//! into a `ProfileRecord`; everything downstream of that is pure heuristics.

use anyhow::Result;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::llm_client::prompts::{PROFILE_PARSE_PROMPT, PROFILE_PARSE_SYSTEM};
use crate::models::profile::ProfileRecord;

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Hardcoded to prevent accidental model drift between environments.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Upstream unavailable after {retries} retries: {last}")]
    Exhausted { retries: u32, last: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [UserMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct UserMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Thin wrapper over the Anthropic Messages API with retry on 429/5xx and a
/// JSON-decoding convenience for structured extraction prompts.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Parses pasted free-text profile content into a `ProfileRecord`.
    pub async fn parse_profile(&self, raw_text: &str) -> Result<ProfileRecord, LlmError> {
        let prompt = PROFILE_PARSE_PROMPT.replace("{raw_text}", raw_text);
        self.call_json(&prompt, PROFILE_PARSE_SYSTEM).await
    }

    /// Calls the LLM and deserializes its text response as JSON.
    /// The prompt must instruct the model to return valid JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let text = self.call_text(prompt, system).await?;
        serde_json::from_str(strip_json_fences(&text)).map_err(LlmError::Parse)
    }

    /// Makes a Messages API call, retrying rate limits and server errors with
    /// exponential backoff (1s, 2s, 4s), and returns the first text block.
    pub async fn call_text(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let request_body = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: [UserMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            match self.send_once(&request_body).await {
                Ok(response) => {
                    debug!(
                        "LLM call succeeded: input_tokens={}, output_tokens={}",
                        response.usage.input_tokens, response.usage.output_tokens
                    );
                    return response
                        .content
                        .iter()
                        .find(|b| b.block_type == "text")
                        .and_then(|b| b.text.clone())
                        .ok_or(LlmError::EmptyContent);
                }
                // Rate limits and 5xx are retryable; anything else is final.
                Err(e @ LlmError::Http(_)) => last_error = Some(e),
                Err(LlmError::Api { status, message }) if status == 429 || status >= 500 => {
                    warn!("LLM API returned {status}: {message}");
                    last_error = Some(LlmError::Api { status, message });
                }
                Err(e) => return Err(e),
            }
        }

        let last = match last_error {
            Some(e) => e.to_string(),
            None => "no attempt recorded".to_string(),
        };
        Err(LlmError::Exhausted {
            retries: MAX_RETRIES,
            last,
        })
    }

    async fn send_once(&self, body: &MessagesRequest<'_>) -> Result<MessagesResponse, LlmError> {
        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&raw)
                .map(|e| e.error.message)
                .unwrap_or(raw);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    inner
        .trim_start()
        .strip_suffix("```")
        .map(str::trim)
        .unwrap_or_else(|| inner.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"name\": \"Ada\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"name\": \"Ada\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"name\": \"Ada\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"name\": \"Ada\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"name\": \"Ada\"}";
        assert_eq!(strip_json_fences(input), "{\"name\": \"Ada\"}");
    }

    #[test]
    fn test_exhausted_error_keeps_retry_count_and_cause() {
        let err = LlmError::Exhausted {
            retries: 3,
            last: "API error (status 529): overloaded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Upstream unavailable after 3 retries: API error (status 529): overloaded"
        );
    }

    #[test]
    fn test_fenced_profile_record_deserializes() {
        let fenced = "```json\n{\"name\": \"Ada\", \"headline\": \"Engineer\"}\n```";
        let profile: ProfileRecord = serde_json::from_str(strip_json_fences(fenced)).unwrap();
        assert_eq!(profile.name, "Ada");
        assert!(profile.experience.is_empty());
    }
}
