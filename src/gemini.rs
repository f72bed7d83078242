//! Gemini `generateContent` client used for task suggestions.

use std::time::Duration;

use recurdate_core::config::SuggestConfig;
use recurdate_core::error::{RecurError, RecurResult};
use recurdate_core::suggest::Suggester;
use serde::{Deserialize, Serialize};
use tracing::debug;

const NO_SUGGESTIONS: &str = "No suggestions found. Please try again.";

#[derive(Debug, Serialize, Deserialize, Default)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

fn request_body(prompt: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }],
    }
}

/// Text of the first part of the first candidate.
fn extract_text(response: GenerateContentResponse) -> RecurResult<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| RecurError::Suggestion(NO_SUGGESTIONS.to_string()))
}

/// Error message for a non-success response: the API's own message when the
/// body carries one, otherwise the status code.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
        .unwrap_or_else(|| format!("API call failed with status: {}", status))
}

pub struct GeminiSuggester {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl GeminiSuggester {
    pub fn from_config(config: &SuggestConfig) -> RecurResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                RecurError::Config(
                    "No API key configured. Set suggest.api_key in config.toml \
                     or RECURDATE_SUGGEST__API_KEY"
                        .into(),
                )
            })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RecurError::Config(format!("Could not build HTTP client: {e}")))?;

        Ok(GeminiSuggester {
            client,
            url: format!(
                "{}/models/{}:generateContent",
                config.endpoint.trim_end_matches('/'),
                config.model
            ),
            api_key,
        })
    }
}

impl Suggester for GeminiSuggester {
    async fn suggest(&self, prompt: &str) -> RecurResult<String> {
        debug!(url = %self.url, "Sending suggestion request");

        let response = self
            .client
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body(prompt))
            .send()
            .await
            .map_err(|e| RecurError::Suggestion(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecurError::Suggestion(error_message(status.as_u16(), &body)));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| RecurError::Serialization(format!("Invalid response: {e}")))?;

        extract_text(parsed)
    }
}
