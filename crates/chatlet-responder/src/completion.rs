//! Wire format for the text-completion endpoint.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ResponderConfig;
use crate::error::ResponderError;

#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    pub text: Option<String>,
}

impl CompletionResponse {
    /// The text of the first choice, if the endpoint returned one.
    pub fn into_text(self) -> Option<String> {
        self.choices.into_iter().next().and_then(|c| c.text)
    }
}

/// POST one prompt to the completion endpoint and return the raw
/// completion text (untrimmed).
///
/// Sends exactly one request. There is no retry and no timeout beyond the
/// HTTP client's own.
pub async fn request_completion(
    http: &reqwest::Client,
    config: &ResponderConfig,
    prompt: &str,
) -> Result<String, ResponderError> {
    let api_key = config.credentials.resolve()?;

    let body = CompletionRequest {
        model: &config.model,
        prompt,
        max_tokens: config.max_tokens,
        temperature: config.temperature,
    };

    debug!(
        endpoint = %config.endpoint,
        model = %config.model,
        prompt_len = prompt.len(),
        "requesting completion"
    );

    let response = http
        .post(&config.endpoint)
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        return Err(ResponderError::HttpStatus {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }

    let parsed: CompletionResponse = serde_json::from_slice(&bytes)?;
    parsed.into_text().ok_or(ResponderError::MissingCompletion)
}
