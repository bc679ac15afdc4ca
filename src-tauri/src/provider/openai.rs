//! OpenAI-compatible Provider
//!
//! `POST {base_url}/chat/completions` with a bearer token.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::traits::{ChatMessage, CompletionProvider, CompletionRequest, ProviderError, ProviderResult};
use crate::config::AssistantConfig;

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    code: Option<String>,
}

pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl OpenAiProvider {
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, request: &CompletionRequest) -> ProviderResult<String> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;

        let body = ChatRequest {
            model: &self.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request.json_output.then_some(ResponseFormat { kind: "json_object" }),
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(classify_error(status.as_u16(), &text));
        }

        extract_content(&text)
    }
}

/// Map a failed response to a provider error, spotting bad credentials
pub fn classify_error(status: u16, body: &str) -> ProviderError {
    let detail = serde_json::from_str::<ApiErrorBody>(body).ok().map(|b| b.error);
    let invalid_key = detail
        .as_ref()
        .and_then(|d| d.code.as_deref())
        .map(|code| code == "invalid_api_key")
        .unwrap_or(false);
    let message = detail
        .map(|d| d.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.trim().to_string());

    if status == 401 || invalid_key {
        ProviderError::Unauthorized(message)
    } else {
        ProviderError::Status { status, message }
    }
}

/// First choice's content from a successful response body
pub fn extract_content(body: &str) -> ProviderResult<String> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(ProviderError::EmptyResponse)
}
