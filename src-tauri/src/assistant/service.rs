//! Assistant Service
//!
//! Validates the prompt, calls the provider and shapes the reply for the
//! configured mode.

use std::sync::Arc;

use chrono::Utc;

use super::normalize::structured_reply;
use crate::domain::{AssistantError, AssistantMode, AssistantRequest, AssistantResponse, AssistantResult};
use crate::provider::{CompletionProvider, CompletionRequest, ProviderError};

pub const PROMPT_REQUIRED: &str = "Prompt is required";
pub const INVALID_API_KEY: &str = "Invalid API key. Please check your OpenAI API key configuration.";
pub const MISSING_API_KEY: &str = "OpenAI API key is not configured. Set OPENAI_API_KEY and restart QuillForge.";

impl From<ProviderError> for AssistantError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::MissingApiKey => AssistantError::Unauthorized(MISSING_API_KEY.to_string()),
            ProviderError::Unauthorized(_) => AssistantError::Unauthorized(INVALID_API_KEY.to_string()),
            other => AssistantError::Upstream(format!("Failed to generate note content: {}", other)),
        }
    }
}

#[derive(Clone)]
pub struct AssistantService {
    provider: Arc<dyn CompletionProvider>,
    mode: AssistantMode,
}

impl AssistantService {
    pub fn new(provider: Arc<dyn CompletionProvider>, mode: AssistantMode) -> Self {
        Self { provider, mode }
    }

    pub async fn ask(&self, request: &AssistantRequest) -> AssistantResult<AssistantResponse> {
        let prompt = request
            .text()
            .ok_or_else(|| AssistantError::BadRequest(PROMPT_REQUIRED.to_string()))?;

        log::info!("[ASSISTANT] Prompt ({}): {}", self.mode.as_str(), prompt);

        let completion = CompletionRequest::for_mode(self.mode, prompt);
        let content = self.provider.complete(&completion).await.map_err(|e| {
            log::error!("[ASSISTANT] Provider failed: {}", e);
            AssistantError::from(e)
        })?;

        log::info!("[ASSISTANT] Response: {}", content);

        Ok(match self.mode {
            AssistantMode::Text => AssistantResponse::Text { content },
            AssistantMode::Structured => AssistantResponse::Structured(structured_reply(&content, Utc::now())),
        })
    }
}
