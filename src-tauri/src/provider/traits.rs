//! Provider Layer - Core Traits
//!
//! Abstract interface to a chat-completion backend.
//! Implementations can use a hosted API, a local model, a test double, etc.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::AssistantMode;

/// Errors from the completion backend
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// No credential configured
    MissingApiKey,
    /// Credential rejected by the provider
    Unauthorized(String),
    /// Non-success response
    Status { status: u16, message: String },
    /// Network / TLS / timeout
    Transport(String),
    /// Response did not contain any message content
    EmptyResponse,
    /// Response body was not the expected JSON
    InvalidResponse(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::MissingApiKey => write!(f, "API key is not configured"),
            ProviderError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ProviderError::Status { status, message } => write!(f, "HTTP {}: {}", status, message),
            ProviderError::Transport(msg) => write!(f, "Request failed: {}", msg),
            ProviderError::EmptyResponse => write!(f, "No content in response"),
            ProviderError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

pub type ProviderResult<T> = Result<T, ProviderError>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: &str) -> Self {
        Self { role: "system".to_string(), content: content.to_string() }
    }

    pub fn user(content: &str) -> Self {
        Self { role: "user".to_string(), content: content.to_string() }
    }
}

/// One completion call
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Ask for JSON-object output
    pub json_output: bool,
}

pub const TEXT_INSTRUCTION: &str = "Create notes with a title line and bullet points below. Be concise.";

pub const STRUCTURED_INSTRUCTION: &str = "You turn requests into sticky notes. \
If the request describes tasks, a list or a plan, reply with a JSON object of the form \
{\"title\": string, \"todos\": [string]} using short todo entries. \
Otherwise reply with a JSON object {\"message\": string} containing a brief answer.";

impl CompletionRequest {
    /// Request shape for a deployment mode
    pub fn for_mode(mode: AssistantMode, prompt: &str) -> Self {
        match mode {
            AssistantMode::Text => Self {
                messages: vec![ChatMessage::system(TEXT_INSTRUCTION), ChatMessage::user(prompt)],
                temperature: 0.7,
                max_tokens: 200,
                json_output: false,
            },
            AssistantMode::Structured => Self {
                messages: vec![ChatMessage::system(STRUCTURED_INSTRUCTION), ChatMessage::user(prompt)],
                temperature: 0.7,
                max_tokens: 200,
                json_output: true,
            },
        }
    }
}

/// Chat-completion backend
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the first choice's message content
    async fn complete(&self, request: &CompletionRequest) -> ProviderResult<String>;
}
