//! Assistant Request/Response Types

use serde::{Deserialize, Serialize};

use super::note::GeneratedNote;

/// Which reply contract this deployment speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssistantMode {
    /// Freeform text, returned as `{content}`
    Text,
    /// JSON mode, returned as `{message, isNote, note}`
    #[default]
    Structured,
}

impl AssistantMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssistantMode::Text => "text",
            AssistantMode::Structured => "structured",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Some(AssistantMode::Text),
            "structured" | "json" => Some(AssistantMode::Structured),
            _ => None,
        }
    }
}

/// Incoming prompt; older clients send `prompt`, the chat box sends `message`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AssistantRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
}

impl AssistantRequest {
    pub fn message(text: &str) -> Self {
        Self {
            message: Some(text.to_string()),
            prompt: None,
        }
    }

    /// The first non-blank of `prompt` / `message`
    pub fn text(&self) -> Option<&str> {
        [self.prompt.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .find(|t| !t.trim().is_empty())
    }
}

/// Structured-mode reply
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredReply {
    pub message: String,
    pub is_note: bool,
    pub note: Option<GeneratedNote>,
}

/// Reply in the active mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AssistantResponse {
    Text { content: String },
    Structured(StructuredReply),
}
