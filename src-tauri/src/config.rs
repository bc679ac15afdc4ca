//! Assistant configuration, read once from the environment at startup.

use crate::domain::AssistantMode;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, PartialEq)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub mode: AssistantMode,
    pub model: String,
    pub base_url: String,
}

impl AssistantConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = get("OPENAI_API_KEY");
        if api_key.is_none() {
            log::warn!("[CONFIG] OPENAI_API_KEY is not set, assistant requests will be rejected");
        }

        let mode = match get("QUILLFORGE_ASSISTANT_MODE") {
            Some(raw) => AssistantMode::parse(&raw).unwrap_or_else(|| {
                log::warn!("[CONFIG] Unknown assistant mode '{}', using structured", raw);
                AssistantMode::default()
            }),
            None => AssistantMode::default(),
        };

        Self {
            api_key,
            mode,
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}
