//! Provider Layer
//!
//! Completion backend abstractions and implementations.

mod traits;
mod openai;

pub use traits::{ChatMessage, CompletionProvider, CompletionRequest, ProviderError, ProviderResult, TEXT_INSTRUCTION};
pub use openai::OpenAiProvider;
