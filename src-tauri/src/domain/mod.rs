//! Domain Layer
//!
//! Contains the assistant's request/response shapes and errors.
//! This layer has NO external dependencies (except serde, chrono, rand).

mod assistant;
mod error;
mod note;

pub use assistant::{AssistantMode, AssistantRequest, AssistantResponse, StructuredReply};
pub use error::{AssistantError, AssistantResult};
pub use note::{GeneratedNote, TodoItem};
