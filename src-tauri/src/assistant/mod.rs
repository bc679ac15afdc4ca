//! Assistant Layer
//!
//! Prompt validation, provider call, reply shaping.

mod normalize;
mod service;

#[cfg(test)]
mod tests;

pub use service::{AssistantService, INVALID_API_KEY, MISSING_API_KEY, PROMPT_REQUIRED};
