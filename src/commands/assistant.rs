//! Assistant Commands
//!
//! Frontend binding for the backend `ask_assistant` command.

use serde::Serialize;
use crate::models::{AssistantFailure, AssistantReply};
use super::invoke;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct AssistantRequestArgs<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct AskAssistantArgs<'a> {
    request: AssistantRequestArgs<'a>,
}

// ========================
// Commands
// ========================

/// Send a prompt to the assistant.
///
/// Backend failures arrive as `{status, error}`; anything else (no Tauri
/// host, unexpected payload) is reported as a 500.
pub async fn ask_assistant(message: &str) -> Result<AssistantReply, AssistantFailure> {
    let js_args = serde_wasm_bindgen::to_value(&AskAssistantArgs {
        request: AssistantRequestArgs { message },
    })
    .map_err(|e| internal_failure(e.to_string()))?;

    match invoke("ask_assistant", js_args).await {
        Ok(result) => serde_wasm_bindgen::from_value(result).map_err(|e| internal_failure(e.to_string())),
        Err(err) => Err(serde_wasm_bindgen::from_value::<AssistantFailure>(err.clone())
            .unwrap_or_else(|_| internal_failure(format!("{:?}", err)))),
    }
}

fn internal_failure(error: String) -> AssistantFailure {
    AssistantFailure { status: 500, error }
}
